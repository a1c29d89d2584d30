//! Route graph construction and queries.

use skyroute::{Entry, GraphError, GraphKind, GraphOptions, RouteGraph};

fn europe(kind: GraphKind) -> RouteGraph {
    let mut g = RouteGraph::new(5, kind).unwrap();
    g.add_airport(120, "LHR", "United Kingdom", "London", "Heathrow", 0).unwrap();
    g.add_airport(130, "MAD", "Spain", "Madrid", "Barajas", 1).unwrap();
    g.add_airport(140, "FRA", "Germany", "Frankfurt", "Frankfurt am Main", 1).unwrap();
    g.add_airport(160, "BER", "Germany", "Berlin", "Brandenburg", 1).unwrap();
    g
}

fn walk_slot(g: &mut RouteGraph, slot: usize) -> Vec<Entry> {
    let v = g.get_vertex_mut(slot).unwrap();
    let mut out = Vec::new();
    v.start_traversal();
    while !v.at_end() {
        out.push(v.current_neighbor().unwrap());
        v.advance().unwrap();
    }
    out
}

#[test]
fn test_end_to_end_directed_pair() {
    let mut g = RouteGraph::new(3, GraphKind::Directed).unwrap();
    g.add_airport(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6).unwrap();
    g.add_airport(200, "CDG", "France", "Paris", "Charles de Gaulle", 1).unwrap();
    assert_eq!(g.add_weighted_edge(100, 200, 9.0), Ok(true));

    assert_eq!(g.len(), 2);
    assert_eq!(walk_slot(&mut g, 0), vec![Entry::new(1, 9.0)]);
    assert!(g.is_neighbor_of(200, 100));
    assert!(!g.is_neighbor_of(100, 200));
}

#[test]
fn test_repeated_edge_is_stored_once() {
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        let mut g = europe(kind);
        assert_eq!(g.add_edge(120, 160), Ok(true));
        assert_eq!(g.add_edge(120, 160), Ok(true));

        let lhr = g.get_vertex(0).unwrap();
        let hits = lhr
            .neighbors()
            .unwrap()
            .iter()
            .filter(|e| e.neighbor_index == 3)
            .count();
        assert_eq!(hits, 1, "{kind:?}");
    }
}

#[test]
fn test_undirected_edges_are_symmetric() {
    let mut g = europe(GraphKind::Undirected);
    let edges = [(120, 160), (130, 120), (140, 160), (140, 120)];
    for (a, b) in edges {
        assert_eq!(g.add_edge(a, b), Ok(true));
    }
    for (a, b) in edges {
        assert!(g.is_neighbor_of(b, a));
        assert!(g.is_neighbor_of(a, b));
    }
    assert!(!g.is_neighbor_of(130, 160));
    assert_eq!(g.edge_count(), 2 * edges.len());
}

#[test]
fn test_directed_reverse_needs_its_own_edge() {
    let mut g = europe(GraphKind::Directed);
    g.add_weighted_edge(130, 120, 2.0).unwrap();
    assert!(g.is_neighbor_of(120, 130));
    assert!(!g.is_neighbor_of(130, 120));

    g.add_weighted_edge(120, 130, 2.0).unwrap();
    assert!(g.is_neighbor_of(130, 120));
}

#[test]
fn test_neighbor_order_follows_insertion() {
    let mut g = europe(GraphKind::Directed);
    g.add_weighted_edge(140, 160, 3.0).unwrap();
    g.add_weighted_edge(140, 120, 2.5).unwrap();
    g.add_weighted_edge(140, 130, 2.7).unwrap();

    assert_eq!(
        walk_slot(&mut g, 2),
        vec![Entry::new(3, 3.0), Entry::new(0, 2.5), Entry::new(1, 2.7)]
    );
    assert_eq!(g.neighbors_of(2).unwrap(), walk_slot(&mut g, 2));
}

#[test]
fn test_lazy_neighbor_lists() {
    let mut g = europe(GraphKind::Directed);
    g.add_edge(120, 160).unwrap();

    assert!(g.get_vertex(0).unwrap().has_neighbors());
    // Target of a directed edge gets no list of its own.
    assert!(!g.get_vertex(3).unwrap().has_neighbors());
    assert!(walk_slot(&mut g, 3).is_empty());
}

#[test]
fn test_self_loop() {
    let mut g = europe(GraphKind::Undirected);
    assert_eq!(g.add_edge(130, 130), Ok(true));
    assert!(g.is_neighbor_of(130, 130));
    assert_eq!(g.neighbors_of(1).unwrap(), vec![Entry::new(1, 0.0)]);
}

#[test]
fn test_failures() {
    assert!(matches!(
        RouteGraph::with_options(GraphOptions::new(0, GraphKind::Undirected)),
        Err(GraphError::InvalidArgument(_))
    ));

    let mut g = RouteGraph::new(1, GraphKind::Directed).unwrap();
    assert_eq!(g.add_edge(1, 1), Err(GraphError::EmptyGraph));
    g.add_airport(1, "AAA", "", "", "", 0).unwrap();
    assert_eq!(
        g.add_airport(2, "BBB", "", "", "", 0),
        Err(GraphError::CapacityExceeded { capacity: 1 })
    );
    assert_eq!(g.find_index_by_key(2), None);
    assert_eq!(g.add_edge(1, 2), Ok(false));
    assert!(matches!(g.get_vertex(1), Err(GraphError::IndexOutOfRange { index: 1, len: 1 })));
    assert!(matches!(g.neighbors_of(4), Err(GraphError::IndexOutOfRange { .. })));
}

#[test]
fn test_default_options() {
    let g = RouteGraph::with_options(GraphOptions::default()).unwrap();
    assert_eq!(g.capacity(), 10);
    assert_eq!(g.kind(), GraphKind::Directed);
    assert!(g.is_empty());
    g.delete();
}

#[test]
fn test_vertex_iteration_in_slot_order() {
    let g = europe(GraphKind::Directed);
    let codes: Vec<&str> = (&g).into_iter().map(|v| v.airport().iata_code.as_str()).collect();
    assert_eq!(codes, vec!["LHR", "MAD", "FRA", "BER"]);
}

#[test]
fn test_neighbor_lookup_walks_whole_list() {
    let mut g = europe(GraphKind::Directed);
    g.add_edge(120, 130).unwrap();
    g.add_edge(120, 140).unwrap();

    assert!(g.is_neighbor_of(140, 120));
    assert!(!g.is_neighbor_of(160, 120));
    assert!(!g.is_neighbor_of(120, 120));
}
