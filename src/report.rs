//! Route reports: a snapshot of a graph rendered as text or JSON.
//!
//! Building a report walks every vertex through its neighbor cursor, the
//! same protocol any external consumer of the graph uses.

use crate::collections::FixedString;
use crate::error::{GraphError, Result};
use crate::graph::{Airport, GraphKind, RouteGraph, IATA_LEN};
use core::fmt;
use serde::Serialize;

/// One outgoing route in a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteView {
    /// Slot of the destination vertex.
    pub to: usize,
    /// IATA code of the destination.
    pub iata: FixedString<IATA_LEN>,
    /// Edge weight (flight time in hours for the demo network).
    pub weight: f32,
}

/// One airport and its routes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportView {
    /// Vertex slot.
    pub slot: usize,
    /// Airport record.
    #[serde(flatten)]
    pub airport: Airport,
    /// Routes in insertion order.
    pub routes: Vec<RouteView>,
}

impl AirportView {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.airport;
        write!(
            f,
            "[{}] Airport {} ({}) {}, {}, {}, UTC {:+}",
            self.slot, a.id, a.iata_code, a.name, a.city, a.country, a.utc_offset
        )
    }
}

/// Snapshot of a whole graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    /// Edge-symmetry mode of the source graph.
    pub kind: GraphKind,
    /// Airports in slot order.
    pub airports: Vec<AirportView>,
}

impl GraphReport {
    /// Walks every vertex of `graph` and records its routes.
    ///
    /// Takes the graph mutably because each vertex's embedded neighbor
    /// cursor is moved during the walk.
    ///
    /// # Errors
    /// Propagates cursor or index errors, which indicate a corrupted graph.
    pub fn from_graph(graph: &mut RouteGraph) -> Result<Self> {
        let mut airports = Vec::with_capacity(graph.len());

        for slot in 0..graph.len() {
            let vertex = graph.get_vertex_mut(slot)?;
            let airport = *vertex.airport();

            let mut entries = Vec::with_capacity(vertex.degree());
            vertex.start_traversal();
            while !vertex.at_end() {
                entries.push(vertex.current_neighbor()?);
                vertex.advance()?;
            }

            let routes = entries
                .into_iter()
                .map(|entry| {
                    let target = graph.get_vertex(entry.neighbor_index)?;
                    Ok(RouteView {
                        to: entry.neighbor_index,
                        iata: target.airport().iata_code,
                        weight: entry.weight,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            airports.push(AirportView {
                slot,
                airport,
                routes,
            });
        }

        Ok(Self {
            kind: graph.kind(),
            airports,
        })
    }

    /// The first airport with `id`, mirroring the graph's first-wins lookup.
    pub fn airport(&self, id: i32) -> Option<&AirportView> {
        self.airports.iter().find(|view| view.airport.id == id)
    }

    /// One line listing the destinations reachable from `id`.
    ///
    /// # Errors
    /// [`GraphError::KeyNotFound`] if no airport has `id`.
    pub fn render_query(&self, id: i32) -> Result<String> {
        let view = self.airport(id).ok_or(GraphError::KeyNotFound(id))?;
        if view.routes.is_empty() {
            return Ok(format!("Flights from {id}: none."));
        }

        let targets = view
            .routes
            .iter()
            .map(|route| format!("{} ({:.2} h)", route.iata, route.weight))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("Flights from {id} go to {targets}."))
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GraphReport {
    /// Undirected graphs list every airport and its connections; directed
    /// graphs list only airports with departures, with route weights.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for view in &self.airports {
            match self.kind {
                GraphKind::Undirected => {
                    view.write_header(f)?;
                    if view.routes.is_empty() {
                        writeln!(f, ": no connections.")?;
                    } else {
                        let names = view
                            .routes
                            .iter()
                            .map(|route| route.iata.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        writeln!(f, ": connected to {names}.")?;
                    }
                }
                GraphKind::Directed => {
                    if view.routes.is_empty() {
                        continue;
                    }
                    view.write_header(f)?;
                    let flights = view
                        .routes
                        .iter()
                        .map(|route| format!("{} ({:.2} h)", route.iata, route.weight))
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(f, ": flights to {flights}.")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_format() {
        let mut g = RouteGraph::new(1, GraphKind::Undirected).unwrap();
        g.add_airport(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6).unwrap();
        let report = GraphReport::from_graph(&mut g).unwrap();
        assert_eq!(
            report.to_string(),
            "[0] Airport 100 (MEX) Benito Juarez, Mexico City, Mexico, UTC -6: no connections.\n"
        );
    }

    #[test]
    fn test_query_for_unknown_airport() {
        let mut g = RouteGraph::new(1, GraphKind::Directed).unwrap();
        g.add_airport(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6).unwrap();
        let report = GraphReport::from_graph(&mut g).unwrap();
        assert_eq!(report.render_query(5), Err(GraphError::KeyNotFound(5)));
        assert_eq!(report.render_query(100).unwrap(), "Flights from 100: none.");
    }
}
