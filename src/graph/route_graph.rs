//! A fixed-capacity route graph over airport vertices.
//!
//! Vertices occupy slots `[0, len)` in insertion order and never move.
//! Edges are requested by airport id; the graph resolves ids to slots by
//! linear search (first match wins) and stores only slot indices in the
//! neighbor lists.

use super::neighbor_list::Entry;
use super::options::{GraphKind, GraphOptions};
use super::vertex::{Airport, Vertex};
use crate::error::{GraphError, Result};
use crate::trace::{debug_event, trace_event};

/// An adjacency-list graph with a capacity fixed at construction.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) | Writes the next free slot |
/// | `find_index_by_key` | \(O(n)\) | Linear scan over occupied slots |
/// | `add_edge` | \(O(n + d)\) | Two key lookups plus a duplicate check |
/// | `is_neighbor_of` | \(O(n + d)\) | Two key lookups plus a neighbor walk |
/// | `get_vertex` | \(O(1)\) | Bounds-checked slot access |
#[derive(Debug, Clone)]
pub struct RouteGraph {
    vertices: Vec<Vertex>,
    capacity: usize,
    kind: GraphKind,
}

impl RouteGraph {
    /// Creates an empty graph that can hold `capacity` vertices.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize, kind: GraphKind) -> Result<Self> {
        Self::with_options(GraphOptions::new(capacity, kind))
    }

    /// Creates an empty graph from `options`.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `options.capacity` is zero.
    pub fn with_options(options: GraphOptions) -> Result<Self> {
        if options.capacity == 0 {
            return Err(GraphError::InvalidArgument(
                "graph capacity must be greater than zero",
            ));
        }

        debug_event!(capacity = options.capacity, kind = ?options.kind, "graph created");
        Ok(Self {
            vertices: Vec::with_capacity(options.capacity),
            capacity: options.capacity,
            kind: options.kind,
        })
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Maximum number of vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Edge-symmetry mode.
    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Total number of stored adjacency entries.
    ///
    /// An undirected edge contributes two entries (one self-loop contributes one).
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    /// Writes `airport` into the next free slot and returns that slot.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if every slot is taken.
    pub fn add_vertex(&mut self, airport: Airport) -> Result<usize> {
        if self.vertices.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let slot = self.vertices.len();
        trace_event!(slot, id = airport.id, iata = %airport.iata_code, "vertex added");
        self.vertices.push(Vertex::new(airport));
        Ok(slot)
    }

    /// Builds an [`Airport`] from its fields and adds it.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] if every slot is taken.
    pub fn add_airport(
        &mut self,
        id: i32,
        iata: &str,
        country: &str,
        city: &str,
        name: &str,
        utc_offset: i32,
    ) -> Result<usize> {
        self.add_vertex(Airport::new(id, iata, country, city, name, utc_offset))
    }

    /// Slot of the first vertex whose id equals `key`.
    pub fn find_index_by_key(&self, key: i32) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex.id() == key)
    }

    /// Adds an unweighted edge (weight `0.0`). See [`add_weighted_edge`](Self::add_weighted_edge).
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn add_edge(&mut self, from_key: i32, to_key: i32) -> Result<bool> {
        self.add_weighted_edge(from_key, to_key, 0.0)
    }

    /// Adds an edge `from_key -> to_key` with `weight`.
    ///
    /// Returns `Ok(false)` if either id is unknown. An entry that already
    /// exists is left untouched, so repeating a call is harmless. Undirected
    /// graphs also store the mirror entry with the same weight.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn add_weighted_edge(&mut self, from_key: i32, to_key: i32, weight: f32) -> Result<bool> {
        if self.vertices.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let (Some(from_idx), Some(to_idx)) =
            (self.find_index_by_key(from_key), self.find_index_by_key(to_key))
        else {
            debug_event!(from = from_key, to = to_key, "edge endpoint not found");
            return Ok(false);
        };

        self.insert(from_idx, to_idx, weight);
        if !self.kind.is_directed() {
            self.insert(to_idx, from_idx, weight);
        }
        Ok(true)
    }

    fn insert(&mut self, from_idx: usize, to_idx: usize, weight: f32) {
        if self.vertices[from_idx].insert_neighbor(to_idx, weight) {
            trace_event!(from_idx, to_idx, weight, "neighbor inserted");
        } else {
            trace_event!(from_idx, to_idx, "duplicate neighbor skipped");
        }
    }

    /// Returns `true` if `dest_key` appears among the neighbors of `src_key`.
    ///
    /// Unknown ids and vertices without neighbors yield `false`.
    pub fn is_neighbor_of(&self, dest_key: i32, src_key: i32) -> bool {
        let (Some(src_idx), Some(dest_idx)) =
            (self.find_index_by_key(src_key), self.find_index_by_key(dest_key))
        else {
            return false;
        };
        let Some(mut walker) = self.vertices[src_idx].neighbor_walker() else {
            return false;
        };

        while let Some(entry) = walker.current() {
            if entry.neighbor_index == dest_idx {
                return true;
            }
            if walker.move_next().is_err() {
                break;
            }
        }
        false
    }

    /// The vertex in slot `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_vertex(&self, index: usize) -> Result<&Vertex> {
        let len = self.vertices.len();
        self.vertices
            .get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Mutable access to the vertex in slot `index`, for cursor traversal.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_vertex_mut(&mut self, index: usize) -> Result<&mut Vertex> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// The airport id stored in slot `index`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_data_by_index(&self, index: usize) -> Result<i32> {
        self.get_vertex(index).map(Vertex::id)
    }

    /// The first vertex whose id equals `key`.
    pub fn vertex_by_key(&self, key: i32) -> Option<&Vertex> {
        self.find_index_by_key(key).map(|idx| &self.vertices[idx])
    }

    /// Copies the neighbor entries of slot `index`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] unless `index < len()`.
    pub fn neighbors_of(&self, index: usize) -> Result<Vec<Entry>> {
        let vertex = self.get_vertex(index)?;
        let mut entries = Vec::with_capacity(vertex.degree());
        if let Some(mut walker) = vertex.neighbor_walker() {
            while !walker.is_end() {
                entries.push(*walker.get()?);
                walker.move_next()?;
            }
        }
        Ok(entries)
    }

    /// Occupied vertices in slot order.
    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Consumes the graph, releasing every vertex and neighbor list.
    pub fn delete(self) {
        debug_event!(vertices = self.vertices.len(), "graph deleted");
        drop(self);
    }
}

impl<'a> IntoIterator for &'a RouteGraph {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices()
    }
}
