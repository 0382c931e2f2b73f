use std::collections::BTreeMap;

use log::{trace, warn};

use crate::data_structures::{DynamicArray, SortedSet};
use crate::graph::traits::{Graph, MutableGraph, Vertex};
use crate::{Error, Result};

/// One position in the slot array: a source vertex and its out-edges
#[derive(Debug, Clone, PartialEq, Eq)]
struct AdjacencySlot<V> {
    source: V,
    destinations: SortedSet<V>,
}

/// A directed graph stored as an array of adjacency sets
///
/// Every vertex occupies exactly one slot; slot indices are dense, start at
/// zero and never change once assigned, so algorithms can track vertices by
/// slot index instead of by value. A `BTreeMap` from vertex to slot makes
/// lookups O(log n).
///
/// A graph built with [`AdjacencyGraph::with_slots`] refuses to grow past its
/// slot limit and reports [`Error::GraphFull`] instead.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V: Vertex> {
    /// Slot array, in order of first appearance
    slots: DynamicArray<AdjacencySlot<V>>,

    /// vertex -> slot index
    index: BTreeMap<V, usize>,

    /// Maximum number of slots, if bounded
    slot_limit: Option<usize>,
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        AdjacencyGraph {
            slots: DynamicArray::new(),
            index: BTreeMap::new(),
            slot_limit: None,
        }
    }
}

impl<V: Vertex> AdjacencyGraph<V> {
    /// Creates a new empty graph that grows as vertices are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph holding at most `num` distinct vertices
    pub fn with_slots(num: usize) -> Result<Self> {
        Ok(AdjacencyGraph {
            slots: DynamicArray::with_capacity(num)?,
            index: BTreeMap::new(),
            slot_limit: Some(num),
        })
    }

    /// Maximum number of slots, or `None` for a growable graph
    pub fn slot_limit(&self) -> Option<usize> {
        self.slot_limit
    }

    /// Returns a copy of the out-edges of `vertex`.
    ///
    /// `None` means the vertex is not in the graph; a vertex without
    /// out-edges yields an empty set.
    pub fn find_edges(&self, vertex: &V) -> Option<SortedSet<V>> {
        self.edges(vertex).cloned()
    }

    /// Borrows the out-edges of `vertex`
    pub fn edges(&self, vertex: &V) -> Option<&SortedSet<V>> {
        self.slot_of(vertex).and_then(|slot| self.edges_at(slot))
    }

    /// Iterates over the vertices in slot order
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.slots.iter().map(|slot| slot.source)
    }

    /// Fails with `GraphFull` unless `extra` more slots fit under the limit
    fn check_room(&self, extra: usize) -> Result<()> {
        if let Some(limit) = self.slot_limit {
            if self.slots.len() + extra > limit {
                warn!(
                    "graph full: {} of {} slots used, {} more requested",
                    self.slots.len(),
                    limit,
                    extra
                );
                return Err(Error::GraphFull { capacity: limit });
            }
        }
        Ok(())
    }

    /// Returns the slot of `vertex`, installing it in the next free slot first
    /// if needed. Callers check the slot limit beforehand.
    fn ensure_slot(&mut self, vertex: V) -> Result<usize> {
        if let Some(&slot) = self.index.get(&vertex) {
            return Ok(slot);
        }
        let slot = self.slots.len();
        self.slots.push(AdjacencySlot {
            source: vertex,
            destinations: SortedSet::new(),
        })?;
        self.index.insert(vertex, slot);
        trace!("vertex {:?} installed in slot {}", vertex, slot);
        Ok(slot)
    }
}

impl<V: Vertex> Graph<V> for AdjacencyGraph<V> {
    fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    fn edge_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.destinations.len()).sum()
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn vertex_at(&self, slot: usize) -> Option<V> {
        self.slots.get(slot).map(|slot| slot.source)
    }

    fn edges_at(&self, slot: usize) -> Option<&SortedSet<V>> {
        self.slots.get(slot).map(|slot| &slot.destinations)
    }
}

impl<V: Vertex> MutableGraph<V> for AdjacencyGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> Result<usize> {
        if let Some(slot) = self.slot_of(&vertex) {
            return Ok(slot);
        }
        self.check_room(1)?;
        self.ensure_slot(vertex)
    }

    fn add(&mut self, from: V, to: V) -> Result<()> {
        // Both endpoints get a slot so that sinks stay reachable
        let mut missing = usize::from(!self.has_vertex(&from));
        if to != from && !self.has_vertex(&to) {
            missing += 1;
        }
        self.check_room(missing)?;

        // Endpoints first, so a failed allocation never leaves an edge to an unslotted vertex
        let slot = self.ensure_slot(from)?;
        self.ensure_slot(to)?;
        self.slots[slot].destinations.insert(to)?;
        Ok(())
    }

    fn add_set(&mut self, from: V, destinations: &SortedSet<V>) -> Result<()> {
        let mut missing = usize::from(!self.has_vertex(&from));
        missing += destinations
            .iter()
            .filter(|&&to| to != from && !self.has_vertex(&to))
            .count();
        self.check_room(missing)?;

        let slot = self.ensure_slot(from)?;
        for &to in destinations {
            self.ensure_slot(to)?;
        }
        self.slots[slot].destinations = destinations.clone();
        Ok(())
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }
}
