use log::{debug, trace, warn};

use crate::algorithm::{Path, PathFinder, PathOrder, PathOutcome};
use crate::data_structures::{CircularQueue, DynamicArray};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Per-call bookkeeping for one slot
#[derive(Debug, Clone, Copy, Default)]
struct SlotState {
    visited: bool,
    /// Slot this one was first discovered from
    parent: Option<usize>,
}

/// Breadth-first search for a fewest-edges path
///
/// The search works on slot indices: the frontier is a queue of slots and the
/// visited/parent bookkeeping is an array indexed by slot, allocated fresh for
/// every call. Neighbours are expanded in ascending vertex order, so ties
/// between equally short paths always break the same way.
///
/// The path comes back destination first ([`PathOrder::Backward`]), the order
/// in which parent links are walked. Use [`Path::into_forward`] or
/// [`PathFinder::find_forward_path`] for source-first order.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    /// Creates a new breadth-first search instance
    pub fn new() -> Self {
        BreadthFirstSearch
    }

    /// Walks parent links back from `goal` to `start`
    fn reconstruct<V, G>(
        graph: &G,
        scratch: &DynamicArray<SlotState>,
        start: usize,
        goal: usize,
        bound: usize,
    ) -> Result<Path<V>>
    where
        V: Vertex,
        G: Graph<V>,
    {
        let mut vertices = DynamicArray::new();
        let mut current = goal;

        loop {
            let vertex = graph.vertex_at(current).ok_or(Error::InvalidSlot(current))?;
            vertices.push(vertex)?;
            if current == start {
                break;
            }
            if vertices.len() >= bound {
                warn!("parent chain from slot {} exceeds {} vertices", goal, bound);
                return Err(Error::PathBoundExceeded(bound));
            }
            current = scratch[current].parent.ok_or(Error::InvalidSlot(current))?;
        }

        Ok(Path::new(vertices, PathOrder::Backward))
    }
}

impl<V, G> PathFinder<V, G> for BreadthFirstSearch
where
    V: Vertex,
    G: Graph<V>,
{
    fn name(&self) -> &'static str {
        "BreadthFirstSearch"
    }

    fn find_path(&self, graph: &G, source: V, destination: V) -> Result<PathOutcome<V>> {
        let start = match graph.slot_of(&source) {
            Some(slot) => slot,
            None => return Ok(PathOutcome::NotPresent(source)),
        };
        let goal = match graph.slot_of(&destination) {
            Some(slot) => slot,
            None => return Ok(PathOutcome::NotPresent(destination)),
        };

        let slots = graph.slot_count();
        let mut scratch = DynamicArray::filled(slots, SlotState::default())?;
        let mut frontier = CircularQueue::new();
        let mut expanded = 0usize;

        scratch[start].visited = true;
        frontier.push(start)?;

        while let Some(current) = frontier.pop() {
            if current == goal {
                break;
            }
            expanded += 1;

            let destinations = match graph.edges_at(current) {
                Some(destinations) => destinations,
                None => continue,
            };
            for next in destinations {
                let slot = match graph.slot_of(next) {
                    Some(slot) => slot,
                    None => continue,
                };
                let state = &mut scratch[slot];
                if !state.visited {
                    state.visited = true;
                    state.parent = Some(current);
                    frontier.push(slot)?;
                    trace!("slot {} discovered from slot {}", slot, current);
                }
            }
        }

        debug!(
            "bfs {:?} -> {:?}: expanded {} of {} slots",
            source, destination, expanded, slots
        );

        if !scratch[goal].visited {
            return Ok(PathOutcome::NoPath);
        }

        let bound = source.max_path_len().min(slots);
        let path = Self::reconstruct(graph, &scratch, start, goal, bound)?;
        Ok(PathOutcome::Found(path))
    }
}
