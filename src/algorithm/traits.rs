use serde::{Deserialize, Serialize};

use crate::data_structures::DynamicArray;
use crate::graph::{Graph, Vertex};
use crate::Result;

/// Which end of the path comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrder {
    /// Source first, destination last
    Forward,
    /// Destination first, source last; the order reconstruction produces
    Backward,
}

impl PathOrder {
    pub fn flipped(self) -> Self {
        match self {
            PathOrder::Forward => PathOrder::Backward,
            PathOrder::Backward => PathOrder::Forward,
        }
    }
}

/// A sequence of vertices joined by edges, together with its direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<V> {
    vertices: DynamicArray<V>,
    order: PathOrder,
}

impl<V: Vertex> Path<V> {
    /// Wraps `vertices`, which must be non-empty and listed in `order`
    pub(crate) fn new(vertices: DynamicArray<V>, order: PathOrder) -> Self {
        Path { vertices, order }
    }

    pub fn order(&self) -> PathOrder {
        self.order
    }

    /// Vertices in the current order
    pub fn vertices(&self) -> &[V] {
        self.vertices.as_slice()
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<V> {
        match self.order {
            PathOrder::Forward => self.vertices.first().copied(),
            PathOrder::Backward => self.vertices.last().copied(),
        }
    }

    pub fn destination(&self) -> Option<V> {
        match self.order {
            PathOrder::Forward => self.vertices.last().copied(),
            PathOrder::Backward => self.vertices.first().copied(),
        }
    }

    /// Flips the path in place
    pub fn reverse(&mut self) {
        self.vertices.reverse();
        self.order = self.order.flipped();
    }

    /// Returns the path listed source first
    pub fn into_forward(self) -> Self {
        self.into_order(PathOrder::Forward)
    }

    /// Returns the path listed destination first
    pub fn into_backward(self) -> Self {
        self.into_order(PathOrder::Backward)
    }

    pub fn into_order(mut self, order: PathOrder) -> Self {
        if self.order != order {
            self.reverse();
        }
        self
    }

    pub fn into_vertices(self) -> DynamicArray<V> {
        self.vertices
    }

    /// Checks that each consecutive pair, in travel direction, is an edge of `graph`
    pub fn follows_edges<G: Graph<V>>(&self, graph: &G) -> bool {
        let forward: Vec<V> = match self.order {
            PathOrder::Forward => self.vertices.iter().copied().collect(),
            PathOrder::Backward => self.vertices.iter().rev().copied().collect(),
        };
        forward.windows(2).all(|pair| graph.is_edge(&pair[0], &pair[1]))
    }
}

/// What a path search found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<V> {
    /// A fewest-edges path between the endpoints
    Found(Path<V>),
    /// The named endpoint is not a vertex of the graph
    NotPresent(V),
    /// Both endpoints exist but the destination cannot be reached
    NoPath,
}

impl<V: Vertex> PathOutcome<V> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The path, if one was found
    pub fn path(&self) -> Option<&Path<V>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<V>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Trait for single-source, single-target path finders
pub trait PathFinder<V, G>
where
    V: Vertex,
    G: Graph<V>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find a path from `source` to `destination`.
    ///
    /// Missing endpoints and unreachable destinations are reported through
    /// [`PathOutcome`]; `Err` is reserved for allocation failures and a
    /// corrupted parent chain.
    fn find_path(&self, graph: &G, source: V, destination: V) -> Result<PathOutcome<V>>;

    /// Like [`PathFinder::find_path`], with any found path listed source first
    fn find_forward_path(&self, graph: &G, source: V, destination: V) -> Result<PathOutcome<V>> {
        Ok(match self.find_path(graph, source, destination)? {
            PathOutcome::Found(path) => PathOutcome::Found(path.into_forward()),
            other => other,
        })
    }
}
