pub mod adjacency;
pub mod grid;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use grid::GridCell;
pub use traits::{Graph, MutableGraph, Vertex};
