//! Maze Graph - slot-based adjacency graphs and breadth-first path finding
//!
//! This library stores a directed, unweighted graph as an array of adjacency
//! slots, each holding one source vertex and the sorted set of vertices it
//! points to. Path finding runs a breadth-first search over slot indices and
//! walks parent links back to produce a single fewest-edges path.
//!
//! The containers the graph is built on (a growable array, a sorted set and
//! a ring-buffer queue) live in [`data_structures`]. The [`maze`] module
//! reads, generates and draws grid mazes on top of the graph.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod maze;

pub use algorithm::{BreadthFirstSearch, Path, PathFinder, PathOrder, PathOutcome};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, GridCell};
pub use maze::Maze;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to allocate a buffer for {requested} elements")]
    Allocation { requested: usize },

    #[error("Attempted to access an element in an empty {0}")]
    EmptyAccess(&'static str),

    #[error("Graph is full: all {capacity} slots are occupied")]
    GraphFull { capacity: usize },

    #[error("Invalid slot index: {0}")]
    InvalidSlot(usize),

    #[error("Index {0} is out of range")]
    IndexOutOfRange(usize),

    #[error("Path reconstruction exceeded {0} vertices")]
    PathBoundExceeded(usize),

    #[error("Malformed maze at line {line}: {reason}")]
    MazeFormat { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
