pub mod bfs;
pub mod traits;

pub use bfs::BreadthFirstSearch;
pub use traits::{Path, PathFinder, PathOrder, PathOutcome};
