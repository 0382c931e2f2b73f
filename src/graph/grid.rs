use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::traits::Vertex;

/// A cell of a rectangular maze, addressed by row then column
///
/// Cells order row-major, so adjacency sets list neighbours top to bottom,
/// left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    /// Largest supported maze side length
    pub const MAX_SIDE: usize = 4096;

    pub fn new(row: usize, col: usize) -> Self {
        GridCell { row, col }
    }

    /// The up to four orthogonal neighbours inside a `height` x `width` grid
    pub fn neighbours(&self, height: usize, width: usize) -> impl Iterator<Item = GridCell> {
        let GridCell { row, col } = *self;
        let up = row.checked_sub(1).map(|r| GridCell::new(r, col));
        let left = col.checked_sub(1).map(|c| GridCell::new(row, c));
        let right = (col + 1 < width).then(|| GridCell::new(row, col + 1));
        let down = (row + 1 < height).then(|| GridCell::new(row + 1, col));
        [up, left, right, down].into_iter().flatten()
    }
}

impl Vertex for GridCell {
    fn max_path_len(&self) -> usize {
        Self::MAX_SIDE * Self::MAX_SIDE
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for GridCell {
    fn from((row, col): (usize, usize)) -> Self {
        GridCell::new(row, col)
    }
}
