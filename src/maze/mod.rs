//! Grid mazes: reading, generating, solving and drawing
//!
//! A [`Maze`] is a rectangle of open and wall cells with a start and an end.
//! [`Maze::to_graph`] turns it into an [`AdjacencyGraph`] whose vertices are
//! the open cells, each pointing at its open orthogonal neighbours.

pub mod generators;
pub mod parser;
pub mod render;
pub mod report;

use std::fs;
use std::path::Path as FilePath;
use std::str::FromStr;

use log::debug;

use crate::algorithm::{PathFinder, PathOutcome};
use crate::graph::{AdjacencyGraph, Graph, GridCell, MutableGraph};
use crate::{Error, Result};

pub use generators::{generate_maze, open_grid};
pub use parser::parse_maze;
pub use render::render_maze;
pub use report::SolveReport;

/// A rectangular maze of open and wall cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,

    /// Row-major; true for open cells
    open: Vec<bool>,

    start: GridCell,
    end: GridCell,
}

impl Maze {
    /// Builds a maze from a row-major open-cell map.
    ///
    /// `start` and `end` must be open cells inside the grid.
    pub fn from_cells(
        width: usize,
        height: usize,
        open: Vec<bool>,
        start: GridCell,
        end: GridCell,
    ) -> Result<Self> {
        let cells = width.checked_mul(height).ok_or_else(|| Error::MazeFormat {
            line: 1,
            reason: format!("a {}x{} maze has too many cells", width, height),
        })?;
        if open.len() != cells {
            return Err(Error::MazeFormat {
                line: 1,
                reason: format!(
                    "{} cells given for a {}x{} maze",
                    open.len(),
                    width,
                    height
                ),
            });
        }
        let maze = Maze {
            width,
            height,
            open,
            start,
            end,
        };
        for (name, cell) in [("start", start), ("end", end)] {
            if !maze.is_open(cell) {
                return Err(Error::MazeFormat {
                    line: cell.row + 1,
                    reason: format!("{} cell {} is not an open cell", name, cell),
                });
            }
        }
        Ok(maze)
    }

    /// Reads and parses a maze file
    pub fn load<P: AsRef<FilePath>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        parse_maze(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridCell {
        self.start
    }

    pub fn end(&self) -> GridCell {
        self.end
    }

    /// True if `cell` lies inside the grid and is not a wall
    pub fn is_open(&self, cell: GridCell) -> bool {
        cell.row < self.height && cell.col < self.width && self.open[cell.row * self.width + cell.col]
    }

    /// Open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let width = self.width;
        self.open
            .iter()
            .enumerate()
            .filter(|&(_, &open)| open)
            .map(move |(index, _)| GridCell::new(index / width, index % width))
    }

    /// Builds the directed graph of open cells.
    ///
    /// Every open cell gets an edge to each open orthogonal neighbour, so each
    /// corridor shows up as a pair of opposite edges. With a `slot_limit` the
    /// graph is bounded and a maze with more open cells fails with
    /// [`Error::GraphFull`].
    pub fn to_graph(&self, slot_limit: Option<usize>) -> Result<AdjacencyGraph<GridCell>> {
        let mut graph = match slot_limit {
            Some(num) => AdjacencyGraph::with_slots(num)?,
            None => AdjacencyGraph::new(),
        };

        for cell in self.open_cells() {
            let mut linked = false;
            for neighbour in cell.neighbours(self.height, self.width) {
                if self.is_open(neighbour) {
                    graph.add(cell, neighbour)?;
                    linked = true;
                }
            }
            if !linked {
                graph.add_vertex(cell)?;
            }
        }

        debug!(
            "maze {}x{} loaded as {} vertices, {} edges",
            self.width,
            self.height,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Solves the maze from start to end; a found path is listed start first
    pub fn solve<F>(&self, finder: &F) -> Result<PathOutcome<GridCell>>
    where
        F: PathFinder<GridCell, AdjacencyGraph<GridCell>>,
    {
        let graph = self.to_graph(None)?;
        finder.find_forward_path(&graph, self.start, self.end)
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_maze(text)
    }
}
