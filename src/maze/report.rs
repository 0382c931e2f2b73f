use serde::{Deserialize, Serialize};

use crate::algorithm::{PathOrder, PathOutcome};
use crate::graph::GridCell;
use crate::maze::Maze;

/// Machine-readable summary of one maze solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub algorithm: String,
    pub width: usize,
    pub height: usize,
    pub start: GridCell,
    pub end: GridCell,
    /// `found`, `not_present` or `no_path`
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<GridCell>,
    #[serde(default)]
    pub path: Vec<GridCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<PathOrder>,
}

impl SolveReport {
    pub fn new(algorithm: &str, maze: &Maze, outcome: &PathOutcome<GridCell>) -> Self {
        let mut report = SolveReport {
            algorithm: algorithm.to_string(),
            width: maze.width(),
            height: maze.height(),
            start: maze.start(),
            end: maze.end(),
            outcome: String::new(),
            missing: None,
            path: Vec::new(),
            edge_count: None,
            order: None,
        };

        match outcome {
            PathOutcome::Found(path) => {
                report.outcome = "found".to_string();
                report.path = path.vertices().to_vec();
                report.edge_count = Some(path.edge_count());
                report.order = Some(path.order());
            }
            PathOutcome::NotPresent(cell) => {
                report.outcome = "not_present".to_string();
                report.missing = Some(*cell);
            }
            PathOutcome::NoPath => {
                report.outcome = "no_path".to_string();
            }
        }

        report
    }
}
