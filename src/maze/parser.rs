use crate::graph::GridCell;
use crate::maze::Maze;
use crate::{Error, Result};

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'S';
pub const END: char = 'E';

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MazeFormat {
        line,
        reason: reason.into(),
    }
}

/// Parses the text form of a maze.
///
/// One line per row: `#` is a wall, `.` or a space is an open cell, `S` and
/// `E` mark the start and end cells. All rows must have the same width.
/// Without an `S` the first open cell (row-major) is the start; without an
/// `E` the last open cell is the end.
pub fn parse_maze(text: &str) -> Result<Maze> {
    let mut rows: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    while rows.last().map_or(false, |row| row.is_empty()) {
        rows.pop();
    }

    if rows.is_empty() {
        return Err(malformed(1, "maze is empty"));
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    if width == 0 {
        return Err(malformed(1, "first row is empty"));
    }
    if width > GridCell::MAX_SIDE || height > GridCell::MAX_SIDE {
        return Err(malformed(
            1,
            format!(
                "{}x{} exceeds the maximum side of {}",
                width,
                height,
                GridCell::MAX_SIDE
            ),
        ));
    }

    let mut open = Vec::with_capacity(width * height);
    let mut start = None;
    let mut end = None;

    for (row, row_text) in rows.iter().enumerate() {
        let line = row + 1;
        let cells = row_text.chars().count();
        if cells != width {
            return Err(malformed(
                line,
                format!("expected {} cells, found {}", width, cells),
            ));
        }

        for (col, symbol) in row_text.chars().enumerate() {
            let cell = GridCell::new(row, col);
            match symbol {
                WALL => open.push(false),
                OPEN | ' ' => open.push(true),
                START => {
                    if start.replace(cell).is_some() {
                        return Err(malformed(line, "more than one start cell"));
                    }
                    open.push(true);
                }
                END => {
                    if end.replace(cell).is_some() {
                        return Err(malformed(line, "more than one end cell"));
                    }
                    open.push(true);
                }
                other => {
                    return Err(malformed(
                        line,
                        format!("unexpected character {:?} in column {}", other, col + 1),
                    ))
                }
            }
        }
    }

    let cell_at = |index: usize| GridCell::new(index / width, index % width);
    let start = match start.or_else(|| open.iter().position(|&o| o).map(cell_at)) {
        Some(cell) => cell,
        None => return Err(malformed(1, "maze has no open cells")),
    };
    let end = match end.or_else(|| open.iter().rposition(|&o| o).map(cell_at)) {
        Some(cell) => cell,
        None => return Err(malformed(1, "maze has no open cells")),
    };

    Maze::from_cells(width, height, open, start, end)
}
