use crate::algorithm::Path;
use crate::graph::GridCell;
use crate::maze::parser::{END, START, WALL};
use crate::maze::Maze;

pub const PATH: char = '*';
pub const BLANK: char = ' ';

/// Draws `maze` as text, marking the cells of `path` with `*`.
///
/// The start and end cells keep their `S`/`E` marks. Every row ends with a
/// newline.
pub fn render_maze(maze: &Maze, path: Option<&Path<GridCell>>) -> String {
    let mut canvas: Vec<Vec<char>> = (0..maze.height())
        .map(|row| {
            (0..maze.width())
                .map(|col| {
                    if maze.is_open(GridCell::new(row, col)) {
                        BLANK
                    } else {
                        WALL
                    }
                })
                .collect()
        })
        .collect();

    if let Some(path) = path {
        for cell in path.vertices() {
            if maze.is_open(*cell) {
                canvas[cell.row][cell.col] = PATH;
            }
        }
    }

    canvas[maze.start().row][maze.start().col] = START;
    canvas[maze.end().row][maze.end().col] = END;

    let mut out = String::with_capacity(maze.height() * (maze.width() + 1));
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}
