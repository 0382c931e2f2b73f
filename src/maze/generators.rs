use rand::prelude::*;

use crate::graph::GridCell;
use crate::maze::Maze;
use crate::{Error, Result};

/// Carves a random perfect maze with `rooms_high` x `rooms_wide` rooms
///
/// Rooms sit on odd coordinates of a `(2 * rooms_high + 1)` x
/// `(2 * rooms_wide + 1)` grid, separated by walls. A randomised depth-first
/// backtracker knocks down walls between rooms, so every pair of rooms is
/// joined by exactly one corridor. The start is the top-left room and the end
/// the bottom-right room.
pub fn generate_maze<R: Rng + ?Sized>(rooms_high: usize, rooms_wide: usize, rng: &mut R) -> Result<Maze> {
    if rooms_high == 0 || rooms_wide == 0 {
        return Err(Error::Config("a maze needs at least one room".to_string()));
    }
    let height = 2 * rooms_high + 1;
    let width = 2 * rooms_wide + 1;
    if height > GridCell::MAX_SIDE || width > GridCell::MAX_SIDE {
        return Err(Error::Config(format!(
            "{}x{} rooms exceed the maximum side of {}",
            rooms_wide,
            rooms_high,
            GridCell::MAX_SIDE
        )));
    }

    let mut open = vec![false; width * height];
    let mut seen = vec![false; rooms_high * rooms_wide];
    let room_cell = |r: usize, c: usize| (2 * r + 1) * width + (2 * c + 1);

    let mut stack = vec![(0usize, 0usize)];
    seen[0] = true;
    open[room_cell(0, 0)] = true;

    while let Some(&(r, c)) = stack.last() {
        let mut next: Vec<(usize, usize)> = Vec::with_capacity(4);
        if r > 0 && !seen[(r - 1) * rooms_wide + c] {
            next.push((r - 1, c));
        }
        if r + 1 < rooms_high && !seen[(r + 1) * rooms_wide + c] {
            next.push((r + 1, c));
        }
        if c > 0 && !seen[r * rooms_wide + c - 1] {
            next.push((r, c - 1));
        }
        if c + 1 < rooms_wide && !seen[r * rooms_wide + c + 1] {
            next.push((r, c + 1));
        }

        match next.choose(rng) {
            Some(&(nr, nc)) => {
                // Knock down the wall between the two rooms
                let wall = (r + nr + 1) * width + (c + nc + 1);
                open[wall] = true;
                open[room_cell(nr, nc)] = true;
                seen[nr * rooms_wide + nc] = true;
                stack.push((nr, nc));
            }
            None => {
                stack.pop();
            }
        }
    }

    let start = GridCell::new(1, 1);
    let end = GridCell::new(height - 2, width - 2);
    Maze::from_cells(width, height, open, start, end)
}

/// Generates a `height` x `width` maze without any interior walls
pub fn open_grid(height: usize, width: usize) -> Result<Maze> {
    if height == 0 || width == 0 {
        return Err(Error::Config("a maze needs at least one cell".to_string()));
    }
    let open = vec![true; width * height];
    let start = GridCell::new(0, 0);
    let end = GridCell::new(height - 1, width - 1);
    Maze::from_cells(width, height, open, start, end)
}
