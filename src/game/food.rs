use rand::Rng;

use super::snake::Snake;
use super::state::{Bounds, Position};

/// A single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Sample random grid-aligned cells until one is clear of the snake.
    ///
    /// Gives up after `max_attempts` samples, and immediately when the snake
    /// already covers every cell, so a saturated board cannot hang the loop.
    /// Coverage counts distinct cells: a freshly grown tail shares its cell.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        snake: &Snake,
        bounds: &Bounds,
        max_attempts: usize,
    ) -> Option<Food> {
        if occupied_cells(snake) >= bounds.cell_count() {
            return None;
        }

        for _ in 0..max_attempts {
            let column = rng.gen_range(0..bounds.columns());
            let row = rng.gen_range(0..bounds.rows());
            let pos = bounds.cell(column, row);

            if !snake.contains(pos) {
                return Some(Food::new(pos));
            }
        }

        None
    }
}

/// Number of distinct cells under the snake
fn occupied_cells(snake: &Snake) -> usize {
    let segments = snake.segments();
    segments
        .iter()
        .enumerate()
        .filter(|&(i, pos)| !segments[..i].contains(pos))
        .count()
}
