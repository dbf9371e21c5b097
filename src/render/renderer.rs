use crate::game::{Bounds, Food, Palette, Position, Snake};
use crate::hal::{Color, Display};

/// Translates snake and food state into display writes, one grid block at a time
///
/// Only `clear` touches the whole matrix; per-tick updates erase the old
/// tail and repaint the body and food.
#[derive(Debug, Clone)]
pub struct Renderer {
    block: u32,
    palette: Palette,
}

impl Renderer {
    pub fn new(block: u32, palette: Palette) -> Self {
        Self { block, palette }
    }

    /// Paint every occupied segment in the snake color
    pub fn draw_snake<D: Display + ?Sized>(&self, display: &mut D, snake: &Snake) {
        for &segment in snake.segments() {
            self.fill_block(display, segment, self.palette.snake);
        }
    }

    /// Paint the background over the current tail block.
    ///
    /// Must run before the snake advances: the move overwrites the tail slot.
    pub fn erase_tail<D: Display + ?Sized>(&self, display: &mut D, snake: &Snake) {
        self.fill_block(display, snake.tail(), self.palette.background);
    }

    pub fn draw_food<D: Display + ?Sized>(&self, display: &mut D, food: &Food) {
        self.fill_block(display, food.position(), self.palette.food);
    }

    /// Paint the background over the whole board
    pub fn clear<D: Display + ?Sized>(&self, display: &mut D, bounds: &Bounds) {
        for y in 0..bounds.height() {
            for x in 0..bounds.width() {
                display.set_pixel(x, y, self.palette.background);
            }
        }
    }

    fn fill_block<D: Display + ?Sized>(&self, display: &mut D, pos: Position, color: Color) {
        // Off-board blocks only occur for a dead head, which is never drawn
        let (Ok(x0), Ok(y0)) = (u32::try_from(pos.x), u32::try_from(pos.y)) else {
            return;
        };
        for py in 0..self.block {
            for px in 0..self.block {
                display.set_pixel(x0 + px, y0 + py, color);
            }
        }
    }
}
