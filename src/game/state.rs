use thiserror::Error;

use super::action::Direction;

/// A grid-aligned pixel coordinate on the LED matrix
///
/// Signed so that a head stepping off the left or top edge is representable
/// and can be reported as a wall collision rather than wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `step` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

/// Errors describing an unusable board geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("block size must be at least one pixel")]
    ZeroBlock,
    #[error("{width}x{height} matrix is not a whole number of {block}px blocks")]
    Unaligned { width: u32, height: u32, block: u32 },
    #[error("matrix has no cells")]
    Empty,
}

/// Pixel extent of the board and the size of one grid block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: u32,
    height: u32,
    block: u32,
}

impl Bounds {
    /// Both dimensions must be a multiple of `block`, so every grid-aligned
    /// cell lies wholly inside the pixel buffer.
    pub fn new(width: u32, height: u32, block: u32) -> Result<Self, GridError> {
        if block == 0 {
            return Err(GridError::ZeroBlock);
        }
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if width % block != 0 || height % block != 0 {
            return Err(GridError::Unaligned {
                width,
                height,
                block,
            });
        }
        Ok(Self {
            width,
            height,
            block,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side length of one grid block in pixels
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Number of grid columns
    pub fn columns(&self) -> u32 {
        self.width / self.block
    }

    /// Number of grid rows
    pub fn rows(&self) -> u32 {
        self.height / self.block
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Pixel position of the top-left corner of a grid cell
    pub fn cell(&self, column: u32, row: u32) -> Position {
        Position::new((column * self.block) as i32, (row * self.block) as i32)
    }

    /// Check if a position is within [0, width) x [0, height)
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Check if a position sits on a block boundary
    pub fn is_aligned(&self, pos: Position) -> bool {
        let block = self.block as i32;
        pos.x.rem_euclid(block) == 0 && pos.y.rem_euclid(block) == 0
    }
}

/// Top-level mode of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    GameOver,
    Running,
    /// Declared for future use; nothing in the loop enters it yet
    Paused,
}

/// Type of fatal collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the matrix
    Wall,
    /// Head landed on its own body
    SelfCollision,
}
