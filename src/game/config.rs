use std::time::Duration;

use thiserror::Error;

use super::snake::INITIAL_LENGTH;
use super::state::{Bounds, GridError, Position};
use crate::hal::Color;

/// LED matrix width in pixels
pub const MATRIX_WIDTH: u32 = 40;
/// LED matrix height in pixels
pub const MATRIX_HEIGHT: u32 = 30;
/// Side of one grid block in pixels
pub const PIXEL_SIZE: u32 = 2;
/// Head position of a freshly initialized snake
pub const START: Position = Position::new(10, 10);

pub const SNAKE_COLOR: Color = Color(0xFF0000);
pub const FOOD_COLOR: Color = Color(0x00FF00);
pub const BACKGROUND_COLOR: Color = Color(0xFFFFFF);

/// Pacing wait after each running tick
pub const WAIT_DELAY: Duration = Duration::from_millis(25);
/// Wait per loop iteration while not running
pub const IDLE_DELAY: Duration = Duration::from_millis(100);
/// Extra wait after an explicit reset
pub const RESET_DELAY: Duration = Duration::from_millis(200);

/// Random samples tried before food placement gives up for a tick
pub const FOOD_RETRY_LIMIT: usize = 256;

/// Colors written into the display buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub snake: Color,
    pub food: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake: SNAKE_COLOR,
            food: FOOD_COLOR,
            background: BACKGROUND_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid board geometry: {0}")]
    Grid(#[from] GridError),
    #[error("start ({x}, {y}) is not a block-aligned cell inside the board")]
    BadStart { x: i32, y: i32 },
    #[error("initial body of {length} segments does not fit left of the start column")]
    BodyOffBoard { length: usize },
    #[error("display is {actual_width}x{actual_height}, board expects {width}x{height}")]
    DisplayMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Compiled-in game parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the LED matrix in pixels
    pub matrix_width: u32,
    /// Height of the LED matrix in pixels
    pub matrix_height: u32,
    /// Grid-to-pixel scale factor
    pub block_size: u32,
    /// Head position after (re)initialization
    pub start: Position,
    pub palette: Palette,
    pub tick_delay: Duration,
    pub idle_delay: Duration,
    pub reset_delay: Duration,
    pub food_retry_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            matrix_width: MATRIX_WIDTH,
            matrix_height: MATRIX_HEIGHT,
            block_size: PIXEL_SIZE,
            start: START,
            palette: Palette::default(),
            tick_delay: WAIT_DELAY,
            idle_delay: IDLE_DELAY,
            reset_delay: RESET_DELAY,
            food_retry_limit: FOOD_RETRY_LIMIT,
        }
    }
}

impl GameConfig {
    /// Board geometry described by this configuration
    pub fn bounds(&self) -> Result<Bounds, GridError> {
        Bounds::new(self.matrix_width, self.matrix_height, self.block_size)
    }

    /// Check that the board is well formed and the initial snake fits on it
    pub fn validate(&self) -> Result<Bounds, ConfigError> {
        let bounds = self.bounds()?;

        if !bounds.contains(self.start) || !bounds.is_aligned(self.start) {
            return Err(ConfigError::BadStart {
                x: self.start.x,
                y: self.start.y,
            });
        }

        let tail_x = self.start.x - ((INITIAL_LENGTH as i32 - 1) * self.block_size as i32);
        if tail_x < 0 {
            return Err(ConfigError::BodyOffBoard {
                length: INITIAL_LENGTH,
            });
        }

        Ok(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.block_size, 2);
        assert_eq!(config.start, Position::new(10, 10));
        assert_eq!(config.tick_delay, Duration::from_millis(25));
        assert_eq!(config.palette.background, Color(0xFFFFFF));

        let bounds = config.validate().unwrap();
        assert_eq!(bounds.columns(), 20);
        assert_eq!(bounds.rows(), 15);
    }

    #[test]
    fn test_unaligned_start_rejected() {
        let config = GameConfig {
            start: Position::new(11, 10),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadStart { x: 11, y: 10 })
        );
    }

    #[test]
    fn test_body_must_fit_left_of_start() {
        let config = GameConfig {
            start: Position::new(2, 10),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BodyOffBoard { length: 3 })
        );
    }

    #[test]
    fn test_grid_error_propagates() {
        let config = GameConfig {
            matrix_width: 35,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Grid(_))));
    }
}
