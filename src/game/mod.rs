//! Core game logic for the LED matrix snake
//!
//! Everything here is device independent: the engine reaches the display and
//! the input registers only through the ports in [`crate::hal`].

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, GameConfig, Palette};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::Food;
pub use snake::{INITIAL_LENGTH, SNAKE_CAPACITY, Snake};
pub use state::{Bounds, Collision, GameState, GridError, Position};
