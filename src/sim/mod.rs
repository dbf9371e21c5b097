//! Host simulator: runs the game core against an in-memory LED matrix,
//! drawn in the terminal, with the keyboard standing in for the switch and
//! d-pad registers.

pub mod keys;
pub mod runner;
pub mod stats;
pub mod view;

pub use keys::{KeyAction, KeyMap};
pub use runner::Simulator;
pub use stats::{RoundEnd, SessionStats};
pub use view::TerminalView;
