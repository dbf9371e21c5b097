//! Ports to the devices the game drives.
//!
//! The game loop only talks to these traits, so the memory-mapped peripherals
//! and the in-memory fakes used by the host simulator are interchangeable.

pub mod display;
pub mod input;
pub mod pacer;

pub use display::{Color, Display, FrameBuffer, LedMatrix};
pub use input::{
    Input, InputRegisters, InputSnapshot, LatchedInput, SWITCH_MASK, SWITCH_RESET, SWITCH_START,
    SwitchCommand,
};
pub use pacer::{Pacer, SleepPacer};
