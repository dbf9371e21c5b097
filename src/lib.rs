//! Matrix Snake - Snake for a memory-mapped LED matrix
//!
//! This library provides:
//! - Core game logic and the loop state machine (game module)
//! - Block renderer writing into any pixel display (render module)
//! - Device ports with memory-mapped and in-memory implementations (hal module)
//! - A terminal host simulator (sim module)

pub mod game;
pub mod hal;
pub mod render;
pub mod sim;
