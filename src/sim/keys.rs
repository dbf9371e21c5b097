use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;
use crate::hal::{SWITCH_RESET, SWITCH_START};

/// What a key press does to the simulated board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a d-pad button until the next input sample
    Pad(Direction),
    /// Flip the switch bits in the mask
    ToggleSwitch(u32),
    Quit,
    None,
}

/// Maps terminal keys onto the simulated switch and d-pad registers
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // D-pad - Arrow keys
            KeyCode::Up => KeyAction::Pad(Direction::Up),
            KeyCode::Down => KeyAction::Pad(Direction::Down),
            KeyCode::Left => KeyAction::Pad(Direction::Left),
            KeyCode::Right => KeyAction::Pad(Direction::Right),

            // D-pad - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Pad(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Pad(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Pad(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Pad(Direction::Right),

            // Switches
            KeyCode::Char('1') | KeyCode::Char(' ') => KeyAction::ToggleSwitch(SWITCH_START),
            KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => {
                KeyAction::ToggleSwitch(SWITCH_RESET)
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
