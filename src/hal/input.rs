use crate::game::Direction;

/// Bits of the switch register that carry commands
pub const SWITCH_MASK: u32 = 0x03;
/// Switch value requesting a new round
pub const SWITCH_START: u32 = 0x01;
/// Switch value requesting a full reset
pub const SWITCH_RESET: u32 = 0x02;

/// Command encoded by the two switch bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    Start,
    Reset,
}

/// All input registers, read once at the start of a loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub switches: u32,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    /// The two command bits of the switch register
    pub fn switch_bits(&self) -> u32 {
        self.switches & SWITCH_MASK
    }

    /// Both bits set is neither command
    pub fn command(&self) -> Option<SwitchCommand> {
        match self.switch_bits() {
            SWITCH_START => Some(SwitchCommand::Start),
            SWITCH_RESET => Some(SwitchCommand::Reset),
            _ => None,
        }
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// First pressed pad, polled up/down/left/right, that is not a reversal of `current`
    pub fn steer(&self, current: Direction) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.is_pressed(dir) && !current.is_opposite(dir))
    }
}

/// Source of input snapshots
pub trait Input {
    fn sample(&mut self) -> InputSnapshot;
}

/// Software input device
///
/// Switches latch until changed. D-pad presses are momentary: they are
/// reported by the next `sample` and then released.
#[derive(Debug, Clone, Default)]
pub struct LatchedInput {
    switches: u32,
    pad: InputSnapshot,
}

impl LatchedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switches(&self) -> u32 {
        self.switches
    }

    pub fn set_switches(&mut self, value: u32) {
        self.switches = value;
    }

    /// Flip the switch bits in `mask`
    pub fn toggle_switch(&mut self, mask: u32) {
        self.switches ^= mask;
    }

    /// Hold a d-pad direction until the next sample
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pad.up = true,
            Direction::Down => self.pad.down = true,
            Direction::Left => self.pad.left = true,
            Direction::Right => self.pad.right = true,
        }
    }
}

impl Input for LatchedInput {
    fn sample(&mut self) -> InputSnapshot {
        let pad = std::mem::take(&mut self.pad);
        InputSnapshot {
            switches: self.switches,
            ..pad
        }
    }
}

/// Memory-mapped switch and d-pad registers
#[derive(Debug)]
pub struct InputRegisters {
    switches: *const u32,
    up: *const u32,
    down: *const u32,
    left: *const u32,
    right: *const u32,
}

impl InputRegisters {
    /// Wrap the register addresses. Returns None if any of them is null.
    ///
    /// # Safety
    ///
    /// Every pointer must address a readable, aligned `u32` register that stays
    /// mapped for the lifetime of the returned value.
    pub unsafe fn from_raw(
        switches: *const u32,
        up: *const u32,
        down: *const u32,
        left: *const u32,
        right: *const u32,
    ) -> Option<Self> {
        if [switches, up, down, left, right].iter().any(|p| p.is_null()) {
            return None;
        }
        Some(Self {
            switches,
            up,
            down,
            left,
            right,
        })
    }
}

impl Input for InputRegisters {
    fn sample(&mut self) -> InputSnapshot {
        // SAFETY: all pointers were checked non-null and vouched for in `from_raw`.
        unsafe {
            InputSnapshot {
                switches: self.switches.read_volatile(),
                up: self.up.read_volatile() != 0,
                down: self.down.read_volatile() != 0,
                left: self.left.read_volatile() != 0,
                right: self.right.read_volatile() != 0,
            }
        }
    }
}
