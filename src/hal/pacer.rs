use std::time::Duration;

/// Blocks the caller for a fixed duration between loop iterations
pub trait Pacer {
    fn wait(&mut self, duration: Duration);
}

/// Pacer backed by `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
