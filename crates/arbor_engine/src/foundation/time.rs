//! Time measurement utilities

use std::time::Instant;

/// Nanosecond stopwatch used to time a batch frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameClock {
    /// Create a clock measuring from now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Restart the measurement from now.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Nanoseconds elapsed since the clock was started or restarted.
    ///
    /// Saturates at `u64::MAX`, which takes centuries to reach.
    pub fn elapsed_ns(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.elapsed_ns();
        let b = clock.elapsed_ns();
        assert!(b >= a);
    }

    #[test]
    fn restart_resets_measurement() {
        let mut clock = FrameClock::start();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let before = clock.elapsed_ns();
        clock.restart();
        assert!(clock.elapsed_ns() < before);
    }
}
