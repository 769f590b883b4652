use std::thread;
use std::time::{Duration, Instant};

/// Holds the loop to a fixed tick rate by sleeping off whatever is left of
/// each tick's time slice.
#[derive(Debug)]
pub struct FramePacer {
    tick: Duration,
    last: Instant,
}

impl FramePacer {
    /// Pacer for `ticks_per_second` (clamped to at least 1).
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick: Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Length of one tick.
    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Time left in the current tick.
    pub fn remaining(&self) -> Duration {
        self.tick.saturating_sub(self.last.elapsed())
    }

    /// Sleep out the rest of the tick and start the next one.
    pub fn wait(&mut self) {
        let left = self.remaining();
        if !left.is_zero() {
            thread::sleep(left);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_ticks_per_second() {
        let pacer = FramePacer::new(60);
        let micros = pacer.tick_duration().as_micros();
        assert!((16_666..=16_667).contains(&micros));
    }

    #[test]
    fn zero_rate_is_clamped() {
        assert_eq!(FramePacer::new(0).tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn wait_fills_the_tick() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(4));
        assert!(pacer.remaining() <= pacer.tick_duration());
    }
}
