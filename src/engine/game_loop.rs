//! Frame hold timing for sprite playback
//!
//! Sprites store a hold per frame but never wait on it. The ticker measures
//! wall time between render ticks and tells the caller when the frame on
//! screen has been held long enough to ask the sprite for the next one.

use std::time::{Duration, Instant};

/// Maximum leftover time carried into the next hold
///
/// Keeps a long stall (window drag, breakpoint) from skipping a burst of
/// frames afterwards.
const MAX_CARRY: Duration = Duration::from_millis(250);

/// Render tick timing state
#[derive(Debug)]
pub struct FrameTicker {
    /// Time accumulated toward the current frame's hold
    accumulator: Duration,

    /// Time of last tick
    last_tick: Instant,

    /// Whether playback is paused
    paused: bool,

    /// Number of ticks measured
    tick_count: u64,

    /// Number of times a hold elapsed
    advance_count: u64,
}

impl FrameTicker {
    /// Create a new ticker starting now
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_tick: Instant::now(),
            paused: false,
            tick_count: 0,
            advance_count: 0,
        }
    }

    /// Measure the time since the previous tick
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.tick_count += 1;
        elapsed
    }

    /// Add `elapsed` toward a frame held for `hold_ms` milliseconds
    ///
    /// Returns true once the hold has elapsed; the surplus carries over to
    /// the next frame. Always false while paused.
    pub fn advance(&mut self, elapsed: Duration, hold_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        self.accumulator += elapsed;
        let hold = Duration::from_millis(hold_ms as u64);
        if self.accumulator < hold {
            return false;
        }

        self.accumulator = (self.accumulator - hold).min(MAX_CARRY);
        self.advance_count += 1;
        true
    }

    /// Drop any accumulated time, e.g. after switching animations
    pub fn restart_hold(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    /// Get number of ticks measured
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Get number of holds that elapsed
    pub fn advance_count(&self) -> u64 {
        self.advance_count
    }

    /// Check if playback is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Playback paused");
        }
    }

    /// Resume playback
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a frame burst
            self.accumulator = Duration::ZERO;
            log::info!("Playback resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_ticker_creation() {
        let ticker = FrameTicker::new();
        assert_eq!(ticker.tick_count(), 0);
        assert_eq!(ticker.advance_count(), 0);
        assert!(!ticker.is_paused());
    }

    #[test]
    fn test_hold_accumulates() {
        let mut ticker = FrameTicker::new();

        assert!(!ticker.advance(ms(40), 83));
        assert!(!ticker.advance(ms(40), 83));
        assert!(ticker.advance(ms(40), 83));
        assert_eq!(ticker.advance_count(), 1);
    }

    #[test]
    fn test_surplus_carries_over() {
        let mut ticker = FrameTicker::new();

        // 120 ms against an 83 ms hold leaves 37 ms toward the next frame
        assert!(ticker.advance(ms(120), 83));
        assert!(!ticker.advance(ms(40), 83));
        assert!(ticker.advance(ms(10), 83));
    }

    #[test]
    fn test_carry_is_capped() {
        let mut ticker = FrameTicker::new();

        assert!(ticker.advance(ms(5_000), 10));
        // Only MAX_CARRY survives the stall
        let mut extra = 0;
        while ticker.advance(Duration::ZERO, 10) {
            extra += 1;
        }
        assert_eq!(extra, 25);
    }

    #[test]
    fn test_zero_hold_always_advances() {
        let mut ticker = FrameTicker::new();
        assert!(ticker.advance(Duration::ZERO, 0));
    }

    #[test]
    fn test_restart_hold() {
        let mut ticker = FrameTicker::new();
        assert!(!ticker.advance(ms(80), 83));

        ticker.restart_hold();
        assert!(!ticker.advance(ms(10), 83));
    }

    #[test]
    fn test_pause_resume() {
        let mut ticker = FrameTicker::new();
        ticker.pause();
        assert!(ticker.is_paused());
        assert!(!ticker.advance(ms(500), 10));

        ticker.resume();
        assert!(!ticker.is_paused());
        assert!(ticker.advance(ms(10), 10));
    }

    #[test]
    fn test_toggle_pause() {
        let mut ticker = FrameTicker::new();

        ticker.toggle_pause();
        assert!(ticker.is_paused());

        ticker.toggle_pause();
        assert!(!ticker.is_paused());
    }

    #[test]
    fn test_tick_measures_time() {
        let mut ticker = FrameTicker::new();
        thread::sleep(ms(10));

        let elapsed = ticker.tick();
        assert!(elapsed >= ms(10));
        assert_eq!(ticker.tick_count(), 1);
    }
}
