//! Frame timing
//!
//! Display refresh rates vary, physics constants do not: each animation frame
//! feeds its timestamp here and gets back how many fixed ticks to run.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Fixed-step accumulator plus a rolling FPS estimate
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    last_time: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Register a frame at `time_ms` and return the number of ticks to simulate
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let dt = if self.last_time > 0.0 {
            ((time_ms - self.last_time) / 1000.0) as f32
        } else {
            SIM_DT
        };
        self.last_time = time_ms;

        // Tab switches produce huge deltas, clock skew can produce negative ones
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.track_fps(time_ms);
        substeps
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one we will overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 1);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(1040.0), 2);
        // 6.7ms left over + 5ms is still short of a tick
        assert_eq!(clock.advance(1045.0), 0);
        assert_eq!(clock.advance(1055.0), 1);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        let steps = clock.advance(10_000.0);
        assert!(steps <= MAX_SUBSTEPS);
        assert!(steps >= 5);
    }

    #[test]
    fn test_clock_going_backwards_runs_nothing() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.fps(), 0);
        for i in 0..120 {
            clock.advance(1000.0 + i as f64 * 20.0);
        }
        assert_eq!(clock.fps(), 50);
    }
}
