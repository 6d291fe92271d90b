//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Clamp a measured frame time so a stall never teleports entities
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    dt.clamp(0.0, max_dt)
}

/// Paces a loop to a target rate and reports the real time between frames
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    max_dt: f32,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32, max_dt: f32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            max_dt,
            last: Instant::now(),
        }
    }

    /// Target frame length
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep off the rest of the frame, then return the measured, clamped `dt`
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_dt(dt, self.max_dt)
    }
}
