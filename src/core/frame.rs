use std::time::Instant;

/// Frame metadata - carries frame number and timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub timestamp_ms: f64,
    pub delta_ms: f64,
}

impl FrameInfo {
    pub fn new(number: u64, timestamp_ms: f64, delta_ms: f64) -> Self {
        Self {
            number,
            timestamp_ms,
            delta_ms,
        }
    }

    pub fn delta_secs(&self) -> f32 {
        (self.delta_ms / 1000.0) as f32
    }
}

/// Monotonic frame timestamps measured from clock creation or the last reset.
/// Infinite iterator: `for frame in clock { ... }`
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    origin: Instant,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            origin: now,
            last_frame: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Restart timing from now; the next frame is number 0 with zero delta
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta_ms = now.duration_since(self.last_frame).as_secs_f64() * 1000.0;
        let timestamp_ms = now.duration_since(self.origin).as_secs_f64() * 1000.0;

        let info = FrameInfo::new(self.frame_number, timestamp_ms, delta_ms);

        self.frame_number += 1;
        self.last_frame = now;

        Some(info)
    }
}
