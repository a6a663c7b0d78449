/// Frame-rate counter that settles on a new value once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub const DEFAULT_INTERVAL: f32 = 1.0;

    /// Create counter reporting every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the fresh rate when an interval completes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last settled rate
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_reports_once_per_interval() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..59 {
            assert!(counter.tick(0.01).is_none());
        }
        assert_eq!(counter.fps(), 0.0);

        // 60 frames over 1.09s
        let reported = counter.tick(0.5);
        assert!(reported.is_some());
        assert!((counter.fps() - 60.0 / 1.09).abs() < 0.05);
    }

    #[test]
    fn fps_resets_after_report() {
        let mut counter = FpsCounter::new(0.5);

        assert!(counter.tick(0.5).is_some());
        assert!(counter.tick(0.1).is_none());
        assert_eq!(counter.fps(), 2.0);
    }
}
