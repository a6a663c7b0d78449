/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Minimised windows report a zero side
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, `None` for an empty window
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for WindowDimensions {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect_ratio() {
        let dims = WindowDimensions::new(800, 600);
        let aspect = dims.aspect_ratio().unwrap();
        assert!((aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_dimensions() {
        for (width, height) in [(0, 600), (800, 0), (0, 0)] {
            let dims = WindowDimensions::new(width, height);
            assert!(dims.is_empty());
            assert_eq!(dims.aspect_ratio(), None);
        }
    }

    #[test]
    fn test_from_physical_size() {
        let dims: WindowDimensions = winit::dpi::PhysicalSize::new(640u32, 480u32).into();
        assert_eq!(dims, WindowDimensions::new(640, 480));
    }
}
