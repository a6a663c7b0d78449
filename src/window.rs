use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::WindowDimensions;
use crate::traits::FrameScheduler;

/// Wrapper around winit Window; redraw requests schedule animation frames
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.inner.inner_size().into()
    }
}

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}
