/// Frame scheduling primitive - fires one callback per display refresh
pub trait FrameScheduler {
    /// Ask the host for one more frame callback
    fn request_frame(&self);
}
