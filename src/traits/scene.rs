use glam::Quat;

/// Rendering collaborator driven by the rotation animator
pub trait SceneTarget {
    type Error;

    /// Replace the scene's orientation with an absolute rotation
    fn set_orientation(&mut self, orientation: Quat);

    /// Render the current scene state
    fn render(&mut self) -> Result<(), Self::Error>;
}
