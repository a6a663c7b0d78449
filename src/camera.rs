use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera looking at a fixed target
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera on the +Z axis at `distance`, facing the origin
    pub fn facing_origin(fov_degrees: f32, aspect: f32, distance: f32) -> Self {
        let mut camera = Self::new(fov_degrees, aspect, DEFAULT_NEAR, DEFAULT_FAR);
        camera.position = Vec3::new(0.0, 0.0, distance);
        camera.look_at(Vec3::ZERO);
        camera
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Change the aspect ratio and rebuild the projection
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Recompute the projection after editing fov, aspect or clip planes
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::facing_origin(DEFAULT_FOV_DEGREES, 1.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = PerspectiveCamera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = PerspectiveCamera::facing_origin(75.0, 16.0 / 9.0, 5.0);
        let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_set_aspect_updates_projection() {
        let mut camera = PerspectiveCamera::facing_origin(75.0, 1.0, 5.0);
        let before = camera.projection();

        camera.set_aspect(2.0);
        let after = camera.projection();

        assert_ne!(before, after);
        // Horizontal scale halves when the view doubles in width
        assert!((after.x_axis.x * 2.0 - before.x_axis.x).abs() < 1e-6);
        assert_eq!(after.y_axis.y, before.y_axis.y);
    }

    #[test]
    fn test_point_behind_camera_is_clipped() {
        let camera = PerspectiveCamera::default();
        let clip = camera.view_projection() * Vec3::new(0.0, 0.0, 10.0).extend(1.0);
        assert!(clip.w < 0.0);
    }
}
