use glam::{Mat4, Quat, Vec3};
use log::{info, warn};

use crate::config::SceneConfig;
use crate::core::{Point3, SpherePointSampler, UniformSource};
use crate::mesh::{self, MeshData};
use crate::types::{color_from_hex, InstanceData};

pub const FOCUS_COLOR: u32 = 0x00ff00;
pub const POINT_COLOR: u32 = 0x0000ff;
pub const FOCUS_SEGMENTS: (u32, u32) = (12, 12);
pub const POINT_SEGMENTS: (u32, u32) = (32, 32);

/// A flat-coloured sphere placed in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub position: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

impl SceneObject {
    pub fn to_instance(&self) -> InstanceData {
        InstanceData::new(self.position.to_array(), self.radius, self.color)
    }
}

/// The focus sphere plus its scatter markers, rotated as one
#[derive(Debug, Clone)]
pub struct SceneState {
    focus: SceneObject,
    samples: Vec<Point3>,
    points: Vec<SceneObject>,
    orientation: Quat,
}

impl SceneState {
    /// Sample `config.point_count` points and build the scene around them
    pub fn build<S: UniformSource + ?Sized>(config: &SceneConfig, source: &mut S) -> Self {
        let sampler = SpherePointSampler::new(config.sphere_radius);
        let samples = sampler.sample_many(source, config.point_count);

        let degenerate = samples.iter().filter(|p| !p.is_finite()).count();
        if degenerate > 0 {
            warn!("{} sampled points are not finite", degenerate);
        }

        let scene = Self::from_samples(config, samples);
        info!(
            "Scene created: sphere radius {}, {} points",
            config.sphere_radius,
            scene.points.len()
        );
        scene
    }

    /// Build the scene from already sampled points
    pub fn from_samples(config: &SceneConfig, samples: Vec<Point3>) -> Self {
        let focus = SceneObject {
            position: Vec3::ZERO,
            radius: config.sphere_radius as f32,
            color: color_from_hex(FOCUS_COLOR),
        };

        let point_color = color_from_hex(POINT_COLOR);
        let points = samples
            .iter()
            .map(|sample| SceneObject {
                position: sample.to_vec3() * config.placement_scale,
                radius: config.point_radius,
                color: point_color,
            })
            .collect();

        Self {
            focus,
            samples,
            points,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn focus(&self) -> &SceneObject {
        &self.focus
    }

    pub fn points(&self) -> &[SceneObject] {
        &self.points
    }

    /// Raw sampler output, in sampling order
    pub fn samples(&self) -> &[Point3] {
        &self.samples
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Replace the orientation; rotations never accumulate
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation)
    }

    /// Instance data with the focus sphere first, then the markers
    pub fn instances(&self) -> Vec<InstanceData> {
        std::iter::once(&self.focus)
            .chain(self.points.iter())
            .map(SceneObject::to_instance)
            .collect()
    }

    /// Unit sphere used for the focus object
    pub fn focus_mesh() -> MeshData {
        mesh::sphere(1.0, FOCUS_SEGMENTS.0, FOCUS_SEGMENTS.1)
    }

    /// Unit sphere used for each marker
    pub fn point_mesh() -> MeshData {
        mesh::sphere(1.0, POINT_SEGMENTS.0, POINT_SEGMENTS.1)
    }
}
