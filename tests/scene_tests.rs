use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_scatter::core::RngSource;
use sphere_scatter::scene::{FOCUS_SEGMENTS, POINT_SEGMENTS};
use sphere_scatter::{SceneConfig, SceneState};

fn seeded_scene(config: &SceneConfig, seed: u64) -> SceneState {
    SceneState::build(config, &mut RngSource(StdRng::seed_from_u64(seed)))
}

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn test_default_scene_has_400_points() {
        let config = SceneConfig::default();
        let scene = seeded_scene(&config, 1);

        assert_eq!(scene.points().len(), 400);
        assert_eq!(scene.samples().len(), 400);
        assert_eq!(scene.instances().len(), 401);
    }

    #[test]
    fn test_focus_sphere_at_origin() {
        let scene = seeded_scene(&SceneConfig::default(), 1);
        let focus = scene.focus();

        assert_eq!(focus.position, Vec3::ZERO);
        assert_eq!(focus.radius, 2.0);
    }

    #[test]
    fn test_markers_at_twice_the_sample() {
        let scene = seeded_scene(&SceneConfig::default(), 2);

        for (sample, point) in scene.samples().iter().zip(scene.points()) {
            let expected = sample.to_vec3() * 2.0;
            assert!((point.position - expected).length() < 1e-6);
            assert_eq!(point.radius, 0.1);
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let config = SceneConfig {
            point_count: 32,
            ..Default::default()
        };

        let a = seeded_scene(&config, 99);
        let b = seeded_scene(&config, 99);
        let c = seeded_scene(&config, 100);

        assert_eq!(a.samples(), b.samples());
        assert_ne!(a.samples(), c.samples());
    }

    #[test]
    fn test_model_matrix_follows_orientation() {
        let mut scene = seeded_scene(&SceneConfig::default(), 3);
        scene.set_orientation(Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI));

        let moved = scene.model_matrix().transform_point3(Vec3::X);
        assert!((moved - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_meshes_match_segments() {
        let focus = SceneState::focus_mesh();
        let point = SceneState::point_mesh();

        assert_eq!(
            focus.vertices.len() as u32,
            (FOCUS_SEGMENTS.0 + 1) * (FOCUS_SEGMENTS.1 + 1)
        );
        assert_eq!(
            point.vertices.len() as u32,
            (POINT_SEGMENTS.0 + 1) * (POINT_SEGMENTS.1 + 1)
        );
    }
}
