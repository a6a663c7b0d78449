use std::f32::consts::PI;

use crate::types::Vertex;

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// UV sphere centred at the origin.
///
/// Rings run from the +Y pole (row 0) to the -Y pole (row `height_segments`),
/// each with `width_segments + 1` vertices so the seam carries its own column.
/// The degenerate triangles at both poles are skipped.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);

    let vertices = (0..=height_segments)
        .flat_map(|iy| {
            let v = iy as f32 / height_segments as f32;
            let theta = v * PI;

            (0..=width_segments).map(move |ix| {
                let u = ix as f32 / width_segments as f32;
                let phi = u * 2.0 * PI;

                let normal = [-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin()];
                Vertex {
                    position: normal.map(|n| n * radius),
                    normal,
                }
            })
        })
        .collect();

    let row = width_segments + 1;
    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = sphere(2.0, 12, 12);

        assert_eq!(mesh.vertices.len(), 13 * 13);
        // Two triangles per quad, one per quad on the pole rows
        assert_eq!(mesh.triangle_count(), 12 * 12 * 2 - 2 * 12);
    }

    #[test]
    fn test_vertices_on_surface() {
        let mesh = sphere(2.0, 12, 12);

        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 2.0).abs() < 1e-5, "vertex off surface: {:?}", vertex);
        }
    }

    #[test]
    fn test_poles() {
        let mesh = sphere(1.0, 8, 6);

        let top = mesh.vertices[0].position;
        let bottom = mesh.vertices.last().unwrap().position;
        assert!((top[1] - 1.0).abs() < 1e-6);
        assert!((bottom[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = sphere(0.1, 32, 32);
        let count = mesh.vertices.len() as u32;

        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_minimum_segments() {
        let mesh = sphere(1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
        assert!(mesh.triangle_count() > 0);
    }
}
