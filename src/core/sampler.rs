use glam::Vec3;
use rand::Rng;

/// A sampled position, relative to the sphere's local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Sum of absolute coordinate values
    pub fn l1_norm(&self) -> f64 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Euclidean distance from the origin
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Source of independent uniform draws consumed by the sampler
pub trait UniformSource {
    /// Value in [0, 1)
    fn uniform(&mut self) -> f64;

    /// -1 or +1 with equal probability; +1 iff a fresh draw is above one half
    fn sign(&mut self) -> f64 {
        if self.uniform() > 0.5 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Adapts any `rand` generator into a [`UniformSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Scatters points near the surface of a sphere centred at the origin.
///
/// Each coordinate is a signed uniform draw in (-1, 1). The vector is then
/// divided by the sum of the absolute coordinates (the L1 norm) rather than by
/// its Euclidean length, and scaled by the radius. This is almost certainly a
/// bug: the result lies on an octahedron inscribed in the sphere, so density
/// collects towards the six axis vertices instead of being uniform, and most
/// points sit inside the sphere surface. It is kept as-is so the scatter
/// matches the established look; [`Point3::length`] shows the deviation.
///
/// A draw of exactly zero on all three axes divides by zero and yields a
/// non-finite point. Nothing clamps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePointSampler {
    radius: f64,
}

impl SpherePointSampler {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw one point
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> Point3 {
        sample(self.radius, source)
    }

    /// Draw `count` points in order
    pub fn sample_many<S: UniformSource + ?Sized>(&self, source: &mut S, count: usize) -> Vec<Point3> {
        (0..count).map(|_| self.sample(source)).collect()
    }
}

/// Draw one point for a sphere of `radius`. See [`SpherePointSampler`].
pub fn sample<S: UniformSource + ?Sized>(radius: f64, source: &mut S) -> Point3 {
    // Uniform first, then its sign, per axis.
    let x = signed_uniform(source);
    let y = signed_uniform(source);
    let z = signed_uniform(source);

    let scale = 1.0 / (x.powi(2).sqrt() + y.powi(2).sqrt() + z.powi(2).sqrt());

    Point3::new(x * scale * radius, y * scale * radius, z * scale * radius)
}

fn signed_uniform<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let magnitude = source.uniform();
    magnitude * source.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Fixed {
        value: f64,
        sign: f64,
    }

    impl UniformSource for Fixed {
        fn uniform(&mut self) -> f64 {
            self.value
        }

        fn sign(&mut self) -> f64 {
            self.sign
        }
    }

    #[test]
    fn test_point_norms() {
        let p = Point3::new(3.0, -4.0, 0.0);
        assert_eq!(p.l1_norm(), 7.0);
        assert_eq!(p.length(), 5.0);
        assert!(p.is_finite());
    }

    #[test]
    fn test_default_sign_threshold() {
        struct Draw(f64);
        impl UniformSource for Draw {
            fn uniform(&mut self) -> f64 {
                self.0
            }
        }

        assert_eq!(Draw(0.75).sign(), 1.0);
        assert_eq!(Draw(0.5).sign(), -1.0);
        assert_eq!(Draw(0.0).sign(), -1.0);
    }

    #[test]
    fn test_sample_negative_signs() {
        let mut source = Fixed { value: 0.25, sign: -1.0 };
        let p = sample(3.0, &mut source);

        assert!(p.x < 0.0 && p.y < 0.0 && p.z < 0.0);
        assert!((p.l1_norm() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_draw_is_not_finite() {
        let mut source = Fixed { value: 0.0, sign: 1.0 };
        let p = sample(2.0, &mut source);
        assert!(!p.is_finite());
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let sampler = SpherePointSampler::new(2.0);
        let a = sampler.sample_many(&mut RngSource(StdRng::seed_from_u64(7)), 16);
        let b = sampler.sample_many(&mut RngSource(StdRng::seed_from_u64(7)), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_vec3() {
        let v = Point3::new(1.0, 2.0, -0.5).to_vec3();
        assert_eq!(v, Vec3::new(1.0, 2.0, -0.5));
    }
}
