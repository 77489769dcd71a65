use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// Direction is expected to be unit length; constructors do not normalize,
/// that is the caller's responsibility.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Displace the origin a small distance along the direction.
    ///
    /// Secondary rays start slightly off the surface that spawned them so
    /// they do not re-hit it.
    pub fn nudged(&self, eps: f32) -> Self {
        Self {
            origin: self.origin + self.direction * eps,
            direction: self.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_nudged() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y).nudged(1e-3);

        assert_eq!(ray.direction, Vec3::Y);
        assert!((ray.origin.y - 1e-3).abs() < f32::EPSILON);
    }
}
