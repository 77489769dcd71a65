//! The intersection oracle seam between tracer and geometry engine.

use glint_core::Material;
use glint_math::{Ray, Vec3};

/// Result of a successful ray cast.
///
/// The normal is the geometric surface normal; it is *not* flipped toward
/// the ray origin. The shading engine handles orientation, because the flip
/// also tells it whether the ray started inside the object.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Geometric surface normal (unit length)
    pub normal: Vec3,
    /// Distance along the ray where the intersection occurs
    pub t: f32,
    /// Identifier of the hit object, host-defined
    pub object: usize,
    /// Material of the hit object
    pub material: &'a Material,
}

/// Ray-geometry intersection, supplied by the host.
///
/// Implementations report the nearest intersection with `t > 0` and do no
/// self-intersection biasing of their own; callers offset secondary-ray
/// origins off the spawning surface.
pub trait IntersectionOracle: Send + Sync {
    /// Cast a ray and return the nearest intersection, if any.
    fn cast(&self, ray: Ray) -> Option<Intersection<'_>>;
}
