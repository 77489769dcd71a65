//! Optics helpers shared by shading code.
//!
//! All functions take the *incident* direction (pointing toward the surface)
//! and a unit normal oriented against it.

use crate::Vec3;

/// Reflect an incident direction about a normal.
///
/// Returns: v - 2 (v . n) n. Unit length if both inputs are unit.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract an incident direction through a surface via Snell's law.
///
/// `n1` is the refractive index of the medium the ray is leaving and `n2`
/// the index of the medium it enters. Returns `None` on total internal
/// reflection (no transmitted direction exists).
pub fn refract(v: Vec3, n: Vec3, n1: f32, n2: f32) -> Option<Vec3> {
    let ratio = n1 / n2;
    let cos_i = -n.dot(v);
    let cos_t2 = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);
    if cos_t2 < 0.0 {
        return None;
    }
    Some(ratio * v + (ratio * cos_i - cos_t2.sqrt()) * n)
}

/// Schlick's approximation of the Fresnel reflectance coefficient.
///
/// `cos_theta` is the absolute cosine of the incidence angle, `ior` the
/// index of refraction of the surface (air assumed on the other side).
#[inline]
pub fn schlick_reflectance(cos_theta: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_mirrors_across_normal() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(v, Vec3::Y);

        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        assert!((r.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refract_straight_on_is_unchanged() {
        // Normal incidence bends nothing regardless of indices
        let v = -Vec3::Y;
        let t = refract(v, Vec3::Y, 1.0, 1.5).unwrap();

        assert!((t - v).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(v, Vec3::Y, 1.0, 1.5).unwrap();

        // Transmitted ray is closer to the (negated) normal than the incident
        assert!(t.dot(-Vec3::Y) > v.dot(-Vec3::Y));
        assert!((t.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle: past the critical angle
        let v = Vec3::new(1.0, -0.1, 0.0).normalize();

        assert!(refract(v, Vec3::Y, 1.5, 1.0).is_none());
    }

    #[test]
    fn test_schlick_limits() {
        let r0 = ((1.0 - 1.5f32) / (1.0 + 1.5)).powi(2);

        // Normal incidence reduces to R0, grazing incidence to 1
        assert!((schlick_reflectance(1.0, 1.5) - r0).abs() < 1e-6);
        assert!((schlick_reflectance(0.0, 1.5) - 1.0).abs() < 1e-6);
    }
}
