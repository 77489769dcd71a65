//! The shading engine: recursive Whitted-style ray tracing.
//!
//! [`trace_ray`] computes the outgoing radiance at whatever the ray hits:
//! Blinn-Phong direct lighting behind shadow rays, an ambient fallback when
//! every light is occluded, and recursive reflection/transmission weighted
//! by mirror or Fresnel reflectivity.

use glint_core::Light;
use glint_math::{reflect, refract, schlick_reflectance, Ray, Vec3};

use crate::oracle::IntersectionOracle;

/// Offset applied to secondary-ray origins along their direction so they
/// do not re-hit the surface that spawned them.
pub const SELF_OCCLUSION_EPS: f32 = 1e-3;

/// Immutable per-frame shading inputs, threaded through every call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Point lights in the scene
    pub lights: &'a [Light],
    /// Ambient color applied when no light reaches a point
    pub ambient_color: Vec3,
}

/// Trace a single ray and return its color.
///
/// `direction` must be unit length. Returns non-negative RGB; values may
/// exceed 1.0, clamping is the display layer's concern. A ray that escapes
/// the scene is black.
///
/// `depth` is the number of secondary bounces still allowed; it strictly
/// decreases on every recursive call and 0 stops all reflection and
/// transmission rays.
pub fn trace_ray(
    oracle: &dyn IntersectionOracle,
    origin: Vec3,
    direction: Vec3,
    ctx: &RenderContext<'_>,
    depth: u32,
) -> Vec3 {
    let Some(hit) = oracle.cast(Ray::new(origin, direction)) else {
        return Vec3::ZERO;
    };

    // The oracle reports the geometric normal; one facing with the ray
    // means the ray started inside the object. Flip it and remember, the
    // refraction indices depend on which medium we are in.
    let mut normal = hit.normal;
    let mut inside = false;
    if normal.dot(direction) > 0.0 {
        normal = -normal;
        inside = true;
    }

    let material = hit.material;
    let mut color = Vec3::ZERO;
    let mut any_light_contributed = false;

    for light in ctx.lights {
        let light_vec = light.position - hit.point;
        let light_dist = light_vec.length();
        let light_dir = light_vec / light_dist;

        // Shadow ray, bounded by the distance to the light: an occluder
        // beyond the light does not shadow it
        let shadow_ray = Ray::new(hit.point, light_dir).nudged(SELF_OCCLUSION_EPS);
        let occluded = oracle
            .cast(shadow_ray)
            .is_some_and(|s| s.t < light_dist - SELF_OCCLUSION_EPS);
        if occluded {
            continue;
        }
        any_light_contributed = true;

        // Inverse-square falloff
        let intensity = light.intensity() / light_vec.length_squared();

        color += material.diffuse_color * intensity * light_dir.dot(normal).max(0.0);

        // Blinn-Phong: half vector between light and view directions
        let half = (light_dir - direction).normalize();
        color += material.specular_color
            * intensity
            * normal.dot(half).max(0.0).powf(material.specular_hardness);
    }

    // Ambient stands in for direct light, it does not add to it
    if !any_light_contributed {
        return material.diffuse_color * ctx.ambient_color;
    }

    let reflectivity = if material.use_fresnel {
        schlick_reflectance(direction.dot(normal).abs(), material.ior)
    } else {
        material.mirror_reflectivity
    };

    if depth > 0 {
        let reflect_ray = Ray::new(hit.point, reflect(direction, normal)).nudged(SELF_OCCLUSION_EPS);
        color += reflectivity
            * trace_ray(oracle, reflect_ray.origin, reflect_ray.direction, ctx, depth - 1);

        if material.transmission > 0.0 {
            let (n1, n2) = if inside {
                (material.ior, 1.0)
            } else {
                (1.0, material.ior)
            };
            // Total internal reflection has no transmitted direction; the
            // branch is skipped, the reflection term carries the energy
            if let Some(transmit_dir) = refract(direction, normal, n1, n2) {
                let transmit_ray = Ray::new(hit.point, transmit_dir).nudged(SELF_OCCLUSION_EPS);
                color += (1.0 - reflectivity)
                    * material.transmission
                    * trace_ray(
                        oracle,
                        transmit_ray.origin,
                        transmit_ray.direction,
                        ctx,
                        depth - 1,
                    );
            }
        }
    }

    color
}
