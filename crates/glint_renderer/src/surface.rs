//! Built-in analytic surfaces.
//!
//! `SurfaceScene` is a linear nearest-hit list over the shapes of a
//! `glint_core::Scene`. It stands in for the host's geometry engine in
//! tests and the CLI; production hosts inject their own
//! [`IntersectionOracle`].

use glint_core::{Object, Scene, Shape};
use glint_math::{Ray, Vec3};

use crate::oracle::{Intersection, IntersectionOracle};

/// Rays shorter than this are treated as grazing a plane edge-on.
const PLANE_PARALLEL_EPS: f32 = 1e-8;

/// An intersection oracle over analytic spheres and planes.
pub struct SurfaceScene {
    objects: Vec<Object>,
}

impl SurfaceScene {
    /// Create an oracle over a list of objects.
    pub fn new(objects: Vec<Object>) -> Self {
        Self { objects }
    }

    /// Create an oracle over the objects of a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        Self::new(scene.objects.clone())
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the oracle holds no surfaces.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl IntersectionOracle for SurfaceScene {
    fn cast(&self, ray: Ray) -> Option<Intersection<'_>> {
        let mut nearest: Option<Intersection> = None;

        for (index, object) in self.objects.iter().enumerate() {
            let Some((t, normal)) = intersect_shape(&object.shape, ray) else {
                continue;
            };
            if nearest.as_ref().is_some_and(|hit| hit.t <= t) {
                continue;
            }
            nearest = Some(Intersection {
                point: ray.at(t),
                normal,
                t,
                object: index,
                material: &object.material,
            });
        }

        nearest
    }
}

/// Intersect a single shape, returning distance and geometric normal.
fn intersect_shape(shape: &Shape, ray: Ray) -> Option<(f32, Vec3)> {
    match *shape {
        Shape::Sphere { center, radius } => {
            let oc = center - ray.origin;
            let a = ray.direction.length_squared();
            let h = ray.direction.dot(oc);
            let c = oc.length_squared() - radius * radius;

            let discriminant = h * h - a * c;
            if discriminant < 0.0 {
                return None;
            }
            let sqrtd = discriminant.sqrt();

            // Nearest root in front of the origin
            let mut root = (h - sqrtd) / a;
            if root <= 0.0 {
                root = (h + sqrtd) / a;
                if root <= 0.0 {
                    return None;
                }
            }

            Some((root, (ray.at(root) - center) / radius))
        }
        Shape::Plane { point, normal } => {
            let normal = normal.normalize();
            let denom = ray.direction.dot(normal);
            if denom.abs() < PLANE_PARALLEL_EPS {
                return None;
            }
            let t = (point - ray.origin).dot(normal) / denom;
            if t <= 0.0 {
                return None;
            }
            Some((t, normal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;

    fn sphere_at(center: Vec3, radius: f32) -> Object {
        Object::new(Shape::Sphere { center, radius }, Material::default())
    }

    fn ground_plane() -> Object {
        Object::new(
            Shape::Plane {
                point: Vec3::ZERO,
                normal: Vec3::Y,
            },
            Material::default(),
        )
    }

    #[test]
    fn test_sphere_hit_distance_and_normal() {
        let oracle = SurfaceScene::new(vec![sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5)]);

        let hit = oracle.cast(Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let oracle = SurfaceScene::new(vec![sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5)]);

        assert!(oracle.cast(Ray::new(Vec3::ZERO, Vec3::Y)).is_none());
    }

    #[test]
    fn test_sphere_from_inside_reports_outward_normal() {
        let oracle = SurfaceScene::new(vec![sphere_at(Vec3::ZERO, 1.0)]);

        // Ray starts at the center; normal is geometric, pointing away
        // from the center, i.e. along the ray
        let hit = oracle.cast(Ray::new(Vec3::ZERO, Vec3::X)).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-4);
        assert!(hit.normal.dot(Vec3::X) > 0.0);
    }

    #[test]
    fn test_plane_hit() {
        let oracle = SurfaceScene::new(vec![ground_plane()]);

        let hit = oracle
            .cast(Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y))
            .unwrap();
        assert!((hit.t - 2.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let oracle = SurfaceScene::new(vec![ground_plane()]);

        assert!(oracle
            .cast(Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X))
            .is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let oracle = SurfaceScene::new(vec![
            sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0),
            sphere_at(Vec3::new(0.0, 0.0, -2.0), 0.5),
        ]);

        let hit = oracle.cast(Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit.object, 1);
        assert!((hit.t - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_behind_origin_ignored() {
        let oracle = SurfaceScene::new(vec![sphere_at(Vec3::new(0.0, 0.0, 5.0), 1.0)]);

        assert!(oracle.cast(Ray::new(Vec3::ZERO, Vec3::NEG_Z)).is_none());
    }
}
