//! Scene types for GLINT.
//!
//! This module defines the renderer-agnostic scene description: materials,
//! lights, the camera, and the objects the intersection engine will expose
//! to the tracer. Hosts that embed the renderer build a `Scene` from their
//! own scene graph; the CLI deserializes one from JSON.

use glint_math::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Surface shading parameters for one object.
///
/// The tracer reads these as-is; `Scene::validate` is the only place ranges
/// are checked.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name, used in validation diagnostics
    pub name: String,

    /// Diffuse/albedo color (RGB, 0-1)
    pub diffuse_color: Vec3,

    /// Specular highlight color (RGB, 0-1)
    pub specular_color: Vec3,

    /// Blinn-Phong exponent (>= 0; higher = tighter highlight)
    pub specular_hardness: f32,

    /// Mirror reflectivity in [0, 1], ignored when `use_fresnel` is set
    pub mirror_reflectivity: f32,

    /// Derive reflectivity from Schlick's approximation instead of
    /// `mirror_reflectivity`
    pub use_fresnel: bool,

    /// Index of refraction (> 0; 1.0 = air, 1.5 = glass)
    pub ior: f32,

    /// Transmission factor in [0, 1] (0 = opaque)
    pub transmission: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_color: Vec3::new(0.8, 0.8, 0.8), // Grey default
            specular_color: Vec3::ONE,
            specular_hardness: 50.0,
            mirror_reflectivity: 0.0,
            use_fresnel: false,
            ior: 1.45,
            transmission: 0.0,
        }
    }
}

impl Material {
    /// Create a new material with just a name and diffuse color.
    pub fn new(name: impl Into<String>, diffuse_color: Vec3) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Check parameter ranges, failing with the first violation.
    pub fn validate(&self) -> Result<(), SceneError> {
        let fail = |field: &'static str, value: f32| {
            Err(SceneError::Material {
                name: self.name.clone(),
                field,
                value,
            })
        };

        if !self.specular_hardness.is_finite() || self.specular_hardness < 0.0 {
            return fail("specular_hardness", self.specular_hardness);
        }
        if !(0.0..=1.0).contains(&self.mirror_reflectivity) {
            return fail("mirror_reflectivity", self.mirror_reflectivity);
        }
        if !self.ior.is_finite() || self.ior <= 0.0 {
            return fail("ior", self.ior);
        }
        if !(0.0..=1.0).contains(&self.transmission) {
            return fail("transmission", self.transmission);
        }
        Ok(())
    }
}

/// A point light.
///
/// Radiant intensity is `color * energy`, attenuated by the inverse square
/// of the distance to the shading point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Light {
    /// World-space position
    pub position: Vec3,

    /// Light color (RGB, 0-1)
    pub color: Vec3,

    /// Energy multiplier (>= 0)
    #[serde(default = "default_energy")]
    pub energy: f32,
}

fn default_energy() -> f32 {
    1.0
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, color: Vec3, energy: f32) -> Self {
        Self {
            position,
            color,
            energy,
        }
    }

    /// Radiant intensity before distance falloff.
    pub fn intensity(&self) -> Vec3 {
        self.color * self.energy
    }

    fn validate(&self, index: usize) -> Result<(), SceneError> {
        if !self.energy.is_finite() || self.energy < 0.0 {
            return Err(SceneError::Light {
                index,
                energy: self.energy,
            });
        }
        Ok(())
    }
}

/// The camera a frame is rendered from.
///
/// `focal_length_ratio` is focal length divided by sensor width, the
/// dimensionless quantity the primary-ray math wants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Camera {
    /// World-space position
    pub position: Vec3,

    /// Orientation as XYZ Euler angles in radians (x applied first).
    /// An unrotated camera looks down -Z.
    #[serde(default)]
    pub rotation: Vec3,

    /// Focal length / sensor width (> 0)
    #[serde(default = "default_focal_length_ratio")]
    pub focal_length_ratio: f32,
}

fn default_focal_length_ratio() -> f32 {
    // 50mm lens on a 36mm sensor
    50.0 / 36.0
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            focal_length_ratio: default_focal_length_ratio(),
        }
    }
}

impl Camera {
    /// Orientation as a quaternion.
    ///
    /// XYZ Euler with X applied first is intrinsic ZYX.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.rotation.z,
            self.rotation.y,
            self.rotation.x,
        )
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !self.focal_length_ratio.is_finite() || self.focal_length_ratio <= 0.0 {
            return Err(SceneError::Camera {
                focal_length_ratio: self.focal_length_ratio,
            });
        }
        Ok(())
    }
}

/// Frame-wide render settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Ambient color applied when no light reaches a point
    pub ambient_color: Vec3,

    /// Maximum secondary-ray recursion depth
    pub recursion_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::splat(0.05),
            recursion_depth: 2,
        }
    }
}

/// Analytic geometry for the built-in intersection engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Plane { point: Vec3, normal: Vec3 },
}

impl Shape {
    fn validate(&self, index: usize) -> Result<(), SceneError> {
        match self {
            Shape::Sphere { radius, .. } => {
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(SceneError::Shape {
                        index,
                        reason: format!("sphere radius must be positive, got {radius}"),
                    });
                }
            }
            Shape::Plane { normal, .. } => {
                if normal.length_squared() < 1e-12 {
                    return Err(SceneError::Shape {
                        index,
                        reason: "plane normal must be non-zero".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A renderable object: a shape carrying a material.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Object {
    pub shape: Shape,
    #[serde(default)]
    pub material: Material,
}

impl Object {
    /// Create a new object.
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }
}

/// A complete scene: camera, settings, lights, and objects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    /// Active camera
    #[serde(default)]
    pub camera: Camera,

    /// Frame-wide settings
    #[serde(default)]
    pub settings: RenderSettings,

    /// Point lights
    #[serde(default)]
    pub lights: Vec<Light>,

    /// Renderable objects
    #[serde(default)]
    pub objects: Vec<Object>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, shape: Shape, material: Material) -> usize {
        let id = self.objects.len();
        self.objects.push(Object::new(shape, material));
        id
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        let id = self.lights.len();
        self.lights.push(light);
        id
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Range-check every parameter the tracer will consume.
    ///
    /// The tracer treats scene data as preconditions, so a scene must pass
    /// through here before rendering.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.camera.validate()?;
        for (index, light) in self.lights.iter().enumerate() {
            light.validate(index)?;
        }
        for (index, object) in self.objects.iter().enumerate() {
            object.shape.validate(index)?;
            object.material.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test");

        let id = scene.add_object(
            Shape::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
            },
            Material::new("red", Vec3::X),
        );
        assert_eq!(id, 0);

        scene.add_light(Light::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ONE, 100.0));

        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_identity_camera_looks_down_negative_z() {
        let camera = Camera::default();
        let dir = camera.orientation() * Vec3::NEG_Z;

        assert!((dir - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_pitched_up_looks_along_y() {
        // +90 degrees about X takes -Z to +Y
        let camera = Camera {
            rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            ..Default::default()
        };
        let dir = camera.orientation() * Vec3::NEG_Z;

        assert!((dir - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_material_validation_rejects_bad_ranges() {
        let mut mat = Material::new("bad", Vec3::ONE);
        mat.transmission = 1.5;
        assert!(mat.validate().is_err());

        let mut mat = Material::new("bad", Vec3::ONE);
        mat.ior = 0.0;
        assert!(mat.validate().is_err());

        let mut mat = Material::new("bad", Vec3::ONE);
        mat.specular_hardness = -1.0;
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_scene_validation_reports_light_index() {
        let mut scene = Scene::new("test");
        scene.add_light(Light::new(Vec3::ZERO, Vec3::ONE, -1.0));

        match scene.validate() {
            Err(SceneError::Light { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected light error, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_validation() {
        let mut scene = Scene::new("test");
        scene.add_object(
            Shape::Plane {
                point: Vec3::ZERO,
                normal: Vec3::ZERO,
            },
            Material::default(),
        );

        assert!(scene.validate().is_err());
    }
}
