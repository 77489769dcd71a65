//! Scene validation errors.

use thiserror::Error;

/// A scene parameter outside the range the tracer assumes.
///
/// Raised by `Scene::validate` at load time; the tracer itself never
/// checks these.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("material '{name}': {field} out of range (got {value})")]
    Material {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("light {index}: energy must be non-negative (got {energy})")]
    Light { index: usize, energy: f32 },

    #[error("camera: focal length ratio must be positive (got {focal_length_ratio})")]
    Camera { focal_length_ratio: f32 },

    #[error("object {index}: {reason}")]
    Shape { index: usize, reason: String },
}
