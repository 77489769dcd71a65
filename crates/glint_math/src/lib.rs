// Re-export glam for convenience
pub use glam::*;

// GLINT math types
mod optics;
mod ray;

pub use optics::{reflect, refract, schlick_reflectance};
pub use ray::Ray;
