//! GLINT Core - Scene description for the GLINT ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Object`, `Material`, `Light`, `Camera`
//! - **Validation**: range checks applied once at load time, so the tracer
//!   itself never has to
//! - **Loading**: JSON scene files via serde
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod error;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use error::SceneError;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{Camera, Light, Material, Object, RenderSettings, Scene, Shape};
