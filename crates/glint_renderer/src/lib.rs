//! GLINT Renderer - Whitted-style CPU ray tracing.
//!
//! A recursive ray tracer with Blinn-Phong direct lighting, shadow rays,
//! and Fresnel-weighted reflection/refraction up to a bounded depth.
//!
//! Geometry intersection is injected through the [`IntersectionOracle`]
//! trait, so a host application can plug in its own engine; the built-in
//! [`SurfaceScene`] covers analytic spheres and planes for tests and the
//! CLI.

mod framebuffer;
mod oracle;
mod renderer;
mod shading;
mod surface;

pub use framebuffer::{color_to_rgba, FrameBuffer};
pub use oracle::{Intersection, IntersectionOracle};
pub use renderer::{render_frame, render_frame_with, render_scene, CancelToken};
pub use shading::{trace_ray, RenderContext, SELF_OCCLUSION_EPS};
pub use surface::SurfaceScene;

/// Re-export math types used throughout the API
pub use glint_math::{Ray, Vec3};
