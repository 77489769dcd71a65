//! The frame renderer: primary rays, the pixel loop, progress and
//! cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use glint_core::{Camera, Scene};
use glint_math::Vec3;

use crate::framebuffer::FrameBuffer;
use crate::oracle::IntersectionOracle;
use crate::shading::{trace_ray, RenderContext};
use crate::surface::SurfaceScene;

/// Cooperative cancellation flag, polled once per row.
///
/// Clones share the flag, so a host can keep one half on its UI thread
/// and hand the other to the render loop.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Render a frame.
///
/// Primary rays are built from the camera per the screen-space model: for
/// pixel (x, y), `screen_x = (x - w/2) / w`, `screen_y = ((y - h/2) / h) *
/// (h / w)`, direction `(screen_x, screen_y, -focal_length_ratio)` rotated
/// by the camera orientation and normalized. Row 0 is therefore the bottom
/// of the frame for an identity camera.
///
/// `on_row_complete` runs after every finished row with the row index;
/// `cancel` is polled at the same point, and a cancelled render returns
/// the partially written buffer. The loop is single-threaded; the only
/// bound on per-pixel work is `depth`.
pub fn render_frame_with(
    oracle: &dyn IntersectionOracle,
    camera: &Camera,
    ctx: &RenderContext<'_>,
    depth: u32,
    width: usize,
    height: usize,
    mut on_row_complete: impl FnMut(usize),
    cancel: &CancelToken,
) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(width, height);

    // Camera parameters are fixed for the frame; extract them once
    let orientation = camera.orientation();
    let origin = camera.position;
    let focal = camera.focal_length_ratio;
    let aspect_ratio = height as f32 / width as f32;

    let start = Instant::now();

    for y in 0..height {
        let screen_y = ((y as f32 - height as f32 / 2.0) / height as f32) * aspect_ratio;
        for x in 0..width {
            let screen_x = (x as f32 - width as f32 / 2.0) / width as f32;
            let direction =
                (orientation * Vec3::new(screen_x, screen_y, -focal)).normalize();
            let color = trace_ray(oracle, origin, direction, ctx, depth);
            buffer.set_pixel(x, y, color);
        }

        on_row_complete(y);
        if cancel.is_cancelled() {
            log::info!("render cancelled after row {y}");
            return buffer;
        }
    }

    log::debug!(
        "rendered {}x{} at depth {} in {:.2?}",
        width,
        height,
        depth,
        start.elapsed()
    );

    buffer
}

/// Render a frame without progress reporting or cancellation.
pub fn render_frame(
    oracle: &dyn IntersectionOracle,
    camera: &Camera,
    ctx: &RenderContext<'_>,
    depth: u32,
    width: usize,
    height: usize,
) -> FrameBuffer {
    render_frame_with(
        oracle,
        camera,
        ctx,
        depth,
        width,
        height,
        |_| {},
        &CancelToken::new(),
    )
}

/// Render a scene with the built-in surface oracle.
///
/// Convenience for hosts without their own geometry engine: builds a
/// [`SurfaceScene`] over the scene's objects and renders with its camera,
/// lights, and settings.
pub fn render_scene(
    scene: &Scene,
    width: usize,
    height: usize,
    on_row_complete: impl FnMut(usize),
    cancel: &CancelToken,
) -> FrameBuffer {
    let oracle = SurfaceScene::from_scene(scene);
    let ctx = RenderContext {
        lights: &scene.lights,
        ambient_color: scene.settings.ambient_color,
    };
    render_frame_with(
        &oracle,
        &scene.camera,
        &ctx,
        scene.settings.recursion_depth,
        width,
        height,
        on_row_complete,
        cancel,
    )
}
