//! Frame buffer for storing render output.

use glint_math::Vec3;

/// Row-major RGBA float buffer.
///
/// Pixels default to (0, 0, 0, 0); writing a color sets alpha to 1, so
/// untouched pixels of a cancelled render stay fully transparent. Values
/// are linear and unclamped; [`FrameBuffer::to_rgba8`] is the only place
/// they are squeezed for display.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl FrameBuffer {
    /// Create a new buffer filled with transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height * 4],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Write an opaque color at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Vec3) {
        let i = (y * self.width + x) * 4;
        self.data[i] = color.x;
        self.data[i + 1] = color.y;
        self.data[i + 2] = color.z;
        self.data[i + 3] = 1.0;
    }

    /// Get the RGBA components at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// The raw buffer, height * width * 4 floats in raster order.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// One row of the buffer, width * 4 floats.
    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width * 4..(y + 1) * self.width * 4]
    }

    /// Convert to 8-bit RGBA for display or saving.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let [r, g, b] = color_to_rgba(Vec3::new(px[0], px[1], px[2]));
            bytes.extend_from_slice(&[r, g, b, (255.0 * clamp_01(px[3])) as u8]);
        }
        bytes
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgba(color: Vec3) -> [u8; 3] {
    let r = (255.0 * clamp_01(linear_to_gamma(color.x))) as u8;
    let g = (255.0 * clamp_01(linear_to_gamma(color.y))) as u8;
    let b = (255.0 * clamp_01(linear_to_gamma(color.z))) as u8;
    [r, g, b]
}
