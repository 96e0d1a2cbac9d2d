//! The drawing capabilities the cropper needs from its host.
//!
//! A surface is anything that can clear itself, fill a rectangle, draw a scaled
//! region of a bitmap and hand its pixels back. The browser implements this on
//! top of `CanvasRenderingContext2d`; [`crate::RasterSurface`] implements it in
//! memory.

use crate::error::Result;
use crate::image_source::Bitmap;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Drawing-area size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Zero-height canvases report a ratio of 1.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The whole canvas as a destination rectangle.
    pub fn full_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

/// Rectangle with floating-point coordinates, in whatever space the caller uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);

    /// CSS color string, e.g. `rgba(255, 255, 255, 1)`.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        format!("rgba({}, {}, {}, {})", r, g, b, a as f64 / 255.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// Minimal 2D drawing target.
pub trait Surface {
    type Bitmap: Bitmap;

    fn size(&self) -> CanvasSize;

    /// Change the backing store size. Contents are discarded.
    fn resize(&mut self, size: CanvasSize);

    /// Reset every pixel to transparent.
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;

    /// Draw the `src` region of `image` scaled into `dst`.
    ///
    /// Parts of `src` outside the bitmap contribute nothing; parts of `dst`
    /// outside the surface are clipped.
    fn draw_image(&mut self, image: &Self::Bitmap, src: Rect, dst: Rect) -> Result<()>;

    /// Read back the current pixels.
    fn read_pixels(&self) -> Result<RgbaImage>;
}
