//! In-memory [`Surface`] backed by an `RgbaImage`.
//!
//! Used for headless rendering and for tests. Sampling is nearest-neighbour on
//! pixel centers and drawing composites source-over, so results are fully
//! deterministic.

use crate::error::Result;
use crate::surface::{CanvasSize, Rect, Rgba, Surface};
use image::{Rgba as Pixel, RgbaImage};
use std::ops::Range;

#[derive(Clone, Debug)]
pub struct RasterSurface {
    pixels: RgbaImage,
}

impl RasterSurface {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            pixels: RgbaImage::new(size.width, size.height),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Source-over composite `color` onto the pixel at `(x, y)`.
    fn blend(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let dst = self.pixels.get_pixel_mut(x, y);
        dst.0 = composite(color, dst.0);
    }
}

impl Surface for RasterSurface {
    type Bitmap = RgbaImage;

    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.pixels.width(), self.pixels.height())
    }

    fn resize(&mut self, size: CanvasSize) {
        self.pixels = RgbaImage::new(size.width, size.height);
    }

    fn clear(&mut self) -> Result<()> {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Pixel(Rgba::TRANSPARENT.0);
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        let xs = pixel_span(rect.x, rect.width, self.pixels.width());
        let ys = pixel_span(rect.y, rect.height, self.pixels.height());
        for y in ys {
            for x in xs.clone() {
                self.blend(x, y, color.0);
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) -> Result<()> {
        if [src.width, src.height, dst.width, dst.height]
            .iter()
            .any(|extent| extent.is_nan() || *extent <= 0.0)
        {
            return Ok(());
        }

        let (image_w, image_h) = (image.width() as f64, image.height() as f64);
        let xs = pixel_span(dst.x, dst.width, self.pixels.width());
        let ys = pixel_span(dst.y, dst.height, self.pixels.height());

        for y in ys {
            let sy = src.y + (y as f64 + 0.5 - dst.y) / dst.height * src.height;
            if sy < 0.0 || sy >= image_h {
                continue;
            }
            for x in xs.clone() {
                let sx = src.x + (x as f64 + 0.5 - dst.x) / dst.width * src.width;
                if sx < 0.0 || sx >= image_w {
                    continue;
                }
                let color = image.get_pixel(sx as u32, sy as u32).0;
                self.blend(x, y, color);
            }
        }
        Ok(())
    }

    fn read_pixels(&self) -> Result<RgbaImage> {
        Ok(self.pixels.clone())
    }
}

/// Pixels whose centers fall inside `[start, start + extent)`, clipped to `[0, limit)`.
fn pixel_span(start: f64, extent: f64, limit: u32) -> Range<u32> {
    if extent.is_nan() || extent <= 0.0 || !start.is_finite() {
        return 0..0;
    }
    let first = (start - 0.5).ceil().max(0.0);
    let end = (start + extent - 0.5).ceil().min(limit as f64);
    if end <= first {
        return 0..0;
    }
    first as u32..end as u32
}

/// Straight-alpha source-over.
fn composite(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }
    let sa = src[3] as f64 / 255.0;
    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let channel = |s: u8, d: u8| -> u8 {
        let value = (s as f64 * sa + d as f64 * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}
