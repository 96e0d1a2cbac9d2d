//! [`Surface`] implementation on top of an `HtmlCanvasElement`.

use super::canvas_utils::{get_2d_context, js_error};
use cropper_core::error::Result;
use cropper_core::{Bitmap, CanvasSize, CropperError, Rect, Rgba, Surface};
use image::RgbaImage;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A decoded `<img>` used as the cropper's source bitmap.
#[derive(Clone, Debug)]
pub struct ImageElementBitmap(HtmlImageElement);

impl ImageElementBitmap {
    pub fn new(element: HtmlImageElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &HtmlImageElement {
        &self.0
    }
}

impl Bitmap for ImageElementBitmap {
    fn dimensions(&self) -> (u32, u32) {
        (self.0.natural_width(), self.0.natural_height())
    }
}

pub struct HtmlCanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    /// Color currently set as the context fill style.
    fill_color: Option<Rgba>,
}

impl HtmlCanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> std::result::Result<Self, JsValue> {
        let context = get_2d_context(&canvas)?;
        Ok(Self {
            canvas,
            context,
            fill_color: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for HtmlCanvasSurface {
    type Bitmap = ImageElementBitmap;

    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: CanvasSize) {
        // Setting either dimension also resets the backing store and the
        // context state, fill style included.
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.fill_color = None;
    }

    fn clear(&mut self) -> Result<()> {
        let size = self.size();
        self.context
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        if self.fill_color != Some(color) {
            self.context.set_fill_style_str(&color.to_css());
            self.fill_color = Some(color);
        }
        self.context
            .fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn draw_image(&mut self, bitmap: &ImageElementBitmap, src: Rect, dst: Rect) -> Result<()> {
        self.context
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                bitmap.element(),
                src.x,
                src.y,
                src.width,
                src.height,
                dst.x,
                dst.y,
                dst.width,
                dst.height,
            )
            .map_err(js_error)
    }

    fn read_pixels(&self) -> Result<RgbaImage> {
        let size = self.size();
        if size.is_empty() {
            return Ok(RgbaImage::new(size.width, size.height));
        }

        let image_data = self
            .context
            .get_image_data(0.0, 0.0, size.width as f64, size.height as f64)
            .map_err(js_error)?;
        RgbaImage::from_raw(image_data.width(), image_data.height(), image_data.data().0)
            .ok_or_else(|| CropperError::Surface("Canvas returned a short pixel buffer".to_string()))
    }
}
