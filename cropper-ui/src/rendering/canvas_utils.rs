use cropper_core::CropperError;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, ContextAttributes2d, HtmlCanvasElement};

/// Get 2D rendering context from canvas.
///
/// The cropper reads pixels back on every export, so the context is requested
/// with `willReadFrequently`.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let attrs = ContextAttributes2d::new();
    attrs.set_will_read_frequently(true);

    Ok(canvas
        .get_context_with_context_options("2d", &attrs)?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Convert a thrown JS value into a surface error.
pub fn js_error(err: JsValue) -> CropperError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    };
    CropperError::Surface(message)
}
