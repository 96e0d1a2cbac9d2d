pub mod canvas_surface;
pub mod canvas_utils;

pub use canvas_surface::{HtmlCanvasSurface, ImageElementBitmap};
pub use canvas_utils::{get_2d_context, js_error};
