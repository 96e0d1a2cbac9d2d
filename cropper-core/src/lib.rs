pub mod config;
pub mod cropper;
pub mod error;
pub mod export;
pub mod image_source;
pub mod interaction;
pub mod orientation;
pub mod raster;
pub mod renderer;
pub mod surface;
pub mod viewport;

pub use config::{CropperConfig, ViewportConfig};
pub use cropper::Cropper;
pub use error::CropperError;
pub use export::{decode_data_uri, export_data_uri, DOWNLOAD_MIME, PNG_MIME};
pub use image_source::{Bitmap, LoadState, SourceImage};
pub use interaction::{transition, Command, DragState, PointerInput};
pub use orientation::{Orientation, UnknownOrientation};
pub use raster::RasterSurface;
pub use renderer::redraw;
pub use surface::{CanvasSize, Rect, Rgba, Surface};
pub use viewport::{ViewportController, ViewportState};
