pub mod cropper_canvas;
pub mod orientation_bar;
pub mod preview;
pub mod zoom_controls;

pub use cropper_canvas::{with_cropper, CropperCanvas, CropperHandle};
pub use orientation_bar::OrientationBar;
pub use preview::Preview;
pub use zoom_controls::ZoomControls;
