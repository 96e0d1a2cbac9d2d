use crate::error::Result;
use crate::image_source::SourceImage;
use crate::surface::{CanvasSize, Rgba, Surface};
use crate::viewport::ViewportState;

/// Repaint the canvas from the current viewport.
///
/// Clears, fills with `background` so transparent image regions never show the
/// host page, then draws the sampled region of the image scaled to cover the
/// full canvas. Only reads its inputs, so repeated calls paint the same pixels.
pub fn redraw<S: Surface>(
    surface: &mut S,
    image: &SourceImage<S::Bitmap>,
    state: &ViewportState,
    canvas: CanvasSize,
    background: Rgba,
) -> Result<()> {
    let target = canvas.full_rect();
    surface.clear()?;
    surface.fill_rect(target, background)?;
    surface.draw_image(image.bitmap(), state.sample_rect(canvas), target)
}
