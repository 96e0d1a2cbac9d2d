//! Viewport transform: which part of the source image lands on the canvas.
//!
//! The viewport works like a camera over the source image. `offset` is the
//! top-left corner of the sampled region in source pixels and `zoom` is the
//! number of source pixels per canvas pixel, so the sampled region is
//! `canvas * zoom` wide. Larger zoom values therefore zoom *out*.

use crate::config::{ViewportConfig, DEFAULT_MIN_ZOOM};
use crate::image_source::{Bitmap, LoadState, SourceImage};
use crate::surface::{CanvasSize, Rect};
use serde::Serialize;

/// Current camera position over the source image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewportState {
    offset_x: f64,
    offset_y: f64,
    zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewportState {
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Source pixels per canvas pixel. Always positive.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Source rectangle sampled when drawing onto a canvas of the given size.
    pub fn sample_rect(&self, canvas: CanvasSize) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            canvas.width as f64 * self.zoom,
            canvas.height as f64 * self.zoom,
        )
    }
}

/// Owns the source image, the canvas dimensions and the viewport state.
///
/// Every mutating method is a no-op until the source image has loaded, so the
/// state can never be derived from a missing image.
#[derive(Debug)]
pub struct ViewportController<B> {
    source: LoadState<B>,
    state: ViewportState,
    canvas: CanvasSize,
    config: ViewportConfig,
}

impl<B: Bitmap> ViewportController<B> {
    /// A `min_zoom` that is not a positive finite number is replaced by
    /// [`DEFAULT_MIN_ZOOM`].
    pub fn new(canvas: CanvasSize, mut config: ViewportConfig) -> Self {
        if !(config.min_zoom.is_finite() && config.min_zoom > 0.0) {
            log::warn!(
                "Invalid min_zoom {}, using {}",
                config.min_zoom,
                DEFAULT_MIN_ZOOM
            );
            config.min_zoom = DEFAULT_MIN_ZOOM;
        }
        Self {
            source: LoadState::Pending,
            state: ViewportState::default(),
            canvas,
            config,
        }
    }

    pub fn source(&self) -> &LoadState<B> {
        &self.source
    }

    /// Replace the load state. The viewport itself is untouched until
    /// [`initialize`](Self::initialize) runs.
    pub fn set_source(&mut self, source: LoadState<B>) {
        self.source = source;
    }

    pub fn image(&self) -> Option<&SourceImage<B>> {
        self.source.image()
    }

    pub fn is_loaded(&self) -> bool {
        self.image().is_some()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    /// Fit and center the freshly loaded image.
    ///
    /// Returns `None` without touching anything while the image is pending or
    /// has failed to load.
    pub fn initialize(&mut self) -> Option<ViewportState> {
        if !self.is_loaded() {
            return None;
        }
        self.reset_orientation();
        Some(self.state)
    }

    /// Move the camera by a pointer delta given in canvas pixels.
    ///
    /// Dragging right moves the image right, so the sampling origin moves left.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !self.is_loaded() || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.state.offset_x -= dx * self.state.zoom;
        self.state.offset_y -= dy * self.state.zoom;
        self.enforce_bounds();
    }

    /// Change zoom by `amount / strength` while keeping the canvas center fixed.
    ///
    /// Positive amounts zoom in (smaller zoom value). The result never drops
    /// below `min_zoom`.
    pub fn zoom_by(&mut self, amount: f64, strength: f64) {
        if !self.is_loaded() {
            return;
        }
        if !strength.is_finite() || strength == 0.0 || !amount.is_finite() {
            log::warn!(
                "Ignoring zoom request with amount={} strength={}",
                amount,
                strength
            );
            return;
        }

        let old_zoom = self.state.zoom;
        let requested = old_zoom - amount / strength;
        if !requested.is_finite() {
            log::warn!(
                "Ignoring zoom request with amount={} strength={}: zoom would overflow",
                amount,
                strength
            );
            return;
        }
        let new_zoom = self.clamp_zoom(requested);
        if new_zoom != requested {
            log::debug!("Zoom {} clamped to {}", requested, new_zoom);
        }

        let zoom_diff = old_zoom - new_zoom;
        self.state.zoom = new_zoom;
        self.state.offset_x += zoom_diff * self.canvas.width as f64 / 2.0;
        self.state.offset_y += zoom_diff * self.canvas.height as f64 / 2.0;
        self.enforce_bounds();
    }

    /// Choose zoom so the image covers the canvas along its longer side.
    ///
    /// Landscape canvases fit the image width, portrait canvases fit the image
    /// height. Square canvases use the height fit as well.
    pub fn fit_to_canvas(&mut self) {
        let Some((image_w, image_h)) = self.image_size() else {
            return;
        };
        if self.canvas.is_empty() {
            log::warn!("Cannot fit image to an empty canvas");
            return;
        }

        let canvas_w = self.canvas.width as f64;
        let canvas_h = self.canvas.height as f64;

        let mut zoom = image_h / canvas_h;
        let ratio = self.canvas.aspect_ratio();
        if ratio > 1.0 {
            zoom = image_w / canvas_w;
        } else if ratio < 1.0 {
            zoom = image_h / canvas_h;
        }

        self.state.zoom = self.clamp_zoom(zoom);
    }

    /// Center the image horizontally under the canvas.
    pub fn center_x(&mut self) {
        let Some((image_w, _)) = self.image_size() else {
            return;
        };
        self.state.offset_x = -(self.canvas.width as f64 * self.state.zoom) / 2.0 + image_w / 2.0;
        self.enforce_bounds();
    }

    /// Center the image vertically under the canvas.
    pub fn center_y(&mut self) {
        let Some((_, image_h)) = self.image_size() else {
            return;
        };
        self.state.offset_y =
            -(self.canvas.height as f64 * self.state.zoom) / 2.0 + image_h / 2.0;
        self.enforce_bounds();
    }

    /// Put the image midpoint under the canvas midpoint at the current zoom.
    pub fn center_on_canvas(&mut self) {
        self.center_x();
        self.center_y();
    }

    /// Fit, then center.
    pub fn reset_orientation(&mut self) {
        self.fit_to_canvas();
        self.center_on_canvas();
    }

    fn image_size(&self) -> Option<(f64, f64)> {
        self.image()
            .map(|image| (image.width() as f64, image.height() as f64))
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        let floor = self.config.min_zoom.max(f64::MIN_POSITIVE);
        if zoom.is_nan() {
            return floor;
        }
        zoom.max(floor)
    }

    /// With `clamp_to_bounds`, keep the sampled window inside the image, or
    /// the image inside the window when the window is the larger of the two.
    fn enforce_bounds(&mut self) {
        if !self.config.clamp_to_bounds {
            return;
        }
        let Some((image_w, image_h)) = self.image_size() else {
            return;
        };
        let sample = self.state.sample_rect(self.canvas);
        self.state.offset_x = clamp_axis(self.state.offset_x, image_w, sample.width);
        self.state.offset_y = clamp_axis(self.state.offset_y, image_h, sample.height);
    }
}

fn clamp_axis(offset: f64, image_extent: f64, sample_extent: f64) -> f64 {
    let slack = image_extent - sample_extent;
    offset.clamp(slack.min(0.0), slack.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    const EPS: f64 = 1e-9;

    fn loaded(image_w: u32, image_h: u32, canvas_w: u32, canvas_h: u32) -> ViewportController<RgbaImage> {
        loaded_with(image_w, image_h, canvas_w, canvas_h, ViewportConfig::default())
    }

    fn loaded_with(
        image_w: u32,
        image_h: u32,
        canvas_w: u32,
        canvas_h: u32,
        config: ViewportConfig,
    ) -> ViewportController<RgbaImage> {
        let mut controller = ViewportController::new(CanvasSize::new(canvas_w, canvas_h), config);
        controller.set_source(LoadState::Loaded(
            SourceImage::new(RgbaImage::new(image_w, image_h)).unwrap(),
        ));
        controller
    }

    fn sample_center(controller: &ViewportController<RgbaImage>) -> (f64, f64) {
        let rect = controller.state().sample_rect(controller.canvas());
        (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    // ============================================================================
    // Load gating
    // ============================================================================

    #[test]
    fn initialize_is_noop_while_pending() {
        let mut controller: ViewportController<RgbaImage> =
            ViewportController::new(CanvasSize::new(400, 400), ViewportConfig::default());

        assert!(controller.initialize().is_none());
        assert_eq!(controller.state(), ViewportState::default());
    }

    #[test]
    fn every_operation_is_noop_after_failed_load() {
        let mut controller: ViewportController<RgbaImage> =
            ViewportController::new(CanvasSize::new(400, 400), ViewportConfig::default());
        controller.set_source(LoadState::Failed("404".to_string()));

        controller.pan_by(10.0, 10.0);
        controller.zoom_by(50.0, 100.0);
        controller.fit_to_canvas();
        controller.center_on_canvas();

        assert!(controller.initialize().is_none());
        assert_eq!(controller.state(), ViewportState::default());
    }

    // ============================================================================
    // fit_to_canvas() / center_on_canvas()
    // ============================================================================

    #[test]
    fn landscape_canvas_fits_image_width() {
        let mut controller = loaded(800, 400, 400, 250);
        controller.fit_to_canvas();
        assert_eq!(controller.state().zoom(), 2.0);
    }

    #[test]
    fn portrait_canvas_fits_image_height() {
        let mut controller = loaded(800, 400, 250, 400);
        controller.fit_to_canvas();
        assert_eq!(controller.state().zoom(), 1.0);
    }

    #[test]
    fn square_canvas_uses_height_fit() {
        let mut controller = loaded(800, 400, 400, 400);
        controller.fit_to_canvas();
        assert_eq!(controller.state().zoom(), 1.0);
    }

    #[test]
    fn fit_then_center_worked_example() {
        // Square 400×400 canvas over an 800×400 image.
        let mut controller = loaded(800, 400, 400, 400);
        controller.fit_to_canvas();
        controller.center_on_canvas();

        let state = controller.state();
        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.offset_x(), 200.0);
        assert_eq!(state.offset_y(), 0.0);
    }

    #[test]
    fn center_only_moves_requested_axis() {
        let mut controller = loaded(800, 400, 400, 400);
        controller.pan_by(-30.0, -40.0);
        let before = controller.state();

        controller.center_x();
        assert_eq!(controller.state().offset_y(), before.offset_y());
        assert_eq!(controller.state().offset_x(), -(400.0 * 1.0) / 2.0 + 400.0);
    }

    #[test]
    fn fit_on_empty_canvas_keeps_zoom() {
        let mut controller = loaded(800, 400, 0, 400);
        controller.fit_to_canvas();
        assert_eq!(controller.state().zoom(), 1.0);
    }

    #[test]
    fn initialize_fits_and_centers() {
        let mut controller = loaded(400, 400, 400, 400);
        let state = controller.initialize().unwrap();
        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.offset_x(), 0.0);
        assert_eq!(state.offset_y(), 0.0);
    }

    // ============================================================================
    // pan_by()
    // ============================================================================

    #[test]
    fn pan_is_scaled_by_zoom() {
        let mut controller = loaded(800, 400, 400, 250);
        controller.fit_to_canvas(); // zoom 2
        controller.pan_by(10.0, -5.0);

        assert_eq!(controller.state().offset_x(), -20.0);
        assert_eq!(controller.state().offset_y(), 10.0);
    }

    #[test]
    fn unclamped_pan_may_leave_image() {
        let mut controller = loaded(100, 100, 100, 100);
        controller.pan_by(1000.0, 1000.0);
        assert_eq!(controller.state().offset_x(), -1000.0);
        assert_eq!(controller.state().offset_y(), -1000.0);
    }

    #[test]
    fn pan_ignores_non_finite_delta() {
        let mut controller = loaded(100, 100, 100, 100);
        controller.pan_by(f64::NAN, 1.0);
        assert_eq!(controller.state(), ViewportState::default());
    }

    // ============================================================================
    // zoom_by()
    // ============================================================================

    #[test]
    fn zoom_subtracts_amount_over_strength() {
        let mut controller = loaded(400, 400, 400, 400);
        controller.zoom_by(50.0, 100.0);
        assert!((controller.state().zoom() - 0.5).abs() < EPS);
    }

    #[test]
    fn zoom_keeps_canvas_center_anchored() {
        let mut controller = loaded(800, 600, 400, 250);
        controller.initialize();
        let before = sample_center(&controller);

        controller.zoom_by(30.0, 100.0);
        let after = sample_center(&controller);

        assert!((before.0 - after.0).abs() < EPS);
        assert!((before.1 - after.1).abs() < EPS);
    }

    #[test]
    fn zoom_never_reaches_zero() {
        let mut controller = loaded(400, 400, 400, 400);
        controller.zoom_by(100.0, 100.0); // would be exactly 0
        assert_eq!(controller.state().zoom(), controller.config().min_zoom);

        controller.zoom_by(1000.0, 1.0); // would be very negative
        assert!(controller.state().zoom() > 0.0);
    }

    #[test]
    fn clamped_zoom_still_anchors_center() {
        let mut controller = loaded(400, 400, 400, 400);
        let before = sample_center(&controller);
        controller.zoom_by(500.0, 100.0);
        let after = sample_center(&controller);

        assert!((before.0 - after.0).abs() < EPS);
        assert!((before.1 - after.1).abs() < EPS);
    }

    #[test]
    fn non_positive_min_zoom_falls_back_to_default() {
        for min_zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ViewportConfig {
                min_zoom,
                ..ViewportConfig::default()
            };
            let controller: ViewportController<RgbaImage> =
                ViewportController::new(CanvasSize::new(400, 400), config);
            assert_eq!(controller.config().min_zoom, DEFAULT_MIN_ZOOM);
        }
    }

    #[test]
    fn overflowing_zoom_is_rejected() {
        let mut controller = loaded(400, 400, 400, 400);
        controller.zoom_by(-f64::MAX, 0.5);
        assert_eq!(controller.state(), ViewportState::default());

        controller.zoom_by(1.0, 100.0);
        let state = controller.state();
        assert!(state.zoom().is_finite());
        assert!(state.offset_x().is_finite() && state.offset_y().is_finite());
    }

    #[test]
    fn zoom_with_zero_strength_is_rejected() {
        let mut controller = loaded(400, 400, 400, 400);
        controller.zoom_by(10.0, 0.0);
        assert_eq!(controller.state(), ViewportState::default());
    }

    // ============================================================================
    // clamp_to_bounds
    // ============================================================================

    #[test]
    fn clamped_pan_keeps_window_inside_image() {
        let config = ViewportConfig {
            clamp_to_bounds: true,
            ..ViewportConfig::default()
        };
        let mut controller = loaded_with(800, 800, 400, 400, config);
        controller.initialize(); // zoom 2, window covers whole image

        controller.zoom_by(100.0, 100.0); // zoom 1, window 400×400
        controller.pan_by(-1000.0, -1000.0);

        let state = controller.state();
        assert_eq!(state.offset_x(), 400.0);
        assert_eq!(state.offset_y(), 400.0);

        controller.pan_by(1000.0, 1000.0);
        assert_eq!(controller.state().offset_x(), 0.0);
        assert_eq!(controller.state().offset_y(), 0.0);
    }

    #[test]
    fn clamped_window_larger_than_image_keeps_image_inside() {
        let config = ViewportConfig {
            clamp_to_bounds: true,
            ..ViewportConfig::default()
        };
        let mut controller = loaded_with(100, 100, 400, 400, config);
        controller.pan_by(-1000.0, 1000.0);

        // Window is 400 wide, image 100: offset stays within [-300, 0].
        assert_eq!(controller.state().offset_x(), 0.0);
        assert_eq!(controller.state().offset_y(), -300.0);
    }

    #[test]
    fn clamp_axis_bounds() {
        assert_eq!(clamp_axis(-5.0, 100.0, 50.0), 0.0);
        assert_eq!(clamp_axis(70.0, 100.0, 50.0), 50.0);
        assert_eq!(clamp_axis(-400.0, 100.0, 300.0), -200.0);
        assert_eq!(clamp_axis(-100.0, 100.0, 300.0), -100.0);
    }
}
