//! A single cropper instance: one surface, one image, one viewport.
//!
//! Hosts create as many independent instances as they need; nothing here is
//! global. Every operation runs to completion on the calling turn. The only
//! asynchronous step, loading the image, happens outside and is handed in
//! through [`Cropper::finish_load`].

use crate::config::CropperConfig;
use crate::error::Result;
use crate::export::export_data_uri;
use crate::image_source::LoadState;
use crate::interaction::{transition, Command, DragState, PointerInput};
use crate::orientation::Orientation;
use crate::renderer;
use crate::surface::{CanvasSize, Surface};
use crate::viewport::{ViewportController, ViewportState};

pub struct Cropper<S: Surface> {
    surface: S,
    viewport: ViewportController<S::Bitmap>,
    drag: DragState,
    config: CropperConfig,
}

impl<S: Surface> Cropper<S> {
    /// Bind a cropper to `surface`, sized to the configured initial orientation.
    pub fn new(mut surface: S, config: CropperConfig) -> Self {
        let canvas = config.initial_orientation.canvas_size();
        surface.resize(canvas);
        log::debug!(
            "Cropper created with {} canvas {}x{}",
            config.initial_orientation,
            canvas.width,
            canvas.height
        );

        Self {
            surface,
            viewport: ViewportController::new(canvas, config.viewport),
            drag: DragState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn viewport(&self) -> &ViewportController<S::Bitmap> {
        &self.viewport
    }

    pub fn state(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.viewport.canvas()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn load_state(&self) -> &LoadState<S::Bitmap> {
        self.viewport.source()
    }

    /// Record the outcome of the image load. A successful load fits, centers
    /// and paints the image; a failure is kept for the host to display.
    pub fn finish_load(&mut self, source: LoadState<S::Bitmap>) -> Result<()> {
        match &source {
            LoadState::Loaded(image) => {
                log::info!("Image loaded: {}x{}", image.width(), image.height())
            }
            LoadState::Failed(reason) => log::warn!("Image failed to load: {}", reason),
            LoadState::Pending => log::debug!("Image load restarted"),
        }

        self.viewport.set_source(source);
        if self.viewport.initialize().is_some() {
            self.redraw()?;
        }
        Ok(())
    }

    /// Feed one pointer event through the drag state machine and run the
    /// resulting commands.
    pub fn handle_pointer(&mut self, input: PointerInput) -> Result<()> {
        let (next, commands) = transition(self.drag, input, self.config.wheel_sensitivity);
        self.drag = next;
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::PanBy { dx, dy } => self.viewport.pan_by(dx, dy),
            Command::ZoomBy { amount } => self
                .viewport
                .zoom_by(amount, self.config.viewport.zoom_strength),
            Command::Redraw => self.redraw()?,
        }
        Ok(())
    }

    /// Zoom at the configured strength and repaint.
    pub fn zoom_by(&mut self, amount: f64) -> Result<()> {
        self.zoom_by_with_strength(amount, self.config.viewport.zoom_strength)
    }

    pub fn zoom_by_with_strength(&mut self, amount: f64, strength: f64) -> Result<()> {
        self.viewport.zoom_by(amount, strength);
        self.redraw()
    }

    pub fn zoom_in(&mut self) -> Result<()> {
        self.zoom_by(self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Result<()> {
        self.zoom_by(-self.config.zoom_step)
    }

    /// Fit, center and repaint.
    pub fn reset_orientation(&mut self) -> Result<()> {
        self.viewport.reset_orientation();
        self.redraw()
    }

    /// Switch to a named preset. Returns the new canvas size so the host can
    /// resize the surrounding layout box, or `None` for unknown names, which
    /// leave everything unchanged.
    pub fn set_orientation(&mut self, name: &str) -> Result<Option<CanvasSize>> {
        match name.parse::<Orientation>() {
            Ok(orientation) => self.apply_orientation(orientation).map(Some),
            Err(e) => {
                log::debug!("Ignoring orientation change: {}", e);
                Ok(None)
            }
        }
    }

    pub fn apply_orientation(&mut self, orientation: Orientation) -> Result<CanvasSize> {
        let size = orientation.canvas_size();
        self.surface.resize(size);
        self.viewport.set_canvas(size);
        self.viewport.fit_to_canvas();
        self.redraw()?;
        Ok(size)
    }

    /// Repaint from the current viewport. Does nothing until an image has loaded.
    pub fn redraw(&mut self) -> Result<()> {
        let Some(image) = self.viewport.image() else {
            log::trace!("Skipping redraw: no image loaded");
            return Ok(());
        };
        renderer::redraw(
            &mut self.surface,
            image,
            &self.viewport.state(),
            self.viewport.canvas(),
            self.config.background,
        )
    }

    /// Export the current canvas pixels as a download data URI.
    pub fn export(&self) -> Result<String> {
        let pixels = self.surface.read_pixels()?;
        export_data_uri(&pixels)
    }
}
