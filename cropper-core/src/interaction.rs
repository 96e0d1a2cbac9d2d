//! Pointer interaction as a pure state machine.
//!
//! The host forwards raw pointer events as [`PointerInput`]s; [`transition`]
//! returns the next [`DragState`] plus the [`Command`]s to execute. Nothing in
//! here touches the viewport or the canvas, which keeps drag behavior testable
//! without a pointer device.

/// Pointer events in client pixel space, assumed 1:1 with canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    /// The browser took the pointer away (e.g. a system gesture).
    Cancel,
    /// Mouse wheel; positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },
}

/// Side effects requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Pan by a canvas-pixel delta.
    PanBy { dx: f64, dy: f64 },
    /// Zoom by `amount` at the configured strength.
    ZoomBy { amount: f64 },
    Redraw,
}

/// Drag gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is held; `last_*` is where the previous event happened.
    Dragging { last_x: f64, last_y: f64 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Advance the drag state machine.
///
/// `wheel_sensitivity` converts wheel `delta_y` into a zoom amount. Scrolling
/// down produces a negative amount, which zooms out.
pub fn transition(
    state: DragState,
    input: PointerInput,
    wheel_sensitivity: f64,
) -> (DragState, Vec<Command>) {
    match (state, input) {
        // A second press without a release re-anchors rather than jumping.
        (_, PointerInput::Down { x, y }) => (DragState::Dragging { last_x: x, last_y: y }, vec![]),
        (DragState::Dragging { last_x, last_y }, PointerInput::Move { x, y }) => {
            let dx = x - last_x;
            let dy = y - last_y;
            (
                DragState::Dragging { last_x: x, last_y: y },
                vec![Command::PanBy { dx, dy }, Command::Redraw],
            )
        }
        (DragState::Idle, PointerInput::Move { .. }) => (DragState::Idle, vec![]),
        (_, PointerInput::Up | PointerInput::Cancel) => (DragState::Idle, vec![]),
        (state, PointerInput::Wheel { delta_y }) => {
            if delta_y == 0.0 || !delta_y.is_finite() {
                return (state, vec![]);
            }
            let amount = -delta_y * wheel_sensitivity;
            (state, vec![Command::ZoomBy { amount }, Command::Redraw])
        }
    }
}
