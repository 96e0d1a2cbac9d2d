use crate::hooks::{load_image, LoadStatus};
use crate::rendering::HtmlCanvasSurface;
use cropper_core::error::Result;
use cropper_core::{CanvasSize, Cropper, CropperConfig, PointerInput};
use leptos::*;
use leptos_use::{use_event_listener_with_options, UseEventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, PointerEvent, WheelEvent};

/// Pixels per line for `deltaMode == DOM_DELTA_LINE` wheels.
const LINE_HEIGHT_PX: f64 = 16.0;

pub type CanvasCropper = Cropper<HtmlCanvasSurface>;

/// Shared slot for the page's cropper. Empty until the canvas has mounted.
pub type CropperHandle = StoredValue<Option<CanvasCropper>>;

/// Run `op` against the mounted cropper.
///
/// Returns `None` before the canvas has mounted or when the operation fails;
/// failures are logged and handed to `on_error`.
pub fn with_cropper<T>(
    cropper: CropperHandle,
    on_error: Callback<String>,
    op: impl FnOnce(&mut CanvasCropper) -> Result<T>,
) -> Option<T> {
    let outcome = cropper.try_update_value(|slot| slot.as_mut().map(op)).flatten()?;
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Cropper operation failed: {}", e);
            on_error.call(e.to_string());
            None
        }
    }
}

/// Convert a wheel delta to pixels whatever unit the browser reported it in.
pub fn wheel_delta_pixels(delta_y: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        WheelEvent::DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        WheelEvent::DOM_DELTA_PAGE => delta_y * page_height,
        _ => delta_y,
    }
}

/// Route all events for `pointer_id` to `element`. Returns whether the
/// browser accepted the capture.
pub fn capture_pointer(element: &Element, pointer_id: i32) -> bool {
    match element.set_pointer_capture(pointer_id) {
        Ok(()) => true,
        Err(e) => {
            log::debug!(
                "Pointer capture failed, a release outside the canvas may be missed: {:?}",
                e
            );
            false
        }
    }
}

#[component]
pub fn CropperCanvas(
    cropper: CropperHandle,
    config: CropperConfig,
    /// Fired when the cropper binds to the canvas, with the initial size
    on_bind: Callback<CanvasSize>,
    /// Fired when the source image settles
    on_load: Callback<LoadStatus>,
    on_error: Callback<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();
    let config = store_value(config);

    // Bind the cropper once the element exists, then start loading.
    create_effect(move |bound: Option<bool>| {
        if bound == Some(true) {
            return true;
        }
        let Some(canvas_el) = canvas_ref.get() else {
            return false;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();

        let surface = match HtmlCanvasSurface::new(canvas) {
            Ok(surface) => surface,
            Err(e) => {
                let message = format!("Canvas unavailable: {:?}", e);
                log::error!("{}", message);
                on_error.call(message);
                return true;
            }
        };

        let config = config.get_value();
        let src = config.image_src.clone();
        let instance = Cropper::new(surface, config);
        on_bind.call(instance.canvas_size());
        cropper.set_value(Some(instance));

        spawn_local(async move {
            let state = load_image(&src).await;
            let status = LoadStatus::from_state(&state);
            with_cropper(cropper, on_error, |c| c.finish_load(state));
            on_load.call(status);
        });

        true
    });

    let dispatch = move |input: PointerInput| {
        with_cropper(cropper, on_error, |c| c.handle_pointer(input));
    };

    let on_pointer_down = move |ev: PointerEvent| {
        ev.prevent_default();
        if let Some(canvas) = canvas_ref.get_untracked() {
            // Keep receiving moves and the release when the pointer leaves the canvas.
            capture_pointer(&canvas, ev.pointer_id());
        }
        dispatch(PointerInput::Down {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        });
    };

    let on_pointer_move = move |ev: PointerEvent| {
        dispatch(PointerInput::Move {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        });
    };

    // Passive listeners cannot stop the page from scrolling.
    let _ = use_event_listener_with_options(
        canvas_ref,
        ev::wheel,
        move |ev: WheelEvent| {
            ev.prevent_default();
            let page_height = canvas_ref
                .get_untracked()
                .map(|canvas| canvas.height() as f64)
                .unwrap_or(0.0);
            dispatch(PointerInput::Wheel {
                delta_y: wheel_delta_pixels(ev.delta_y(), ev.delta_mode(), page_height),
            });
        },
        UseEventListenerOptions::default().passive(false),
    );

    view! {
        <canvas
            node_ref=canvas_ref
            class="block cursor-move touch-none"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=move |_| dispatch(PointerInput::Up)
            on:pointercancel=move |_| dispatch(PointerInput::Cancel)
        />
    }
}
