use crate::components::{
    with_cropper, CropperCanvas, CropperHandle, OrientationBar, Preview, ZoomControls,
};
use crate::config::load_config;
use crate::hooks::LoadStatus;
use cropper_core::{CanvasSize, Orientation};
use leptos::*;

/// Inline size for the box wrapping the canvas.
pub fn container_style(size: CanvasSize) -> String {
    format!("width: {}px; height: {}px;", size.width, size.height)
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let initial_orientation = config.initial_orientation;

    let cropper: CropperHandle = store_value(None);

    let (canvas_size, set_canvas_size) = create_signal(initial_orientation.canvas_size());
    let (orientation, set_orientation) = create_signal(initial_orientation);
    let (load_status, set_load_status) = create_signal(LoadStatus::Loading);
    let (last_error, set_last_error) = create_signal(None::<String>);
    let (preview_src, set_preview_src) = create_signal(None::<String>);

    let on_error = Callback::new(move |message: String| set_last_error.set(Some(message)));

    // ========== Orientation ==========
    let on_orientation_select = Callback::new(move |name: String| {
        let resized = with_cropper(cropper, on_error, |c| c.set_orientation(&name)).flatten();
        if let Some(size) = resized {
            if let Ok(preset) = name.parse::<Orientation>() {
                set_orientation.set(preset);
            }
            set_canvas_size.set(size);
        }
    });

    // ========== Zoom ==========
    let on_zoom_in = Callback::new(move |_: ()| {
        with_cropper(cropper, on_error, |c| c.zoom_in());
    });
    let on_zoom_out = Callback::new(move |_: ()| {
        with_cropper(cropper, on_error, |c| c.zoom_out());
    });
    let on_reset = Callback::new(move |_: ()| {
        with_cropper(cropper, on_error, |c| c.reset_orientation());
    });

    // ========== Export ==========
    let on_save = Callback::new(move |_: ()| {
        if let Some(uri) = with_cropper(cropper, on_error, |c| c.export()) {
            log::info!("Exported crop ({} bytes)", uri.len());
            set_last_error.set(None);
            set_preview_src.set(Some(uri));
        }
    });
    let on_clear = Callback::new(move |_: ()| set_preview_src.set(None));

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 p-4 bg-neutral-900 text-white">
            <div class="flex gap-4">
                <OrientationBar
                    selected=orientation.into()
                    on_select=on_orientation_select
                />
                <ZoomControls
                    on_zoom_in=on_zoom_in
                    on_zoom_out=on_zoom_out
                    on_reset=on_reset
                />
            </div>
            <div class="relative overflow-hidden" style=move || container_style(canvas_size.get())>
                <CropperCanvas
                    cropper=cropper
                    config=config
                    on_bind=Callback::new(move |size: CanvasSize| set_canvas_size.set(size))
                    on_load=Callback::new(move |status: LoadStatus| set_load_status.set(status))
                    on_error=on_error
                />
            </div>
            {move || load_status.get().message().map(|message| view! {
                <p class="text-sm text-neutral-300">{message}</p>
            })}
            {move || last_error.get().map(|message| view! {
                <p class="text-sm text-red-400">{message}</p>
            })}
            <Preview
                src=preview_src.into()
                on_save=on_save
                on_clear=on_clear
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_matches_preset_size() {
        assert_eq!(
            container_style(Orientation::Wide.canvas_size()),
            "width: 400px; height: 250px;"
        );
        assert_eq!(
            container_style(Orientation::High.canvas_size()),
            "width: 250px; height: 400px;"
        );
    }
}
