use leptos::*;

#[component]
pub fn ZoomControls(
    on_zoom_in: Callback<()>,
    on_zoom_out: Callback<()>,
    /// Fit and center the image again
    on_reset: Callback<()>,
) -> impl IntoView {
    let button_class = "px-3 py-1 rounded bg-white/10 text-white hover:bg-white/20";

    view! {
        <div class="flex gap-2">
            <button class=button_class title="Zoom out" on:click=move |_| on_zoom_out.call(())>
                "−"
            </button>
            <button class=button_class title="Zoom in" on:click=move |_| on_zoom_in.call(())>
                "+"
            </button>
            <button class=button_class title="Fit image to canvas" on:click=move |_| on_reset.call(())>
                "Fit"
            </button>
        </div>
    }
}
