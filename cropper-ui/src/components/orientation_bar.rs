use cropper_core::Orientation;
use leptos::*;

#[component]
pub fn OrientationBar(
    selected: Signal<Orientation>,
    /// Receives the preset name, e.g. `"wide"`
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {Orientation::ALL
                .into_iter()
                .map(|orientation| {
                    view! {
                        <button
                            class=move || {
                                if selected.get() == orientation {
                                    "px-3 py-1 rounded bg-white text-black"
                                } else {
                                    "px-3 py-1 rounded bg-white/10 text-white hover:bg-white/20"
                                }
                            }
                            title=format!(
                                "{}×{}",
                                orientation.canvas_size().width,
                                orientation.canvas_size().height
                            )
                            on:click=move |_| on_select.call(orientation.id().to_string())
                        >
                            {orientation.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
