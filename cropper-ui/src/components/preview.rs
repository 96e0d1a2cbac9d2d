//! Exported crop preview.

use leptos::*;

pub const DOWNLOAD_FILE_NAME: &str = "crop.png";

#[component]
pub fn Preview(
    /// Data URI of the last export, `None` when cleared
    src: Signal<Option<String>>,
    on_save: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let button_class = "px-3 py-1 rounded bg-white/10 text-white hover:bg-white/20";

    view! {
        <div class="flex flex-col items-center gap-2">
            <div class="flex gap-2">
                <button class=button_class on:click=move |_| on_save.call(())>"Save"</button>
                <button class=button_class on:click=move |_| on_clear.call(())>"Clear preview"</button>
            </div>
            {move || {
                src.get()
                    .map(|uri| {
                        view! {
                            <img id="preview" class="border border-white/20" src=uri.clone() alt="Cropped preview"/>
                            <a class="text-sm underline" href=uri download=DOWNLOAD_FILE_NAME>
                                "Download"
                            </a>
                        }
                    })
            }}
        </div>
    }
}
