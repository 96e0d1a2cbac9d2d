//! Asynchronous source image loading.

use crate::rendering::ImageElementBitmap;
use cropper_core::{Bitmap, LoadState};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// What the page shows about the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready { width: u32, height: u32 },
    Failed(String),
}

impl LoadStatus {
    pub fn from_state<B: Bitmap>(state: &LoadState<B>) -> Self {
        match state {
            LoadState::Pending => LoadStatus::Loading,
            LoadState::Loaded(image) => LoadStatus::Ready {
                width: image.width(),
                height: image.height(),
            },
            LoadState::Failed(reason) => LoadStatus::Failed(reason.clone()),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            LoadStatus::Loading => Some("Loading image…".to_string()),
            LoadStatus::Ready { .. } => None,
            LoadStatus::Failed(reason) => Some(format!("Could not load image: {}", reason)),
        }
    }
}

/// Load `src` into an `<img>` element.
///
/// Resolves once the browser fires `load` or `error`; never resolves to
/// `Pending`.
pub async fn load_image(src: &str) -> LoadState<ImageElementBitmap> {
    log::debug!("Loading image '{}'", src);
    LoadState::from_result(fetch_image(src).await)
}

async fn fetch_image(src: &str) -> Result<ImageElementBitmap, String> {
    let image = HtmlImageElement::new().map_err(|e| format!("{:?}", e))?;

    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = Rc::clone(&sender);
        Closure::once(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Ok(()));
            }
        })
    };
    let on_error = {
        let sender = Rc::clone(&sender);
        let src = src.to_string();
        Closure::once(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Err(format!("'{}' could not be fetched or decoded", src)));
            }
        })
    };

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(src);

    let outcome = receiver
        .await
        .unwrap_or_else(|_| Err("image load was cancelled".to_string()));

    // Detach before the closures drop at the end of this scope.
    image.set_onload(None);
    image.set_onerror(None);

    outcome.map(|()| ImageElementBitmap::new(image))
}
