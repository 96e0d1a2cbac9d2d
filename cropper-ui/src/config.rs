//! Page-supplied cropper configuration.
//!
//! The host page may embed
//! `<script id="cropper-config" type="application/json">{ ... }</script>`;
//! anything it leaves out keeps its default.

use cropper_core::CropperConfig;

pub const CONFIG_ELEMENT_ID: &str = "cropper-config";

/// Read the page config, falling back to defaults when absent or invalid.
pub fn load_config() -> CropperConfig {
    match read_config_json() {
        Some(json) => parse_config(&json),
        None => {
            log::debug!("No #{} element, using default config", CONFIG_ELEMENT_ID);
            CropperConfig::default()
        }
    }
}

pub fn parse_config(json: &str) -> CropperConfig {
    match CropperConfig::from_json(json) {
        Ok(config) => {
            log::debug!("Loaded cropper config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid cropper config: {}", e);
            CropperConfig::default()
        }
    }
}

fn read_config_json() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
        element
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
