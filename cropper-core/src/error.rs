//! Cropper error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropperError {
    #[error("Image has zero width or height")]
    EmptyImage,

    #[error("Drawing surface error: {0}")]
    Surface(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CropperError>;
