//! Source image and its asynchronous load state.

use crate::error::{CropperError, Result};
use image::RgbaImage;

/// A decoded bitmap the host can draw from.
pub trait Bitmap {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
}

impl Bitmap for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        image::ImageBuffer::dimensions(self)
    }
}

/// A loaded, immutable source image.
#[derive(Clone, Debug)]
pub struct SourceImage<B> {
    bitmap: B,
    width: u32,
    height: u32,
}

impl<B: Bitmap> SourceImage<B> {
    /// Wrap a decoded bitmap. Zero-sized bitmaps are rejected since every
    /// viewport formula divides by an image dimension.
    pub fn new(bitmap: B) -> Result<Self> {
        let (width, height) = bitmap.dimensions();
        if width == 0 || height == 0 {
            return Err(CropperError::EmptyImage);
        }
        Ok(Self {
            bitmap,
            width,
            height,
        })
    }

    pub fn bitmap(&self) -> &B {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Where the image load currently stands.
#[derive(Clone, Debug)]
pub enum LoadState<B> {
    Pending,
    Loaded(SourceImage<B>),
    Failed(String),
}

impl<B> Default for LoadState<B> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl<B: Bitmap> LoadState<B> {
    /// Build a load state from a loader result.
    pub fn from_result<E: std::fmt::Display>(result: std::result::Result<B, E>) -> Self {
        match result {
            Ok(bitmap) => match SourceImage::new(bitmap) {
                Ok(image) => LoadState::Loaded(image),
                Err(e) => LoadState::Failed(e.to_string()),
            },
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn image(&self) -> Option<&SourceImage<B>> {
        match self {
            LoadState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}
