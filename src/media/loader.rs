/// Image loader
///
/// Resolves an `ImageRef` to decoded RGBA pixels ready for iced. Network
/// and file reads are async; decoding is CPU-bound and runs on tokio's
/// blocking pool.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use thiserror::Error;
use tokio::task;

use crate::state::{ImageRef, ImageSource};

/// Why an image could not be shown.
///
/// Carries strings so the error can travel inside a `Message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("failed to read file: {0}")]
    Io(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("task join error: {0}")]
    Join(String),
}

/// Decoded image ready to render
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Load and decode one image
///
/// # Arguments
/// * `image` - URL or file path of the image
/// * `max_dimension` - Larger images are downscaled to fit in this square
pub async fn load_image(image: ImageRef, max_dimension: u32) -> Result<LoadedImage, LoadError> {
    let bytes = match image.source() {
        ImageSource::Remote(url) => fetch(url).await?,
        ImageSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?,
    };

    // Spawn blocking because decoding and resizing are CPU-intensive
    task::spawn_blocking(move || decode(&bytes, max_dimension))
        .await
        .map_err(|e| LoadError::Join(e.to_string()))?
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| LoadError::Http(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;

    tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}

/// Decode encoded image bytes into an RGBA handle
pub fn decode(bytes: &[u8], max_dimension: u32) -> Result<LoadedImage, LoadError> {
    let mut img =
        image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    if img.width() > max_dimension || img.height() > max_dimension {
        img = img.resize(max_dimension, max_dimension, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
