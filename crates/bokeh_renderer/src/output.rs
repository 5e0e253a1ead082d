//! Hands tone-mapped pixels to the `image` encoder.

use image::RgbImage;
use log::info;
use std::path::Path;
use thiserror::Error;

/// Default destination of the rendered image.
pub const DEFAULT_OUTPUT_PATH: &str = "final_image.jpeg";

/// Errors that can occur while writing the rendered image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Pixel buffer holds {len} bytes, expected {width}x{height} RGB")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Encode packed 8-bit RGB rows and write them to `path`.
///
/// The encoder is picked from the file extension (`.jpeg`, `.png`, ...).
pub fn save_rgb8(width: u32, height: u32, rgb: Vec<u8>, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let len = rgb.len();
    let image = RgbImage::from_raw(width, height, rgb)
        .ok_or(OutputError::BufferSize { width, height, len })?;

    image.save(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}
