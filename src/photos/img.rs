use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("unrecognized image format")]
    UnknownFormat,
    #[error("unsupported image format {0:?}, only JPEG and PNG are accepted")]
    UnsupportedFormat(ImageFormat),
    #[error("failed to process the image: {0}")]
    Processing(#[from] image::ImageError),
    #[error("image processing task was aborted")]
    Aborted,
}

/// Sniffs the format from the leading bytes. Only JPEG and PNG are accepted, everything else
/// (HEIC included) has to be converted on the client first.
pub fn supported_format(image_bytes: &[u8]) -> Result<ImageFormat, ImageError> {
    let format = image::guess_format(image_bytes).map_err(|_| ImageError::UnknownFormat)?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png => Ok(format),
        other => Err(ImageError::UnsupportedFormat(other)),
    }
}

/// Downscales the image to fit into `width`x`height` and re-encodes it as PNG.
pub fn preview(image_bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    let image = ImageReader::new(Cursor::new(image_bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;

    let resized_image = image.resize(width, height, FilterType::Lanczos3);

    // For a rough estimate, assume 4 bytes per pixel (RGBA) for a PNG image.
    let estimated_size = (width as usize) * (height as usize) * 4;
    let mut resized_image_bytes_buffer = Cursor::new(Vec::with_capacity(estimated_size));
    resized_image.write_to(&mut resized_image_bytes_buffer, ImageFormat::Png)?;

    Ok(resized_image_bytes_buffer.into_inner())
}
