use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::foundation::error::{PxsvgError, PxsvgResult};

/// Open and decode an image file into straight RGBA8.
///
/// The format is sniffed from the file contents, so a misnamed extension still loads.
pub fn load_rgba(path: &Path) -> PxsvgResult<RgbaImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| PxsvgError::input(format!("open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| PxsvgError::input(format!("read '{}': {e}", path.display())))?;

    let dyn_img = reader
        .decode()
        .map_err(|e| PxsvgError::input(format!("decode '{}': {e}", path.display())))?;

    let rgba = dyn_img.to_rgba8();
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "decoded {}",
        path.display()
    );
    Ok(rgba)
}

pub fn decode_rgba(bytes: &[u8]) -> PxsvgResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PxsvgError::input(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}
