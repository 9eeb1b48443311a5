//! CPU-side PNG output of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so that embedders can depend on
//! this crate without pulling in the `image` crate. The pixel buffer
//! conversion itself lives in [`crate::pixel`] (always available).

use flowlic_core::error::LicError;
use flowlic_core::raster::Raster;
use std::path::Path;

use crate::pixel::raster_to_rgba;

/// Writes a raster as a PNG image.
///
/// Returns `LicError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `LicError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), LicError> {
    let rgba = raster_to_rgba(raster);
    let w = u32::try_from(raster.width()).map_err(|_| LicError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| LicError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| LicError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| LicError::Io(e.to_string()))
}
