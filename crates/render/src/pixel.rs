//! Pure-computation pixel buffer conversion from a [`Raster`].
//!
//! This module is always available (no feature gate) so that callers without
//! the `png` snapshot path can still produce byte buffers for other sinks.

use flowlic_core::raster::Raster;

/// Flattens a raster into an RGBA8 pixel buffer.
///
/// Each pixel is written as four bytes (R, G, B, 255) in row-major order.
/// The buffer length is `width * height * 4`.
pub fn raster_to_rgba(raster: &Raster) -> Vec<u8> {
    raster
        .data()
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, 255u8])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlic_core::Rgb;

    #[test]
    fn raster_to_rgba_correct_length() {
        let raster = Raster::new(8, 4).unwrap();
        let buf = raster_to_rgba(&raster);
        assert_eq!(buf.len(), 8 * 4 * 4);
    }

    #[test]
    fn raster_to_rgba_alpha_always_255() {
        let raster = Raster::from_data(4, 4, vec![Rgb::gray(77); 16]).unwrap();
        let buf = raster_to_rgba(&raster);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn raster_to_rgba_preserves_channel_order() {
        let raster = Raster::from_data(
            2,
            1,
            vec![Rgb { r: 10, g: 20, b: 30 }, Rgb { r: 40, g: 50, b: 60 }],
        )
        .unwrap();
        let buf = raster_to_rgba(&raster);
        assert_eq!(buf, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }
}
