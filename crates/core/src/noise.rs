//! Margin-padded input noise texture.
//!
//! A [`NoiseGrid`] stores one intensity sample (0–255) per pixel of the
//! visible region plus a margin band on every side, so streamline walks that
//! leave the visible region keep reading valid noise. It is generated (or
//! injected) once and immutable thereafter.

use crate::error::LicError;
use crate::prng::Xorshift64;
use crate::raster::Raster;
use crate::Rgb;

/// Immutable noise texture of size `(width + 2*margin) x (height + 2*margin)`.
#[derive(Debug, Clone)]
pub struct NoiseGrid {
    width: usize,
    height: usize,
    margin: usize,
    stride: usize,
    data: Vec<u8>,
}

impl NoiseGrid {
    fn padded_len(width: usize, height: usize, margin: usize) -> Result<(usize, usize), LicError> {
        if width == 0 || height == 0 {
            return Err(LicError::InvalidDimensions);
        }
        let stride = margin
            .checked_mul(2)
            .and_then(|m2| width.checked_add(m2))
            .ok_or(LicError::InvalidDimensions)?;
        let rows = margin
            .checked_mul(2)
            .and_then(|m2| height.checked_add(m2))
            .ok_or(LicError::InvalidDimensions)?;
        let len = stride
            .checked_mul(rows)
            .ok_or(LicError::InvalidDimensions)?;
        Ok((stride, len))
    }

    /// Generates a uniform random texture from a seeded PRNG.
    ///
    /// Returns `LicError::InvalidDimensions` for zero dimensions or sizes
    /// that overflow `usize`.
    pub fn generate(
        width: usize,
        height: usize,
        margin: usize,
        seed: u64,
    ) -> Result<Self, LicError> {
        let (stride, len) = Self::padded_len(width, height, margin)?;
        let mut rng = Xorshift64::new(seed);
        let data = (0..len).map(|_| rng.next_byte()).collect();
        Ok(Self {
            width,
            height,
            margin,
            stride,
            data,
        })
    }

    /// Wraps a caller-provided sample buffer (row-major, margin included).
    ///
    /// Returns `LicError::BufferSizeMismatch` if `data.len()` is not
    /// `(width + 2*margin) * (height + 2*margin)`.
    pub fn from_samples(
        width: usize,
        height: usize,
        margin: usize,
        data: Vec<u8>,
    ) -> Result<Self, LicError> {
        let (stride, len) = Self::padded_len(width, height, margin)?;
        if data.len() != len {
            return Err(LicError::BufferSizeMismatch {
                expected: len,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            margin,
            stride,
            data,
        })
    }

    /// Visible grid width in pixels (margin excluded).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible grid height in pixels (margin excluded).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Margin band width in pixels.
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Intensity at a visible-grid coordinate; the margin band extends the
    /// valid range to `-margin..width+margin` (and likewise for rows).
    ///
    /// Returns `None` outside the padded buffer — escaping the band means
    /// the margin/budget invariant was violated upstream.
    pub fn get(&self, row: i64, col: i64) -> Option<u8> {
        let r = row + self.margin as i64;
        let c = col + self.margin as i64;
        let rows = (self.height + 2 * self.margin) as i64;
        let cols = self.stride as i64;
        if r < 0 || r >= rows || c < 0 || c >= cols {
            return None;
        }
        Some(self.data[r as usize * self.stride + c as usize])
    }

    /// Renders the visible region as a grayscale color grid, the
    /// noise-visualization output surface.
    pub fn visible(&self) -> Raster {
        let mut data = Vec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            let start = (row + self.margin) * self.stride + self.margin;
            data.extend(
                self.data[start..start + self.width]
                    .iter()
                    .map(|&v| Rgb::gray(v)),
            );
        }
        Raster::from_data(self.width, self.height, data)
            .expect("visible region dimensions are consistent by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_rejects_zero_dimensions() {
        assert!(matches!(
            NoiseGrid::generate(0, 4, 2, 1),
            Err(LicError::InvalidDimensions)
        ));
        assert!(matches!(
            NoiseGrid::generate(4, 0, 2, 1),
            Err(LicError::InvalidDimensions)
        ));
    }

    #[test]
    fn generate_rejects_overflowing_dimensions() {
        assert!(NoiseGrid::generate(usize::MAX, 2, 1, 1).is_err());
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        let a = NoiseGrid::generate(8, 6, 3, 99).unwrap();
        let b = NoiseGrid::generate(8, 6, 3, 99).unwrap();
        for row in -3..9 {
            for col in -3..11 {
                assert_eq!(a.get(row, col), b.get(row, col), "at ({row}, {col})");
            }
        }
    }

    #[test]
    fn different_seeds_produce_different_textures() {
        let a = NoiseGrid::generate(16, 16, 0, 1).unwrap();
        let b = NoiseGrid::generate(16, 16, 0, 2).unwrap();
        let same = (0..16)
            .flat_map(|r| (0..16).map(move |c| (r, c)))
            .filter(|&(r, c)| a.get(r, c) == b.get(r, c))
            .count();
        assert!(same < 256, "textures are identical across seeds");
    }

    #[test]
    fn get_covers_the_margin_band() {
        let grid = NoiseGrid::generate(4, 4, 2, 7).unwrap();
        assert!(grid.get(-2, -2).is_some());
        assert!(grid.get(5, 5).is_some());
    }

    #[test]
    fn get_outside_the_band_returns_none() {
        let grid = NoiseGrid::generate(4, 4, 2, 7).unwrap();
        assert!(grid.get(-3, 0).is_none());
        assert!(grid.get(0, -3).is_none());
        assert!(grid.get(6, 0).is_none());
        assert!(grid.get(0, 6).is_none());
    }

    #[test]
    fn from_samples_round_trips_values() {
        // 2x2 visible with margin 1: 4x4 padded buffer.
        let data: Vec<u8> = (0..16).collect();
        let grid = NoiseGrid::from_samples(2, 2, 1, data).unwrap();
        // Visible (0, 0) is padded (1, 1) = index 5.
        assert_eq!(grid.get(0, 0), Some(5));
        assert_eq!(grid.get(1, 1), Some(10));
        // Margin corner (-1, -1) is padded (0, 0).
        assert_eq!(grid.get(-1, -1), Some(0));
    }

    #[test]
    fn from_samples_rejects_wrong_length() {
        let result = NoiseGrid::from_samples(2, 2, 1, vec![0; 15]);
        assert!(matches!(
            result,
            Err(LicError::BufferSizeMismatch {
                expected: 16,
                got: 15
            })
        ));
    }

    #[test]
    fn visible_is_the_grayscale_passthrough() {
        let data: Vec<u8> = (0..16).collect();
        let grid = NoiseGrid::from_samples(2, 2, 1, data).unwrap();
        let raster = grid.visible();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get(0, 0), Rgb::gray(5));
        assert_eq!(raster.get(0, 1), Rgb::gray(6));
        assert_eq!(raster.get(1, 0), Rgb::gray(9));
        assert_eq!(raster.get(1, 1), Rgb::gray(10));
    }

    #[test]
    fn zero_margin_is_valid() {
        let grid = NoiseGrid::generate(3, 3, 0, 1).unwrap();
        assert!(grid.get(0, 0).is_some());
        assert!(grid.get(-1, 0).is_none());
        assert!(grid.get(3, 0).is_none());
    }
}
