//! Row-major RGB output grid.
//!
//! The sole externally visible artifact of a render: a `width x height`
//! buffer of [`Rgb`] pixels, fully recomputed per run.

use crate::color::Rgb;
use crate::error::LicError;

/// A 2D grid of RGB colors in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl Raster {
    /// Creates a black-filled raster of the given dimensions.
    ///
    /// Returns `LicError::InvalidDimensions` if either dimension is zero or
    /// `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, LicError> {
        if width == 0 || height == 0 {
            return Err(LicError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(LicError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![Rgb::BLACK; len],
        })
    }

    /// Creates a raster from a pre-built pixel vector, validating its length.
    pub fn from_data(width: usize, height: usize, data: Vec<Rgb>) -> Result<Self, LicError> {
        if width == 0 || height == 0 {
            return Err(LicError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(LicError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(LicError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major pixels.
    pub fn data(&self) -> &[Rgb] {
        &self.data
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Rgb {
        assert!(row < self.height && col < self.width, "raster index out of bounds");
        self.data[row * self.width + col]
    }

    /// Iterates over all pixels yielding `(row, col, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.data.iter().enumerate().map(|(i, &c)| {
            (i / self.width, i % self.width, c)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_black_filled_raster() {
        let r = Raster::new(4, 3).unwrap();
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
        assert_eq!(r.data().len(), 12);
        assert!(r.data().iter().all(|&c| c == Rgb::BLACK));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Raster::new(0, 5).is_err());
        assert!(Raster::new(5, 0).is_err());
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert!(Raster::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn from_data_validates_length() {
        let ok = Raster::from_data(2, 2, vec![Rgb::WHITE; 4]);
        assert!(ok.is_ok());
        let short = Raster::from_data(2, 2, vec![Rgb::WHITE; 3]);
        assert!(matches!(
            short,
            Err(LicError::BufferSizeMismatch {
                expected: 4,
                got: 3
            })
        ));
    }

    #[test]
    fn get_uses_row_major_layout() {
        let data = vec![
            Rgb { r: 1, g: 0, b: 0 },
            Rgb { r: 2, g: 0, b: 0 },
            Rgb { r: 3, g: 0, b: 0 },
            Rgb { r: 4, g: 0, b: 0 },
            Rgb { r: 5, g: 0, b: 0 },
            Rgb { r: 6, g: 0, b: 0 },
        ];
        let raster = Raster::from_data(3, 2, data).unwrap();
        assert_eq!(raster.get(0, 2).r, 3);
        assert_eq!(raster.get(1, 0).r, 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_panics_out_of_bounds() {
        let raster = Raster::new(2, 2).unwrap();
        let _ = raster.get(2, 0);
    }

    #[test]
    fn pixels_yields_row_major_triples() {
        let raster = Raster::from_data(
            2,
            2,
            vec![
                Rgb { r: 1, g: 0, b: 0 },
                Rgb { r: 2, g: 0, b: 0 },
                Rgb { r: 3, g: 0, b: 0 },
                Rgb { r: 4, g: 0, b: 0 },
            ],
        )
        .unwrap();
        let triples: Vec<_> = raster.pixels().collect();
        assert_eq!(triples[0], (0, 0, Rgb { r: 1, g: 0, b: 0 }));
        assert_eq!(triples[1], (0, 1, Rgb { r: 2, g: 0, b: 0 }));
        assert_eq!(triples[2], (1, 0, Rgb { r: 3, g: 0, b: 0 }));
        assert_eq!(triples[3], (1, 1, Rgb { r: 4, g: 0, b: 0 }));
    }
}
