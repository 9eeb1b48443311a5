//! Coordinate mapping between continuous math space and the pixel grid.
//!
//! A [`GridConfig`] fixes the visible pixel dimensions, the margin band used
//! by streamline walks, and the math-space window. It is immutable after
//! construction; both mapping directions are pure functions of it.
//!
//! The y axis is inverted between the two spaces: math y grows upward while
//! rows grow downward, so row 0 maps to the top of the math window.

use crate::error::LicError;
use glam::DVec2;

/// An integer pixel-grid location.
///
/// Components are signed because streamline walks may leave the visible
/// region and enter the margin band (negative rows/cols, or rows/cols beyond
/// the visible extent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub row: i64,
    pub col: i64,
}

/// Immutable grid and math-window configuration.
///
/// `margin` is the width of the band of extra noise pixels on every side of
/// the visible region; it must be large enough for the longest walk the
/// renderer can take (validated against the arc-length budget at renderer
/// construction, not here).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    width: usize,
    height: usize,
    margin: usize,
    x_min: f64,
    x_max: f64,
    y_center: f64,
}

impl GridConfig {
    /// Creates a validated grid configuration.
    ///
    /// Returns `LicError::InvalidDimensions` if either dimension is zero and
    /// `LicError::InvalidDomain` if the math window is empty or inverted.
    pub fn new(
        width: usize,
        height: usize,
        margin: usize,
        x_min: f64,
        x_max: f64,
        y_center: f64,
    ) -> Result<Self, LicError> {
        if width == 0 || height == 0 {
            return Err(LicError::InvalidDimensions);
        }
        if !(x_min < x_max) || !x_min.is_finite() || !x_max.is_finite() {
            return Err(LicError::InvalidDomain { x_min, x_max });
        }
        Ok(Self {
            width,
            height,
            margin,
            x_min,
            x_max,
            y_center,
        })
    }

    /// Visible grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Margin band width in pixels.
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Math-space length of one pixel edge.
    pub fn ratio(&self) -> f64 {
        (self.x_max - self.x_min) / self.width as f64
    }

    /// Math y coordinate of the top edge of the window.
    pub fn y_max(&self) -> f64 {
        self.y_center + self.ratio() * self.height as f64 / 2.0
    }

    /// Quantizes a math coordinate to the nearest pixel.
    pub fn math_to_pixel(&self, at: DVec2) -> PixelCoord {
        let ratio = self.ratio();
        PixelCoord {
            col: ((at.x - self.x_min) / ratio).round() as i64,
            row: (-((at.y - self.y_max()) / ratio)).round() as i64,
        }
    }

    /// Math coordinate of a pixel's center, the exact inverse of
    /// [`math_to_pixel`](Self::math_to_pixel) up to pixel quantization.
    ///
    /// `pixel_to_math(math_to_pixel(c))` lands within one pixel's worth of
    /// math distance of `c` per axis.
    pub fn pixel_to_math(&self, at: PixelCoord) -> DVec2 {
        let ratio = self.ratio();
        DVec2::new(
            self.x_min + at.col as f64 * ratio,
            self.y_max() - at.row as f64 * ratio,
        )
    }
}
