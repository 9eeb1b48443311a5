//! Line integral convolution: streaks a noise texture along field
//! streamlines and tints the result by field magnitude.
//!
//! For every visible pixel the renderer traces two cell-crossing walks from
//! the pixel center, one along the field direction and one against it, each
//! spending the same arc-length budget. Noise samples along the walks are
//! weighted by the distance traveled inside their cell; the normalized sum
//! becomes the pixel's intensity and is blended with the color the field's
//! magnitude maps to.
//!
//! The stepper reports distances divided by `sqrt(2)`, so the configured
//! pixel-length budget is converted once at construction
//! (`budget = budget_px / sqrt(2)`) and everything downstream shares the
//! same unit. Rows are rendered in parallel; cancellation is checked once
//! per row.

use flowlic_core::colormap::ColorMap;
use flowlic_core::error::LicError;
use flowlic_core::field::VectorField;
use flowlic_core::grid::{GridConfig, PixelCoord};
use flowlic_core::noise::NoiseGrid;
use flowlic_core::raster::Raster;
use flowlic_core::stepper::cross_cell;
use flowlic_core::Rgb;
use glam::DVec2;
use rayon::prelude::*;
use std::f64::consts::SQRT_2;
use std::sync::atomic::{AtomicBool, Ordering};

/// Default streamline arc-length budget, in pixel lengths per walk direction.
pub const DEFAULT_BUDGET_PX: f64 = 30.0;

/// The smallest margin (in pixels) that can hold every walk of the given
/// pixel-length budget. A walk consumes at least one budget unit per cell
/// crossing in stepper units, so it visits at most `ceil(budget_px * sqrt(2))`
/// cells away from its seed.
pub fn min_margin(budget_px: f64) -> usize {
    (budget_px * SQRT_2).ceil() as usize
}

/// A configured, reusable LIC renderer.
///
/// Holds the grid geometry, the color map, the converted arc-length budget,
/// and the noise texture. Rendering borrows the renderer immutably, so one
/// renderer can serve many fields (and many threads) with identical noise.
pub struct LicRenderer {
    grid: GridConfig,
    color_map: ColorMap,
    /// Per-direction arc-length budget in stepper units (`budget_px / sqrt(2)`).
    budget: f64,
    noise: NoiseGrid,
}

impl LicRenderer {
    /// Creates a renderer with a freshly generated noise texture.
    ///
    /// Returns `LicError::InvalidBudget` if `budget_px` is not positive and
    /// finite, and `LicError::MarginTooSmall` if the grid's margin cannot
    /// hold the longest possible walk (see [`min_margin`]).
    pub fn new(
        grid: GridConfig,
        color_map: ColorMap,
        budget_px: f64,
        seed: u64,
    ) -> Result<Self, LicError> {
        Self::validate(&grid, budget_px)?;
        let noise = NoiseGrid::generate(grid.width(), grid.height(), grid.margin(), seed)?;
        Ok(Self {
            grid,
            color_map,
            budget: budget_px / SQRT_2,
            noise,
        })
    }

    /// Creates a renderer around a caller-provided noise texture.
    ///
    /// In addition to the [`LicRenderer::new`] checks, returns
    /// `LicError::NoiseMismatch` if the noise grid's dimensions or margin
    /// differ from the grid config's.
    pub fn with_noise(
        grid: GridConfig,
        color_map: ColorMap,
        budget_px: f64,
        noise: NoiseGrid,
    ) -> Result<Self, LicError> {
        Self::validate(&grid, budget_px)?;
        if noise.width() != grid.width()
            || noise.height() != grid.height()
            || noise.margin() != grid.margin()
        {
            return Err(LicError::NoiseMismatch {
                want_w: grid.width(),
                want_h: grid.height(),
                want_m: grid.margin(),
                got_w: noise.width(),
                got_h: noise.height(),
                got_m: noise.margin(),
            });
        }
        Ok(Self {
            grid,
            color_map,
            budget: budget_px / SQRT_2,
            noise,
        })
    }

    fn validate(grid: &GridConfig, budget_px: f64) -> Result<(), LicError> {
        if !budget_px.is_finite() || budget_px <= 0.0 {
            return Err(LicError::InvalidBudget(budget_px));
        }
        let required = min_margin(budget_px);
        if grid.margin() < required {
            return Err(LicError::MarginTooSmall {
                margin: grid.margin(),
                budget: budget_px,
                required,
            });
        }
        Ok(())
    }

    /// The grid configuration this renderer was built with.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The arc-length budget in pixel lengths, as originally configured.
    pub fn budget_px(&self) -> f64 {
        self.budget * SQRT_2
    }

    /// The visible region of the noise texture as a grayscale image, for
    /// inspecting the raw input of a render.
    pub fn noise_image(&self) -> Raster {
        self.noise.visible()
    }

    /// Renders the field without cancellation.
    pub fn render(&self, field: &dyn VectorField) -> Result<Raster, LicError> {
        self.render_with_cancel(field, &AtomicBool::new(false))
    }

    /// Renders the field, checking `cancel` once per row.
    ///
    /// Rows are processed in parallel. Fails with `LicError::Cancelled` if
    /// the flag is set, `LicError::FieldSingularity` if any pixel samples a
    /// non-finite field value, and `LicError::DegenerateDirection` if the
    /// field direction vanishes exactly at a pixel's seed point.
    pub fn render_with_cancel(
        &self,
        field: &dyn VectorField,
        cancel: &AtomicBool,
    ) -> Result<Raster, LicError> {
        let width = self.grid.width();
        let height = self.grid.height();
        let mut out = vec![Rgb::BLACK; width * height];
        out.par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(row, pixels)| {
                if cancel.load(Ordering::Relaxed) {
                    return Err(LicError::Cancelled);
                }
                for (col, pixel) in pixels.iter_mut().enumerate() {
                    *pixel = self.render_pixel(field, row as i64, col as i64)?;
                }
                Ok(())
            })?;
        Raster::from_data(width, height, out)
    }

    /// Computes one output pixel: seed sample, two walks, normalize, blend.
    fn render_pixel(&self, field: &dyn VectorField, row: i64, col: i64) -> Result<Rgb, LicError> {
        let start = PixelCoord { row, col };
        let at = self.grid.pixel_to_math(start);
        let seed = field.sample(at);
        if !seed.is_finite() {
            return Err(LicError::FieldSingularity { x: at.x, y: at.y });
        }
        if seed.is_degenerate() {
            return Err(LicError::DegenerateDirection { row, col });
        }

        let forward = self.walk(field, start, seed.dir, 1.0)?;
        let backward = self.walk(field, start, seed.dir, -1.0)?;

        // Walks that terminate early (mid-stream degeneracy) still divide by
        // the full budget, darkening the pixel toward black.
        let intensity = ((forward + backward) / (2.0 * self.budget)).clamp(0.0, 255.0);
        Ok(blend(intensity, self.color_map.get_color(seed.magnitude)))
    }

    /// One streamline walk from a pixel center, accumulating
    /// distance-weighted noise until the budget is spent or the field
    /// degenerates mid-stream.
    ///
    /// `sign` selects the walk orientation: every sampled direction is
    /// multiplied by it, so the backward walk follows the reversed field the
    /// whole way, not just at the seed.
    fn walk(
        &self,
        field: &dyn VectorField,
        start: PixelCoord,
        seed_dir: DVec2,
        sign: f64,
    ) -> Result<f64, LicError> {
        let mut acc = 0.0;
        let mut remaining = self.budget;
        let mut pixel = start;
        let mut pos = DVec2::new(0.5, 0.5);
        let mut dir = sign * seed_dir;

        loop {
            let crossing = cross_cell(pos, dir);
            if crossing.distance <= 0.0 {
                break;
            }
            let texel = self
                .noise
                .get(pixel.row, pixel.col)
                .ok_or(LicError::MarginExceeded {
                    row: pixel.row,
                    col: pixel.col,
                })?;
            let weight = crossing.distance.min(remaining);
            acc += f64::from(texel) * weight;
            remaining -= weight;
            if remaining <= 0.0 {
                break;
            }

            let (d_row, d_col) = crossing.border.offset();
            pixel = PixelCoord {
                row: pixel.row + d_row,
                col: pixel.col + d_col,
            };
            pos = crossing.next_pos;

            let sample = field.sample(self.grid.pixel_to_math(pixel));
            if !sample.is_finite() {
                let at = self.grid.pixel_to_math(pixel);
                return Err(LicError::FieldSingularity { x: at.x, y: at.y });
            }
            if sample.is_degenerate() {
                break;
            }
            dir = sign * sample.dir;
        }
        Ok(acc)
    }
}

/// Scales a color by a 0–255 intensity: each channel becomes
/// `floor(intensity * channel / 255)`.
fn blend(intensity: f64, color: Rgb) -> Rgb {
    let scale = |c: u8| (intensity * f64::from(c) / 255.0).floor() as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
