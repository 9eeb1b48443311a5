//! Magnitude-to-color mapping over an ordered list of color stops.
//!
//! A [`ColorMap`] partitions `[start_value, end_value)` into contiguous
//! intervals, one per stop, and blends between the interval's two colors
//! with either a straight linear ramp or a cosine ease-in/ease-out. Values
//! outside the covered range clamp to the first/last color.
//!
//! The cosine blend negates the range inside the cosine argument; the
//! formula must stay byte-for-byte stable so seeded renders reproduce
//! exactly.

use crate::color::Rgb;
use crate::error::LicError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Blend curve used inside each color interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampMode {
    /// Straight per-channel ramp.
    Linear,
    /// Cosine ease-in/ease-out, the default look.
    #[default]
    Trig,
}

/// One interval of a color map: blend toward `next_color` over `range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub next_color: Rgb,
    pub range: f64,
}

/// Serializable color-map description, parsed from CLI JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMapConfig {
    pub start_value: f64,
    pub start_color: Rgb,
    pub steps: Vec<ColorStop>,
    #[serde(default)]
    pub mode: RampMode,
}

/// Maps a scalar field magnitude to a color via piecewise interpolation.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// `steps.len() + 1` colors; interval `i` blends `colors[i] -> colors[i+1]`.
    colors: Vec<Rgb>,
    /// Ascending interval start values; `boundaries[0]` is the start value.
    boundaries: Vec<f64>,
    ranges: Vec<f64>,
    end_value: f64,
    mode: RampMode,
}

impl ColorMap {
    /// Creates a color map from a start value/color and ordered stops.
    ///
    /// Returns `LicError::InvalidColorMap` if `steps` is empty, if the start
    /// value is non-finite, or if any stop range is non-positive or
    /// non-finite. Never partially applies.
    pub fn new(
        start_value: f64,
        start_color: Rgb,
        steps: Vec<ColorStop>,
        mode: RampMode,
    ) -> Result<Self, LicError> {
        if steps.is_empty() {
            return Err(LicError::InvalidColorMap(
                "color map requires at least 1 step".to_string(),
            ));
        }
        if !start_value.is_finite() {
            return Err(LicError::InvalidColorMap(format!(
                "start value must be finite, got {start_value}"
            )));
        }
        let mut colors = Vec::with_capacity(steps.len() + 1);
        let mut boundaries = Vec::with_capacity(steps.len());
        let mut ranges = Vec::with_capacity(steps.len());
        colors.push(start_color);
        let mut cursor = start_value;
        for (i, step) in steps.iter().enumerate() {
            if !(step.range > 0.0) || !step.range.is_finite() {
                return Err(LicError::InvalidColorMap(format!(
                    "step {i} has non-positive range {}",
                    step.range
                )));
            }
            boundaries.push(cursor);
            ranges.push(step.range);
            colors.push(step.next_color);
            cursor += step.range;
        }
        Ok(Self {
            colors,
            boundaries,
            ranges,
            end_value: cursor,
            mode,
        })
    }

    /// Creates a color map from a serializable config.
    pub fn from_config(config: ColorMapConfig) -> Result<Self, LicError> {
        Self::new(
            config.start_value,
            config.start_color,
            config.steps,
            config.mode,
        )
    }

    /// Parses a JSON [`ColorMapConfig`] and builds the map.
    pub fn from_json_str(json: &str) -> Result<Self, LicError> {
        let config: ColorMapConfig = serde_json::from_str(json)
            .map_err(|e| LicError::InvalidColorMap(e.to_string()))?;
        Self::from_config(config)
    }

    /// First representable value; everything at or below it clamps to the
    /// start color.
    pub fn start_value(&self) -> f64 {
        self.boundaries[0]
    }

    /// One past the last interval; everything at or above it clamps to the
    /// last color.
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    /// Maps a magnitude to its display color.
    ///
    /// NaN input clamps to the start color.
    pub fn get_color(&self, value: f64) -> Rgb {
        if value.is_nan() || value <= self.start_value() {
            return self.colors[0];
        }
        if value >= self.end_value {
            return *self.colors.last().expect("color map is never empty");
        }
        // Ascending boundaries: pick the last interval starting at or below value.
        let mut idx = 0;
        for (i, &b) in self.boundaries.iter().enumerate() {
            if value >= b {
                idx = i;
            } else {
                break;
            }
        }
        let t = value - self.boundaries[idx];
        let range = self.ranges[idx];
        let c1 = self.colors[idx];
        let c2 = self.colors[idx + 1];
        Rgb {
            r: blend_channel(self.mode, c1.r, c2.r, t, range),
            g: blend_channel(self.mode, c1.g, c2.g, t, range),
            b: blend_channel(self.mode, c1.b, c2.b, t, range),
        }
    }

    // -- Built-in maps --

    /// Dark blue through sand to orange over magnitudes 0–2.
    pub fn thermal() -> Self {
        Self::preset(
            0.0,
            "#001233",
            &[("#0a9396", 0.5), ("#e9d8a6", 0.5), ("#ee9b00", 0.5), ("#ca6702", 0.5)],
        )
    }

    /// Cold-to-hot map tuned for point-charge magnitudes, 0–4.
    pub fn dipole() -> Self {
        Self::preset(
            0.0,
            "#1d3557",
            &[("#457b9d", 1.0), ("#f1faee", 1.0), ("#e63946", 2.0)],
        )
    }

    /// Black-to-white grayscale over the wave field's -2..2 magnitude range.
    pub fn mono() -> Self {
        Self::preset(-2.0, "#000000", &[("#ffffff", 4.0)])
    }

    fn preset(start_value: f64, start_color: &str, steps: &[(&str, f64)]) -> Self {
        let stops = steps
            .iter()
            .map(|&(hex, range)| ColorStop {
                next_color: Rgb::from_hex(hex).expect("preset hex values are valid"),
                range,
            })
            .collect();
        let start = Rgb::from_hex(start_color).expect("preset hex values are valid");
        Self::new(start_value, start, stops, RampMode::Trig)
            .expect("preset configurations are valid")
    }

    /// Constructs a built-in map by name.
    ///
    /// Returns `LicError::UnknownColorMap` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, LicError> {
        match name {
            "thermal" => Ok(Self::thermal()),
            "dipole" => Ok(Self::dipole()),
            "mono" => Ok(Self::mono()),
            _ => Err(LicError::UnknownColorMap(name.to_string())),
        }
    }

    /// Names accepted by [`from_name`](Self::from_name).
    pub fn list_names() -> &'static [&'static str] {
        &["thermal", "dipole", "mono"]
    }
}

/// Blends one channel at offset `t` into an interval of the given range.
fn blend_channel(mode: RampMode, c1: u8, c2: u8, t: f64, range: f64) -> u8 {
    let a = f64::from(c1);
    let b = f64::from(c2);
    let v = match mode {
        RampMode::Linear => (b - a) / range * t + a,
        // t runs 0..range, easing from a to b; the negated range is part of
        // the fixed formula.
        RampMode::Trig => 0.5 * ((a - b) * (PI * t / -range).cos() + a + b),
    };
    v.floor().clamp(0.0, 255.0) as u8
}
