#![deny(unsafe_code)]
//! Core types for the flowlic line integral convolution (LIC) renderer.
//!
//! Provides the `VectorField` trait with its analytic implementations
//! (`ChargeField`, `WaveField`), the `GridConfig` coordinate mapper, the
//! `ColorMap`, the cell-crossing stepper, the margin-padded `NoiseGrid`,
//! the `Raster` output grid, and the `Xorshift64` PRNG.

pub mod color;
pub mod colormap;
pub mod error;
pub mod field;
pub mod grid;
pub mod noise;
pub mod prng;
pub mod raster;
pub mod stepper;

pub use color::Rgb;
pub use colormap::{ColorMap, ColorMapConfig, ColorStop, RampMode};
pub use error::LicError;
pub use field::{Charge, ChargeField, FlowVector, VectorField, WaveField};
pub use grid::{GridConfig, PixelCoord};
pub use noise::NoiseGrid;
pub use prng::Xorshift64;
pub use raster::Raster;
pub use stepper::{cross_cell, Border, Crossing};
