//! Error types for the flowlic core.
//!
//! Variants fall into three classes (spelled out per variant below):
//! configuration errors fail fast at construction time, domain errors are
//! precondition violations the caller may perturb around and retry, and
//! bounds errors indicate a broken internal invariant. None of them are
//! retried automatically.

use thiserror::Error;

/// Errors produced by renderer construction and the convolution pass.
#[derive(Debug, Error)]
pub enum LicError {
    /// Configuration: width or height was zero when creating a grid.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Configuration: the math-space domain was empty or inverted.
    #[error("invalid domain: x_min ({x_min}) must be less than x_max ({x_max})")]
    InvalidDomain { x_min: f64, x_max: f64 },

    /// Configuration: the arc-length budget was zero, negative, or non-finite.
    #[error("invalid arc-length budget: {0} (must be positive and finite)")]
    InvalidBudget(f64),

    /// Configuration: the margin band cannot hold the longest possible walk.
    #[error("margin {margin} too small for arc-length budget {budget}: needs at least {required} pixels")]
    MarginTooSmall {
        margin: usize,
        budget: f64,
        required: usize,
    },

    /// Configuration: a color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Configuration: a color map could not be constructed.
    #[error("invalid color map: {0}")]
    InvalidColorMap(String),

    /// Configuration: a pre-built buffer did not match the expected length.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// Configuration: an injected noise grid does not match the grid config.
    #[error("noise grid {got_w}x{got_h} (margin {got_m}) does not match grid {want_w}x{want_h} (margin {want_m})")]
    NoiseMismatch {
        want_w: usize,
        want_h: usize,
        want_m: usize,
        got_w: usize,
        got_h: usize,
        got_m: usize,
    },

    /// Configuration: a requested field name was not recognized.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Configuration: field parameters were malformed.
    #[error("invalid field parameters: {0}")]
    InvalidFieldParams(String),

    /// Configuration: a requested color map preset was not recognized.
    #[error("unknown color map: {0}")]
    UnknownColorMap(String),

    /// Domain: the field was evaluated exactly at a singularity (e.g. a
    /// point-charge position) and produced a non-finite vector.
    #[error("field is singular at math coordinate ({x}, {y})")]
    FieldSingularity { x: f64, y: f64 },

    /// Domain: the field direction vanishes at a pixel's seed point, so no
    /// streamline can be traced from it.
    #[error("field direction vanishes at pixel (row {row}, col {col})")]
    DegenerateDirection { row: i64, col: i64 },

    /// Bounds: a streamline walk requested a noise sample outside the margin
    /// band. The margin/budget invariant is enforced at construction, so this
    /// is a programmer error, not a recoverable condition.
    #[error("noise lookup at pixel (row {row}, col {col}) escaped the margin band")]
    MarginExceeded { row: i64, col: i64 },

    /// The render was cancelled cooperatively between rows.
    #[error("render cancelled")]
    Cancelled,

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
