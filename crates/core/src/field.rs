//! Vector fields: samplers producing a flow direction and magnitude at any
//! continuous coordinate.
//!
//! A [`VectorField`] can be sampled anywhere in the plane and has no side
//! effects. Two analytic fields are built in: a point-charge superposition
//! and a closed-form trigonometric field.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A sampled field value: unit flow direction plus display magnitude.
///
/// `dir` has unit length whenever `magnitude > 0`. The magnitude is the
/// scalar used for coloring and is not necessarily the length of the raw
/// direction vector (see [`WaveField`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowVector {
    pub dir: DVec2,
    pub magnitude: f64,
}

impl FlowVector {
    /// True when no streamline can be traced from this sample: the direction
    /// is zero or any component is non-finite.
    pub fn is_degenerate(&self) -> bool {
        !self.dir.is_finite() || !self.magnitude.is_finite() || self.dir == DVec2::ZERO
    }

    /// True when every component is finite. A non-finite sample indicates
    /// the field was evaluated at a singularity.
    pub fn is_finite(&self) -> bool {
        self.dir.is_finite() && self.magnitude.is_finite()
    }
}

/// A 2D vector field sampled at continuous math-space coordinates.
///
/// Implementations are stateless after construction and deterministic:
/// same coordinate, same sample.
pub trait VectorField: Send + Sync {
    /// Samples the field at a math-space coordinate.
    fn sample(&self, at: DVec2) -> FlowVector;
}

/// A single point charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
}

/// Superposition of inverse-square point-charge contributions.
///
/// Each charge contributes `magnitude * r / |r|^3` where `r` is the radial
/// vector from the charge to the sample point. The display magnitude is the
/// length of the superposed sum.
///
/// Sampling exactly at a charge position divides by zero and yields a
/// non-finite, degenerate [`FlowVector`]; callers must keep sample points off
/// the charge positions.
#[derive(Debug, Clone)]
pub struct ChargeField {
    charges: Vec<Charge>,
}

impl ChargeField {
    /// Creates a field from an ordered charge list.
    pub fn new(charges: Vec<Charge>) -> Self {
        Self { charges }
    }

    /// The built-in demo configuration: opposite unit charges at
    /// (-0.4, -0.1) and (0.4, 0.2).
    pub fn dipole() -> Self {
        Self::new(vec![
            Charge {
                x: -0.4,
                y: -0.1,
                magnitude: 1.0,
            },
            Charge {
                x: 0.4,
                y: 0.2,
                magnitude: -1.0,
            },
        ])
    }

    /// Read-only access to the charge list.
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }
}

impl VectorField for ChargeField {
    fn sample(&self, at: DVec2) -> FlowVector {
        let mut sum = DVec2::ZERO;
        for charge in &self.charges {
            let r = at - DVec2::new(charge.x, charge.y);
            let dist = r.length();
            sum += charge.magnitude * r / (dist * dist * dist);
        }
        let magnitude = sum.length();
        FlowVector {
            dir: sum / magnitude,
            magnitude,
        }
    }
}

/// Closed-form trigonometric field.
///
/// Direction components are `vx = cos(y^2/2) * y`, `vy = -cos(x^2/2) * x`.
/// The display magnitude is the independent scalar field
/// `sin(x^2/2) + sin(y^2/2)` and is unrelated to `|(vx, vy)|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveField;

impl VectorField for WaveField {
    fn sample(&self, at: DVec2) -> FlowVector {
        let raw = DVec2::new(
            (at.y * at.y / 2.0).cos() * at.y,
            -(at.x * at.x / 2.0).cos() * at.x,
        );
        let magnitude = (at.x * at.x / 2.0).sin() + (at.y * at.y / 2.0).sin();
        FlowVector {
            dir: raw / raw.length(),
            magnitude,
        }
    }
}
