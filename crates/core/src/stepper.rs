//! Cell-crossing stepper: advances a streamline walk by exactly one
//! pixel-cell border.
//!
//! Positions are cell-local: both components in [0, 1] with (0.5, 0.5) at
//! the pixel center and y growing upward, matching math-space orientation.
//! [`cross_cell`] intersects the ray from the current position against the
//! four cell borders and reports which border is exited, where the walk
//! re-enters the neighbor cell, and how far it traveled.
//!
//! Distances carry a `1/sqrt(2)` factor so that a full diagonal crossing
//! costs one unit per axis crossing; the renderer's arc-length budget uses
//! the same convention and nothing else touches the factor.

use glam::DVec2;
use std::f64::consts::SQRT_2;

/// Inward offset applied to the re-entry position so the next call starts
/// strictly inside the neighbor cell instead of exactly on the shared border.
pub const BORDER_EPS: f64 = 0.01;

/// The cell border a walk exits through, or `Center` when it cannot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Top,
    Bottom,
    Left,
    Right,
    /// Degenerate result: zero direction or no reachable border.
    Center,
}

impl Border {
    /// Pixel-grid offset `(d_row, d_col)` of the neighbor cell behind this
    /// border. Rows grow downward, so exiting `Top` (math y up) is `row - 1`.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Border::Top => (-1, 0),
            Border::Bottom => (1, 0),
            Border::Left => (0, -1),
            Border::Right => (0, 1),
            Border::Center => (0, 0),
        }
    }
}

/// Result of one cell-crossing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Exit border; `Border::Center` means no movement.
    pub border: Border,
    /// Cell-local position inside the neighbor cell (offset `BORDER_EPS`
    /// inside its facing border), or the input position for `Center`.
    pub next_pos: DVec2,
    /// Distance traveled inside the cell, divided by `sqrt(2)`. Zero only
    /// for `Center`; callers treat zero as a termination signal.
    pub distance: f64,
}

/// Ray parameter to a border, or infinity when the border is not reachable
/// by advancing (alpha must be strictly positive and finite).
fn reachable(alpha: f64) -> f64 {
    if alpha.is_finite() && alpha > 0.0 {
        alpha
    } else {
        f64::INFINITY
    }
}

/// Computes the exit border, re-entry position, and traveled distance for a
/// ray starting at cell-local `pos` with direction `dir`.
///
/// The exit border is the reachable border with the smallest ray parameter;
/// ties resolve by the fixed scan order Top, Bottom, Left, Right. A zero
/// direction (or one pointing at no reachable border) yields
/// `Border::Center` with zero distance and must terminate the caller's walk.
pub fn cross_cell(pos: DVec2, dir: DVec2) -> Crossing {
    let candidates = [
        (Border::Top, reachable((1.0 - pos.y) / dir.y)),
        (Border::Bottom, reachable(-pos.y / dir.y)),
        (Border::Left, reachable(-pos.x / dir.x)),
        (Border::Right, reachable((1.0 - pos.x) / dir.x)),
    ];

    let mut border = Border::Center;
    let mut alpha = f64::INFINITY;
    for (b, a) in candidates {
        if a < alpha {
            border = b;
            alpha = a;
        }
    }

    if border == Border::Center {
        return Crossing {
            border,
            next_pos: pos,
            distance: 0.0,
        };
    }

    let next_pos = match border {
        Border::Top => DVec2::new(dir.x * alpha + pos.x, BORDER_EPS),
        Border::Bottom => DVec2::new(dir.x * alpha + pos.x, 1.0 - BORDER_EPS),
        Border::Left => DVec2::new(1.0 - BORDER_EPS, dir.y * alpha + pos.y),
        Border::Right => DVec2::new(BORDER_EPS, dir.y * alpha + pos.y),
        Border::Center => unreachable!(),
    };

    Crossing {
        border,
        next_pos,
        distance: (alpha * dir).length() / SQRT_2,
    }
}
