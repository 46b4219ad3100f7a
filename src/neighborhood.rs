//! Square neighborhood extraction with zero-fill or toroidal boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// How cells outside the grid are resolved when a window crosses an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Out-of-range cells read as 0.
    #[default]
    ZeroFill,
    /// Out-of-range indices wrap to the opposite side (torus).
    Wrap,
}

impl BoundaryPolicy {
    pub fn is_wrapped(self) -> bool {
        self == Self::Wrap
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroFill => "zero_fill",
            Self::Wrap => "wrap",
        })
    }
}

impl FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero_fill" | "zero-fill" | "zerofill" | "zero" => Ok(Self::ZeroFill),
            "wrap" | "wrapped" | "torus" | "toroidal" => Ok(Self::Wrap),
            other => Err(format!("unknown boundary policy `{other}` (expected zero_fill or wrap)")),
        }
    }
}

/// Side length `2 * radius + 1` of a window, checked against the grid it is drawn from.
pub fn window_side(grid: &Grid, radius: usize) -> Result<usize> {
    let side = radius.checked_mul(2).and_then(|d| d.checked_add(1));
    match side {
        Some(side) if side <= grid.rows() && side <= grid.cols() => Ok(side),
        _ => Err(GridError::InvalidNeighborhoodSize {
            radius,
            side: side.unwrap_or(usize::MAX),
            rows: grid.rows(),
            cols: grid.cols(),
        }),
    }
}

/// Resolve one axis index. `None` means the cell reads as zero.
///
/// Wrap corrects by a single period; callers guarantee `idx` is at most one
/// grid length out of range, which [`window_side`] enforces.
#[inline]
fn resolve_axis(idx: isize, len: usize, policy: BoundaryPolicy) -> Option<usize> {
    let n = len as isize;
    if (0..n).contains(&idx) {
        return Some(idx as usize);
    }
    match policy {
        BoundaryPolicy::ZeroFill => None,
        BoundaryPolicy::Wrap => {
            debug_assert!(idx >= -n && idx < 2 * n);
            let wrapped = if idx < 0 { idx + n } else { idx - n };
            Some(wrapped as usize)
        }
    }
}

/// Return the `(2r+1) x (2r+1)` window centered on `(center_row, center_col)`.
///
/// The center lands at local `(radius, radius)`. Fails with
/// [`GridError::InvalidNeighborhoodSize`] when the window would be larger
/// than the grid in either dimension, and with
/// [`GridError::CenterOutOfBounds`] when the center is not a grid cell.
pub fn extract(
    grid: &Grid,
    center_row: usize,
    center_col: usize,
    radius: usize,
    policy: BoundaryPolicy,
) -> Result<Grid> {
    let side = window_side(grid, radius)?;
    if !grid.contains(center_row, center_col) {
        return Err(GridError::CenterOutOfBounds {
            row: center_row,
            col: center_col,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    let mut window = Grid::new(side, side)?;
    fill_window(grid, center_row, center_col, radius, policy, &mut window);
    Ok(window)
}

/// Write the neighborhood into a pre-sized `window`. Size and center must
/// already be validated.
pub(crate) fn fill_window(
    grid: &Grid,
    center_row: usize,
    center_col: usize,
    radius: usize,
    policy: BoundaryPolicy,
    window: &mut Grid,
) {
    trace!(center_row, center_col, radius, %policy, "extract");
    let r = radius as isize;
    let side = window.cols();
    let out = window.as_mut_slice();
    for (lr, dr) in (-r..=r).enumerate() {
        let row = resolve_axis(center_row as isize + dr, grid.rows(), policy);
        for (lc, dc) in (-r..=r).enumerate() {
            let col = resolve_axis(center_col as isize + dc, grid.cols(), policy);
            out[lr * side + lc] = match (row, col) {
                (Some(i), Some(j)) => grid.get(i, j),
                _ => 0,
            };
        }
    }
}
