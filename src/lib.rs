pub mod config;
pub mod error;
pub mod grid;
pub mod kernels;
pub mod neighborhood;
pub mod render;
pub mod transform;

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use config::Params;

pub use error::{GridError, Result};
pub use grid::Grid;
pub use kernels::{Kernel, KernelKind};
pub use neighborhood::{BoundaryPolicy, extract};
pub use transform::{FnTransform, Transformation, apply_all, apply_all_sequential};

/// Everything the demo driver computes for one set of [`Params`].
#[derive(Debug, Serialize)]
pub struct Report {
    pub grid: Grid,
    pub window: Grid,
    pub transformed: Option<Grid>,
}

#[derive(Debug, Serialize)]
pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Build the sample grid, extract the requested neighborhood and optionally
/// run a kernel over the whole grid.
pub fn run(params: &Params) -> Result<(Report, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Sample grid
    let t = Instant::now();
    let grid = Grid::sequential(params.rows, params.cols, params.start)?;
    timings.push(Timing {
        name: "build",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Single neighborhood
    let t = Instant::now();
    let window = extract(
        &grid,
        params.center_row,
        params.center_col,
        params.radius,
        params.policy,
    )?;
    timings.push(Timing {
        name: "extract",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Whole-grid kernel
    let transformed = match params.kernel {
        Some(kind) => {
            let t = Instant::now();
            let out = apply_all(&grid, &Kernel::new(kind, params.radius, params.policy))?;
            timings.push(Timing {
                name: "apply_all",
                ms: t.elapsed().as_secs_f64() * 1000.0,
            });
            Some(out)
        }
        None => None,
    };

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });
    info!(total_ms, "run complete");

    Ok((
        Report {
            grid,
            window,
            transformed,
        },
        timings,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_wraps_bottom_left() {
        let (report, timings) = run(&Params::default()).unwrap();
        assert_eq!(report.grid.rows(), 6);
        assert_eq!(report.window.get(2, 2), 36);
        assert_eq!(report.window.row(3), &[6, 7, 1, 2, 3]);
        assert!(report.transformed.is_none());
        assert_eq!(timings.last().map(|t| t.name), Some("TOTAL"));
    }

    #[test]
    fn run_with_kernel_keeps_shape() {
        let params = Params {
            kernel: Some(KernelKind::Sum),
            ..Params::default()
        };
        let (report, _) = run(&params).unwrap();
        let out = report.transformed.unwrap();
        assert_eq!((out.rows(), out.cols()), (6, 7));
        // Wrapped 5x5 sum at (5, 0) equals the sum of the extracted window.
        assert_eq!(out.get(5, 0), report.window.as_slice().iter().sum::<i32>());
    }

    #[test]
    fn run_propagates_size_error() {
        let params = Params {
            rows: 4,
            cols: 4,
            center_row: 0,
            radius: 2,
            ..Params::default()
        };
        assert!(matches!(
            run(&params),
            Err(GridError::InvalidNeighborhoodSize { .. })
        ));
    }
}
