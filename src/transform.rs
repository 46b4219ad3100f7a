//! Whole-grid transformation: every cell becomes a function of its own neighborhood.

use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::neighborhood::{BoundaryPolicy, fill_window, window_side};

/// A pure mapping from a neighborhood window to one value, together with the
/// radius and boundary policy used to build that window.
///
/// `apply` receives a `(2r+1) x (2r+1)` grid whose center is the cell being
/// transformed. Implementations must be side-effect free: the engine may call
/// them from several threads and in any order.
pub trait Transformation: Sync {
    fn radius(&self) -> usize;

    fn policy(&self) -> BoundaryPolicy;

    fn apply(&self, window: &Grid) -> i32;

    fn is_wrapped(&self) -> bool {
        self.policy().is_wrapped()
    }
}

impl<T: Transformation + ?Sized> Transformation for &T {
    fn radius(&self) -> usize {
        (**self).radius()
    }

    fn policy(&self) -> BoundaryPolicy {
        (**self).policy()
    }

    fn apply(&self, window: &Grid) -> i32 {
        (**self).apply(window)
    }
}

impl<T: Transformation + ?Sized> Transformation for Box<T> {
    fn radius(&self) -> usize {
        (**self).radius()
    }

    fn policy(&self) -> BoundaryPolicy {
        (**self).policy()
    }

    fn apply(&self, window: &Grid) -> i32 {
        (**self).apply(window)
    }
}

/// Adapts a closure into a [`Transformation`].
pub struct FnTransform<F> {
    radius: usize,
    policy: BoundaryPolicy,
    f: F,
}

impl<F> FnTransform<F>
where
    F: Fn(&Grid) -> i32 + Sync,
{
    pub fn new(radius: usize, policy: BoundaryPolicy, f: F) -> Self {
        Self { radius, policy, f }
    }
}

impl<F> Transformation for FnTransform<F>
where
    F: Fn(&Grid) -> i32 + Sync,
{
    fn radius(&self) -> usize {
        self.radius
    }

    fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    fn apply(&self, window: &Grid) -> i32 {
        (self.f)(window)
    }
}

impl<F> fmt::Debug for FnTransform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransform")
            .field("radius", &self.radius)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Transform every cell of `grid`, returning a new grid of the same shape.
///
/// Rows are computed in parallel. Fails up front with
/// [`GridError::InvalidNeighborhoodSize`](crate::GridError::InvalidNeighborhoodSize)
/// if the transformation's window does not fit the grid; no partial output is
/// produced in that case.
pub fn apply_all<T: Transformation + ?Sized>(grid: &Grid, transform: &T) -> Result<Grid> {
    let (radius, policy) = (transform.radius(), transform.policy());
    let side = window_side(grid, radius)?;
    debug!(rows = grid.rows(), cols = grid.cols(), radius, %policy, "apply_all");

    let cols = grid.cols();
    let template = Grid::new(side, side)?;
    let mut out = Grid::new(grid.rows(), cols)?;

    out.as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each_init(
            || template.clone(),
            |window, (row, dst)| {
                for (col, cell) in dst.iter_mut().enumerate() {
                    fill_window(grid, row, col, radius, policy, window);
                    *cell = transform.apply(window);
                }
            },
        );

    Ok(out)
}

/// Same result as [`apply_all`], computed row-major on the calling thread.
pub fn apply_all_sequential<T: Transformation + ?Sized>(grid: &Grid, transform: &T) -> Result<Grid> {
    let (radius, policy) = (transform.radius(), transform.policy());
    let side = window_side(grid, radius)?;
    debug!(rows = grid.rows(), cols = grid.cols(), radius, %policy, "apply_all_sequential");

    let mut window = Grid::new(side, side)?;
    let mut out = Grid::new(grid.rows(), grid.cols())?;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            fill_window(grid, row, col, radius, policy, &mut window);
            out.set(row, col, transform.apply(&window));
        }
    }
    Ok(out)
}
