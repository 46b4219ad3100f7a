//! Ready-made neighborhood kernels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::neighborhood::BoundaryPolicy;
use crate::transform::Transformation;

/// Reduction applied over the whole window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    /// The center cell, unchanged.
    Identity,
    Sum,
    /// Floor of the arithmetic mean.
    Mean,
    Max,
    Min,
    /// Lower median.
    Median,
}

impl KernelKind {
    pub const ALL: [KernelKind; 6] = [
        Self::Identity,
        Self::Sum,
        Self::Mean,
        Self::Max,
        Self::Min,
        Self::Median,
    ];

    fn reduce(self, window: &Grid) -> i32 {
        let cells = window.as_slice();
        match self {
            Self::Identity => {
                let c = window.rows() / 2;
                window.get(c, c)
            }
            Self::Sum => saturate(cells.iter().map(|&v| v as i64).sum()),
            Self::Mean => {
                let total: i64 = cells.iter().map(|&v| v as i64).sum();
                saturate(total.div_euclid(cells.len() as i64))
            }
            // Windows are never empty, so the fallbacks are unreachable.
            Self::Max => cells.iter().copied().max().unwrap_or_default(),
            Self::Min => cells.iter().copied().min().unwrap_or_default(),
            Self::Median => {
                let mut sorted = cells.to_vec();
                let mid = (sorted.len() - 1) / 2;
                *sorted.select_nth_unstable(mid).1
            }
        }
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identity => "identity",
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Max => "max",
            Self::Min => "min",
            Self::Median => "median",
        })
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| format!("unknown kernel `{s}`"))
    }
}

/// A [`KernelKind`] bound to a radius and boundary policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kernel {
    pub kind: KernelKind,
    pub radius: usize,
    pub policy: BoundaryPolicy,
}

impl Kernel {
    pub fn new(kind: KernelKind, radius: usize, policy: BoundaryPolicy) -> Self {
        Self {
            kind,
            radius,
            policy,
        }
    }

    /// Radius 0 identity: `apply_all` with it copies the grid.
    pub fn identity(policy: BoundaryPolicy) -> Self {
        Self::new(KernelKind::Identity, 0, policy)
    }
}

impl Transformation for Kernel {
    fn radius(&self) -> usize {
        self.radius
    }

    fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    fn apply(&self, window: &Grid) -> i32 {
        self.kind.reduce(window)
    }
}
