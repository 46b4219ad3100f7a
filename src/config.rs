use serde::{Deserialize, Serialize};

use crate::kernels::KernelKind;
use crate::neighborhood::BoundaryPolicy;

/// Demo driver parameters. Every field can be overridden from the command line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Sample grid
    pub rows: usize,
    pub cols: usize,
    pub start: i32,

    // Neighborhood
    pub center_row: usize,
    pub center_col: usize,
    pub radius: usize,
    pub policy: BoundaryPolicy,

    /// Kernel applied over the whole grid, if any.
    pub kernel: Option<KernelKind>,

    // Output
    pub cell_width: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            start: 1,
            center_row: 5,
            center_col: 0,
            radius: 2,
            policy: BoundaryPolicy::Wrap,
            kernel: None,
            cell_width: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let p: Params = serde_json::from_str(r#"{"radius": 1, "policy": "zero_fill", "kernel": "sum"}"#).unwrap();
        assert_eq!(p.radius, 1);
        assert_eq!(p.policy, BoundaryPolicy::ZeroFill);
        assert_eq!(p.kernel, Some(KernelKind::Sum));
        assert_eq!(p.rows, 6);
        assert_eq!(p.cols, 7);
    }
}
