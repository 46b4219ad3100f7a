use std::fmt::{self, Write};

use crate::grid::Grid;

/// Field width used by `Display for Grid`.
pub const DEFAULT_CELL_WIDTH: usize = 3;

/// Text table: one line per row, each cell right-aligned in a `width`-wide field.
/// Values wider than the field are printed in full.
pub fn render_table(grid: &Grid, width: usize) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * width + 1));
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, grid, width);
    out
}

fn write_table(out: &mut impl Write, grid: &Grid, width: usize) -> fmt::Result {
    for row in grid.iter_rows() {
        for v in row {
            write!(out, "{v:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(DEFAULT_CELL_WIDTH);
        write_table(f, self, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_right_aligned() {
        let g = Grid::sequential(2, 3, 8).unwrap();
        assert_eq!(render_table(&g, 3), "  8  9 10\n 11 12 13\n");
    }

    #[test]
    fn wide_values_overflow_field() {
        let g = Grid::from_rows(vec![vec![-1234, 5]]).unwrap();
        assert_eq!(render_table(&g, 3), "-1234  5\n");
    }

    #[test]
    fn display_honours_width_flag() {
        let g = Grid::sequential(1, 2, 1).unwrap();
        assert_eq!(g.to_string(), "  1  2\n");
        assert_eq!(format!("{g:5}"), "    1    2\n");
    }
}
