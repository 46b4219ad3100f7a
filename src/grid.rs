use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Row-major flat grid of `i32` cells. Always at least 1x1 and never jagged.
///
/// Serializes as a list of rows, and deserializing goes through
/// [`Grid::from_rows`] so the shape invariant holds for decoded grids too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Grid {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Zero-filled grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        })
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::JaggedRows {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> i32) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for (r, row) in grid.data.chunks_mut(cols).enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = f(r, c);
            }
        }
        Ok(grid)
    }

    /// Row-major counting grid: `start, start + 1, ...`.
    pub fn sequential(rows: usize, cols: usize, start: i32) -> Result<Self> {
        Self::from_fn(rows, cols, |r, c| start.wrapping_add((r * cols + c) as i32))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Panics if `(row, col)` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(self.contains(row, col), "({row}, {col}) outside {}x{} grid", self.rows, self.cols);
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn get_checked(&self, row: usize, col: usize) -> Option<i32> {
        self.contains(row, col).then(|| self.data[row * self.cols + col])
    }

    /// Panics if `(row, col)` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: i32) {
        assert!(self.contains(row, col), "({row}, {col}) outside {}x{} grid", self.rows, self.cols);
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.cols)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(<[i32]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let g = Grid::new(2, 3).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert!(g.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(Grid::new(0, 3), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(3, 0), Err(GridError::EmptyGrid));
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::EmptyGrid));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn jagged_rows_rejected() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::JaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn sequential_is_row_major() {
        let g = Grid::sequential(6, 7, 1).unwrap();
        assert_eq!(g.get(0, 0), 1);
        assert_eq!(g.get(0, 6), 7);
        assert_eq!(g.get(1, 0), 8);
        assert_eq!(g.get(5, 6), 42);
        assert_eq!(g.row(5), &[36, 37, 38, 39, 40, 41, 42]);
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let g = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(g.to_rows(), rows);
        assert_eq!(g.get_checked(1, 2), Some(6));
        assert_eq!(g.get_checked(2, 0), None);
    }

    #[test]
    fn set_writes_single_cell() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(1, 0, 9);
        assert_eq!(g.to_rows(), vec![vec![0, 0], vec![9, 0]]);
    }

    #[test]
    fn serde_uses_nested_rows() {
        let g = Grid::sequential(2, 2, 1).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert!(serde_json::from_str::<Grid>("[[1,2],[3]]").is_err());
    }
}
