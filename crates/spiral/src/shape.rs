//! Grid dimensions and rectangularity checks.

use crate::error::GridError;

/// Dimensions of a rectangular grid.
///
/// A shape with either dimension zero is empty; traversing it yields nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns (length of every row).
    pub cols: usize,
}

impl Shape {
    /// Create a shape with `rows * cols` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Take the shape of `grid` without validating it.
    ///
    /// The column count is the first row's length, or 0 when there are no
    /// rows. Later rows are not inspected.
    pub fn assume<T, R: AsRef<[T]>>(grid: &[R]) -> Self {
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        Self {
            rows: grid.len(),
            cols,
        }
    }

    /// Take the shape of `grid`, failing on the first row whose length
    /// differs from the first row's.
    ///
    /// # Examples
    ///
    /// ```
    /// use spiral::{GridError, Shape};
    ///
    /// let ok = Shape::of(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(ok, Shape::new(2, 3));
    ///
    /// let jagged = vec![vec![1, 2], vec![3]];
    /// assert_eq!(
    ///     Shape::of(&jagged),
    ///     Err(GridError::Jagged { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn of<T, R: AsRef<[T]>>(grid: &[R]) -> Result<Self, GridError> {
        let shape = Self::assume(grid);
        for (row, cells) in grid.iter().enumerate().skip(1) {
            let found = cells.as_ref().len();
            if found != shape.cols {
                tracing::debug!(
                    row,
                    expected = shape.cols,
                    found,
                    "rejecting jagged grid"
                );
                return Err(GridError::Jagged {
                    row,
                    expected: shape.cols,
                    found,
                });
            }
        }
        Ok(shape)
    }

    /// Total number of cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use
    /// [`checked_cell_count`](Shape::checked_cell_count) for caller-built
    /// shapes of unknown size.
    pub fn cell_count(&self) -> usize {
        match self.checked_cell_count() {
            Some(n) => n,
            None => panic!("shape {}x{} cell count overflows usize", self.rows, self.cols),
        }
    }

    /// Total number of cells, or `None` if `rows * cols` overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_uses_first_row_width() {
        let grid = vec![vec![1, 2, 3], vec![4]];
        assert_eq!(Shape::assume(&grid), Shape::new(2, 3));
    }

    #[test]
    fn assume_no_rows_is_zero_by_zero() {
        let grid: Vec<Vec<u8>> = Vec::new();
        let shape = Shape::assume(&grid);
        assert_eq!(shape, Shape::new(0, 0));
        assert!(shape.is_empty());
    }

    #[test]
    fn empty_row_is_empty_shape() {
        let grid: Vec<Vec<u8>> = vec![Vec::new()];
        let shape = Shape::of(&grid).unwrap();
        assert_eq!(shape, Shape::new(1, 0));
        assert!(shape.is_empty());
        assert_eq!(shape.cell_count(), 0);
    }

    #[test]
    fn of_accepts_arrays() {
        let shape = Shape::of(&[[0u8; 4]; 3]).unwrap();
        assert_eq!(shape.cell_count(), 12);
    }

    #[test]
    fn checked_cell_count_detects_overflow() {
        assert_eq!(Shape::new(3, 4).checked_cell_count(), Some(12));
        assert_eq!(Shape::new(usize::MAX, 0).checked_cell_count(), Some(0));
        assert_eq!(Shape::new(usize::MAX / 2 + 1, 2).checked_cell_count(), None);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn cell_count_panics_on_overflow() {
        Shape::new(usize::MAX, 2).cell_count();
    }

    #[test]
    fn of_reports_first_offending_row() {
        let grid = vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7, 8]];
        assert_eq!(
            Shape::of(&grid),
            Err(GridError::Jagged {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn of_rejects_row_longer_than_first() {
        let grid = vec![vec![], vec![1]];
        assert!(matches!(
            Shape::of(&grid),
            Err(GridError::Jagged { row: 1, expected: 0, found: 1 })
        ));
    }
}
