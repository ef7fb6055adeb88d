//! Clockwise spiral traversal.
//!
//! Every entry point here is built on [`walk`], which shrinks a [`Bounds`]
//! cursor one edge at a time: top row, right column, bottom row, left
//! column, then the same again on the rectangle that remains.

use std::iter::FusedIterator;

use crate::bounds::{Bounds, Edge};
use crate::error::GridError;
use crate::shape::Shape;

/// Report every `(row, col)` position of `shape` in clockwise spiral order,
/// starting at the top-left corner.
///
/// Each position is reported exactly once; nothing is reported for an
/// empty shape.
pub fn walk(shape: Shape, mut visit: impl FnMut(usize, usize)) {
    let mut b = Bounds::new(shape);
    while !b.is_empty() {
        for col in b.left()..b.right() {
            visit(b.top(), col);
        }
        b.contract(Edge::Top);

        for row in b.top()..b.bottom() {
            visit(row, b.right() - 1);
        }
        b.contract(Edge::Right);

        // A single remaining row or column was just consumed by the two
        // passes above; walking back along it would repeat cells.
        if b.is_empty() {
            break;
        }

        for col in (b.left()..b.right()).rev() {
            visit(b.bottom() - 1, col);
        }
        b.contract(Edge::Bottom);

        for row in (b.top()..b.bottom()).rev() {
            visit(row, b.left());
        }
        b.contract(Edge::Left);
    }
}

/// Elements of `grid` in clockwise spiral order.
///
/// The grid is assumed rectangular: the column count is taken from the
/// first row and no other row is checked. Zero rows, or an empty first row,
/// give an empty result. On jagged input, positions missing from a short
/// row are skipped and cells beyond the first row's width are never
/// visited; use [`try_spiral_order`] to reject such grids instead.
///
/// # Examples
///
/// ```
/// use spiral::spiral_order;
///
/// let grid = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
/// let order: Vec<i32> = spiral_order(&grid).into_iter().copied().collect();
/// assert_eq!(order, [1, 2, 3, 6, 9, 8, 7, 4, 5]);
/// ```
pub fn spiral_order<T, R: AsRef<[T]>>(grid: &[R]) -> Vec<&T> {
    let shape = Shape::assume(grid);
    let mut out = Vec::with_capacity(shape.checked_cell_count().unwrap_or(0));
    walk(shape, |row, col| {
        if let Some(cell) = grid[row].as_ref().get(col) {
            out.push(cell);
        }
    });
    out
}

/// Elements of `grid` in clockwise spiral order, after checking that every
/// row has the same length.
///
/// # Errors
///
/// [`GridError::Jagged`] naming the first row whose length differs from
/// the first row's.
pub fn try_spiral_order<T, R: AsRef<[T]>>(grid: &[R]) -> Result<Vec<&T>, GridError> {
    let shape = Shape::of(grid)?;
    let mut out = Vec::with_capacity(shape.checked_cell_count().unwrap_or(0));
    walk(shape, |row, col| out.push(&grid[row].as_ref()[col]));
    Ok(out)
}

/// Elements of a row-major buffer of `shape` in clockwise spiral order.
///
/// # Errors
///
/// [`GridError::TooLarge`] if `rows * cols` overflows `usize`, otherwise
/// [`GridError::LengthMismatch`] if `cells.len() != shape.cell_count()`.
///
/// # Examples
///
/// ```
/// use spiral::{spiral_order_flat, Shape};
///
/// let cells = [1, 2, 3, 4, 5, 6];
/// let order = spiral_order_flat(&cells, Shape::new(2, 3)).unwrap();
/// assert_eq!(order, [&1, &2, &3, &6, &5, &4]);
/// ```
pub fn spiral_order_flat<T>(cells: &[T], shape: Shape) -> Result<Vec<&T>, GridError> {
    let Some(expected) = shape.checked_cell_count() else {
        tracing::debug!(
            rows = shape.rows,
            cols = shape.cols,
            "shape cell count overflows usize"
        );
        return Err(GridError::TooLarge {
            rows: shape.rows,
            cols: shape.cols,
        });
    };
    if cells.len() != expected {
        tracing::debug!(
            rows = shape.rows,
            cols = shape.cols,
            found = cells.len(),
            "flat buffer does not match shape"
        );
        return Err(GridError::LengthMismatch {
            expected,
            found: cells.len(),
        });
    }
    let mut out = Vec::with_capacity(expected);
    walk(shape, |row, col| out.push(&cells[row * shape.cols + col]));
    Ok(out)
}

/// Lazy iterator over the spiral positions of a [`Shape`].
///
/// Yields the same `(row, col)` sequence that [`walk`] reports, one
/// position at a time.
///
/// # Examples
///
/// ```
/// use spiral::{Shape, SpiralIndices};
///
/// let positions: Vec<_> = SpiralIndices::new(Shape::new(2, 2)).collect();
/// assert_eq!(positions, [(0, 0), (0, 1), (1, 1), (1, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct SpiralIndices {
    bounds: Bounds,
    edge: Edge,
    step: usize,
    remaining: usize,
}

impl SpiralIndices {
    /// Start a traversal at the top-left corner of `shape`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(shape: Shape) -> Self {
        Self {
            bounds: Bounds::new(shape),
            edge: Edge::Top,
            step: 0,
            remaining: shape.cell_count(),
        }
    }
}

impl Iterator for SpiralIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.bounds.is_empty() {
                return None;
            }
            if self.step < self.bounds.edge_len(self.edge) {
                let pos = self.bounds.cell(self.edge, self.step);
                self.step += 1;
                self.remaining -= 1;
                return Some(pos);
            }
            self.bounds.contract(self.edge);
            self.edge = self.edge.next();
            self.step = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SpiralIndices {}

impl FusedIterator for SpiralIndices {}
