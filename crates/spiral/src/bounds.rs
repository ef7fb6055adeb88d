//! Boundary cursor delimiting the unvisited part of a grid.

use crate::shape::Shape;

/// One side of the unvisited rectangle, in clockwise visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top row, walked left to right.
    Top,
    /// Rightmost column, walked top to bottom.
    Right,
    /// Bottom row, walked right to left.
    Bottom,
    /// Leftmost column, walked bottom to top.
    Left,
}

impl Edge {
    /// The edge walked after this one.
    pub fn next(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }
}

/// Four shrinking bounds over a grid: `left..right` columns and
/// `top..bottom` rows are still unvisited.
///
/// Starts at the full extent of a [`Shape`]. Each [`contract`](Bounds::contract)
/// moves exactly one bound inward by one; bounds never move back out, and
/// `left <= right`, `top <= bottom` hold throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    left: usize,
    right: usize,
    top: usize,
    bottom: usize,
}

impl Bounds {
    /// Bounds covering every cell of `shape`.
    pub fn new(shape: Shape) -> Self {
        Self {
            left: 0,
            right: shape.cols,
            top: 0,
            bottom: shape.rows,
        }
    }

    /// First unvisited column.
    pub fn left(&self) -> usize {
        self.left
    }

    /// One past the last unvisited column.
    pub fn right(&self) -> usize {
        self.right
    }

    /// First unvisited row.
    pub fn top(&self) -> usize {
        self.top
    }

    /// One past the last unvisited row.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// True once no rows or no columns remain.
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }

    /// Number of cells still enclosed.
    ///
    /// # Panics
    ///
    /// Panics if the enclosed cell count overflows `usize`, which can only
    /// happen for a cursor built from such a [`Shape`].
    pub fn remaining(&self) -> usize {
        Shape::new(self.bottom - self.top, self.right - self.left).cell_count()
    }

    /// Number of cells along `edge` of the enclosed rectangle.
    pub fn edge_len(&self, edge: Edge) -> usize {
        match edge {
            Edge::Top | Edge::Bottom => self.right - self.left,
            Edge::Right | Edge::Left => self.bottom - self.top,
        }
    }

    /// Position `(row, col)` of the `step`-th cell walked along `edge`.
    ///
    /// `step` must be less than [`edge_len`](Bounds::edge_len).
    pub(crate) fn cell(&self, edge: Edge, step: usize) -> (usize, usize) {
        debug_assert!(step < self.edge_len(edge));
        match edge {
            Edge::Top => (self.top, self.left + step),
            Edge::Right => (self.top + step, self.right - 1),
            Edge::Bottom => (self.bottom - 1, self.right - 1 - step),
            Edge::Left => (self.bottom - 1 - step, self.left),
        }
    }

    /// Move the bound on `edge` one unit inward.
    ///
    /// No-op when that axis has nothing left, so the invariants
    /// `left <= right` and `top <= bottom` cannot be broken.
    pub fn contract(&mut self, edge: Edge) {
        match edge {
            Edge::Top if self.top < self.bottom => self.top += 1,
            Edge::Bottom if self.top < self.bottom => self.bottom -= 1,
            Edge::Left if self.left < self.right => self.left += 1,
            Edge::Right if self.left < self.right => self.right -= 1,
            _ => {}
        }
    }
}
