//! Traversal invariant test helpers.
//!
//! These functions check the guarantees every spiral traversal must keep.
//! The shape-level suite runs from the `order` tests; the purity checks are
//! shared by the `order`, `render` and `config` tests.

use crate::bounds::Bounds;
use crate::order::{spiral_order, walk, SpiralIndices};
use crate::shape::Shape;
use indexmap::IndexSet;
use std::fmt::Debug;

/// Assert that `walk` reports exactly `rows * cols` positions.
pub fn assert_visit_count(shape: Shape) {
    let mut count = 0usize;
    walk(shape, |_, _| count += 1);
    assert_eq!(
        count,
        shape.cell_count(),
        "walk({shape:?}) visited {count} cells, expected {}",
        shape.cell_count()
    );
}

/// Assert that no position is reported twice and all are in bounds.
pub fn assert_visits_unique_and_in_bounds(shape: Shape) {
    let mut seen = IndexSet::new();
    walk(shape, |row, col| {
        assert!(
            row < shape.rows && col < shape.cols,
            "walk({shape:?}) reported out-of-bounds position ({row}, {col})"
        );
        assert!(
            seen.insert((row, col)),
            "walk({shape:?}) reported ({row}, {col}) twice"
        );
    });
}

/// Assert that two walks over the same shape agree.
pub fn assert_walk_deterministic(shape: Shape) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    walk(shape, |r, c| a.push((r, c)));
    walk(shape, |r, c| b.push((r, c)));
    assert_eq!(a, b, "walk({shape:?}) is non-deterministic");
}

/// Assert that [`SpiralIndices`] yields the sequence `walk` reports.
pub fn assert_iterator_matches_walk(shape: Shape) {
    let mut walked = Vec::new();
    walk(shape, |r, c| walked.push((r, c)));
    let lazy: Vec<_> = SpiralIndices::new(shape).collect();
    assert_eq!(walked, lazy, "SpiralIndices({shape:?}) diverges from walk");
}

/// Assert that the outer ring is visited before anything inside it.
pub fn assert_outer_ring_first(shape: Shape) {
    if shape.is_empty() {
        return;
    }
    let ring = if shape.rows == 1 || shape.cols == 1 {
        shape.cell_count()
    } else {
        2 * (shape.rows + shape.cols) - 4
    };
    let on_ring = |&(r, c): &(usize, usize)| {
        r == 0 || c == 0 || r == shape.rows - 1 || c == shape.cols - 1
    };
    let positions: Vec<_> = SpiralIndices::new(shape).collect();
    assert!(
        positions[..ring].iter().all(on_ring),
        "walk({shape:?}) left the outer ring early"
    );
    assert!(
        !positions[ring..].iter().any(on_ring),
        "walk({shape:?}) returned to the outer ring"
    );
}

/// Assert that a fresh cursor for `shape` encloses every cell.
pub fn assert_bounds_cover_shape(shape: Shape) {
    let b = Bounds::new(shape);
    assert_eq!(b.remaining(), shape.cell_count());
    assert_eq!(b.is_empty(), shape.is_empty());
}

/// Assert that repeated traversals of `grid` agree and leave it untouched.
pub fn assert_order_pure<T: Clone + PartialEq + Debug>(grid: &[Vec<T>]) {
    let before = grid.to_vec();
    let first: Vec<T> = spiral_order(grid).into_iter().cloned().collect();
    let second: Vec<T> = spiral_order(grid).into_iter().cloned().collect();
    assert_eq!(first, second, "spiral_order is non-deterministic");
    assert_eq!(grid, &before[..], "spiral_order modified its input");
}

/// Assert that `render` gives the same text on every call and leaves
/// `grid` untouched.
pub fn assert_render_pure<T: Clone + PartialEq + Debug>(
    grid: &[Vec<T>],
    render: impl Fn(&[Vec<T>]) -> String,
) {
    let before = grid.to_vec();
    let first = render(grid);
    let second = render(grid);
    assert_eq!(first, second, "rendering is non-deterministic");
    assert_eq!(grid, &before[..], "rendering modified its input");
}

/// Run all shape-level compliance checks.
pub fn run_full_compliance(shape: Shape) {
    assert_visit_count(shape);
    assert_visits_unique_and_in_bounds(shape);
    assert_walk_deterministic(shape);
    assert_iterator_matches_walk(shape);
    assert_outer_ring_first(shape);
    assert_bounds_cover_shape(shape);
}
