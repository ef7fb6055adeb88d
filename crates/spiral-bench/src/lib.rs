//! Grid profiles for benchmarking spiral traversals.
//!
//! - [`square_profile`]: 1000x1000 grid (1M cells)
//! - [`wide_profile`]: 16x65536 grid (~1M cells, many short rings)
//! - [`scrambled_grid`]: deterministic pseudo-random cell values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spiral::Shape;

/// Shape of the square benchmark grid.
pub fn square_profile() -> Shape {
    Shape::new(1000, 1000)
}

/// Shape of the wide benchmark grid.
pub fn wide_profile() -> Shape {
    Shape::new(16, 65_536)
}

/// Build a grid of `shape` filled with deterministic pseudo-random values.
pub fn scrambled_grid(shape: Shape, seed: u64) -> Vec<Vec<u64>> {
    (0..shape.rows)
        .map(|r| {
            (0..shape.cols)
                .map(|c| {
                    let i = (r * shape.cols + c) as u64 ^ seed;
                    i.wrapping_mul(6364136223846793007)
                        .wrapping_add(1442695040888963407)
                        >> 16
                })
                .collect()
        })
        .collect()
}
