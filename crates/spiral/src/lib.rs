//! Clockwise spiral traversal of rectangular grids.
//!
//! A grid is visited outer ring first, starting at the top-left corner and
//! moving clockwise, then the same pattern repeats on the rectangle left
//! inside. Every cell is visited exactly once and the input is never
//! modified.
//!
//! # Entry points
//!
//! - [`spiral_order`]: elements in spiral order, assuming a rectangular grid
//! - [`try_spiral_order`]: same, rejecting jagged grids with [`GridError`]
//! - [`spiral_order_flat`]: traversal of a row-major buffer of a [`Shape`]
//! - [`spiral_string`]: elements rendered and joined with `", "`
//! - [`SpiralConfig`]: configurable separator and validation policy
//! - [`walk`] / [`SpiralIndices`]: the `(row, col)` positions themselves
//!
//! ```
//! use spiral::spiral_string;
//!
//! let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! assert_eq!(spiral_string(&grid), "1, 2, 3, 6, 9, 8, 7, 4, 5");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod order;
pub mod render;
pub mod shape;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::{Bounds, Edge};
pub use config::{SpiralConfig, Validation};
pub use error::{ConfigError, GridError, SpiralError};
pub use order::{spiral_order, spiral_order_flat, try_spiral_order, walk, SpiralIndices};
pub use render::{join, spiral_string, SEPARATOR};
pub use shape::Shape;
