//! Test utilities for spiral development.
//!
//! Provides reference grids with their known spiral renderings and
//! generators for numbered and jagged grids.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// A grid together with its expected `", "`-joined spiral rendering.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub grid: Vec<Vec<i32>>,
    pub expected: &'static str,
}

impl Fixture {
    fn new(name: &'static str, grid: Vec<Vec<i32>>, expected: &'static str) -> Self {
        Self {
            name,
            grid,
            expected,
        }
    }

    /// Expected rendering split back into its elements.
    pub fn expected_values(&self) -> Vec<i32> {
        if self.expected.is_empty() {
            return Vec::new();
        }
        self.expected
            .split(", ")
            .map(|s| s.parse().unwrap_or_else(|_| panic!("bad fixture value {s:?}")))
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }
}

/// The reference grids every traversal must reproduce exactly.
pub fn reference_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new("no_rows", vec![], ""),
        Fixture::new("empty_row", vec![vec![]], ""),
        Fixture::new("1x1", vec![vec![1]], "1"),
        Fixture::new("1x3", vec![vec![1, 2, 3]], "1, 2, 3"),
        Fixture::new("3x1", vec![vec![1], vec![2], vec![3]], "1, 2, 3"),
        Fixture::new("2x2", vec![vec![1, 2], vec![3, 4]], "1, 2, 4, 3"),
        Fixture::new(
            "3x3",
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
            "1, 2, 3, 6, 9, 8, 7, 4, 5",
        ),
        Fixture::new(
            "3x4",
            vec![vec![2, 3, 4, 8], vec![5, 7, 9, 12], vec![1, 0, 6, 10]],
            "2, 3, 4, 8, 12, 10, 6, 0, 1, 5, 7, 9",
        ),
        Fixture::new(
            "4x4",
            vec![
                vec![1, 2, 3, 4],
                vec![5, 6, 7, 8],
                vec![9, 10, 11, 12],
                vec![13, 14, 15, 16],
            ],
            "1, 2, 3, 4, 8, 12, 16, 15, 14, 13, 9, 5, 6, 7, 11, 10",
        ),
        Fixture::new(
            "4x2",
            vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]],
            "1, 2, 4, 6, 8, 7, 5, 3",
        ),
    ]
}

/// A `rows x cols` grid whose cells hold their row-major index.
pub fn numbered_grid(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| r * cols + c).collect())
        .collect()
}

/// A grid whose row `i` has `lengths[i]` cells, numbered consecutively.
pub fn jagged_grid(lengths: &[usize]) -> Vec<Vec<usize>> {
    let mut next = 0;
    lengths
        .iter()
        .map(|&len| {
            let row: Vec<usize> = (next..next + len).collect();
            next += len;
            row
        })
        .collect()
}
