//! Textual rendering of a spiral traversal.

use std::fmt;

use crate::order::spiral_order;

/// Separator placed between rendered elements.
pub const SEPARATOR: &str = ", ";

/// Join the `Display` forms of `items` with `separator`.
///
/// No separator is written before the first item or after the last; an
/// empty iterator gives the empty string.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render `grid` in clockwise spiral order as `"a, b, c"`.
///
/// Unchecked like [`spiral_order`]: the grid is assumed rectangular.
///
/// # Examples
///
/// ```
/// use spiral::spiral_string;
///
/// let grid = [[2, 3, 4, 8], [5, 7, 9, 12], [1, 0, 6, 10]];
/// assert_eq!(spiral_string(&grid), "2, 3, 4, 8, 12, 10, 6, 0, 1, 5, 7, 9");
///
/// let empty: [[u8; 0]; 1] = [[]];
/// assert_eq!(spiral_string(&empty), "");
/// ```
pub fn spiral_string<T: fmt::Display, R: AsRef<[T]>>(grid: &[R]) -> String {
    join(spiral_order(grid), SEPARATOR)
}
