//! Traversal configuration.

use std::fmt;

use crate::error::{ConfigError, SpiralError};
use crate::order::{spiral_order, try_spiral_order};
use crate::render::{join, SEPARATOR};
use crate::shape::Shape;

/// How a configured traversal treats the rectangularity of its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject grids whose rows differ in length.
    #[default]
    Strict,
    /// Take the first row's width and skip missing cells.
    Unchecked,
}

/// Configuration for rendering spiral traversals.
///
/// # Examples
///
/// ```
/// use spiral::{GridError, SpiralConfig, SpiralError};
///
/// let config = SpiralConfig {
///     separator: " ".into(),
///     ..SpiralConfig::default()
/// };
/// assert_eq!(config.render(&[[1, 2], [3, 4]]).unwrap(), "1 2 4 3");
///
/// let jagged = vec![vec![1, 2], vec![3]];
/// assert!(matches!(
///     config.render(&jagged),
///     Err(SpiralError::Grid(GridError::Jagged { row: 1, .. }))
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpiralConfig {
    /// Text placed between rendered elements.
    ///
    /// Default: `", "`. Must not be empty.
    pub separator: String,

    /// Rectangularity policy. Default: [`Validation::Strict`].
    pub validation: Validation,
}

impl SpiralConfig {
    /// Default separator between rendered elements.
    pub const DEFAULT_SEPARATOR: &'static str = SEPARATOR;

    /// Create a config with the default separator and strict validation.
    pub fn new() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR.to_owned(),
            validation: Validation::default(),
        }
    }

    /// Check the config for values no traversal can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }

    /// Elements of `grid` in spiral order under this config's validation.
    pub fn order<'a, T, R: AsRef<[T]>>(&self, grid: &'a [R]) -> Result<Vec<&'a T>, SpiralError> {
        match self.validation {
            Validation::Strict => Ok(try_spiral_order(grid)?),
            Validation::Unchecked => Ok(spiral_order(grid)),
        }
    }

    /// Render `grid` in spiral order, joined with this config's separator.
    pub fn render<T: fmt::Display, R: AsRef<[T]>>(&self, grid: &[R]) -> Result<String, SpiralError> {
        self.validate()?;
        let shape = Shape::assume(grid);
        tracing::trace!(
            rows = shape.rows,
            cols = shape.cols,
            validation = ?self.validation,
            "rendering spiral"
        );
        let cells = self.order(grid)?;
        Ok(join(cells, &self.separator))
    }
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self::new()
    }
}
