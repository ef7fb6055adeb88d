//! Print a grid and its clockwise spiral rendering.
//!
//! Run with `RUST_LOG=spiral=trace` to see the traversal events.

use spiral::{spiral_string, SpiralConfig, SpiralError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SpiralError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let grid = [[2, 3, 4, 8], [5, 7, 9, 12], [1, 0, 6, 10]];

    println!("Input");
    for row in &grid {
        println!("  {row:?}");
    }

    println!("\nOutput");
    println!("  {}", spiral_string(&grid));

    let arrows = SpiralConfig {
        separator: " -> ".into(),
        ..SpiralConfig::default()
    };
    println!("  {}", arrows.render(&grid)?);

    let jagged = vec![vec![1, 2, 3], vec![4, 5]];
    if let Err(e) = SpiralConfig::default().render(&jagged) {
        println!("\nRejected {jagged:?}: {e}");
    }
    Ok(())
}
