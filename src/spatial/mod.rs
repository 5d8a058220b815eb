//! Spatial data structures for tiling images
//!
//! This module contains spatial-related functionality including:
//! - Tile rectangle enumeration in row-major order
//! - The tile grid bound to an owned image

/// Tile grid over an owned image
pub mod grid;
/// Tile rectangles and their enumeration
pub mod tiles;

pub use grid::Matrix;
