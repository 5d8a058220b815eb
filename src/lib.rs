//! Photomosaic generation by mean-colour matching
//!
//! A source image is carved into a fixed grid of tiles. Each tile is replaced
//! by the candidate from a pre-built library whose average colour is closest,
//! resized to the tile, and the grid is written back into the image.

#![forbid(unsafe_code)]

/// Index building, candidate matching and mosaic orchestration
pub mod algorithm;
/// Colour signatures summarising whole images
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile grid enumeration and recomposition
pub mod spatial;

pub use io::error::{MosaicError, Result};
