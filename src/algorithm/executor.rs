//! Mosaic generation: tile the source, match each tile, write the matches back

use crate::algorithm::index::Index;
use crate::algorithm::matcher::find_closest;
use crate::io::configuration::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};
use crate::io::error::{MosaicError, Result};
use crate::spatial::grid::Matrix;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Parameters controlling how a source image is tiled and rebuilt
#[derive(Clone, Copy, Debug)]
pub struct MosaicConfig {
    /// Tile width in pixels; must divide the source width
    pub tile_width: u32,
    /// Tile height in pixels; must divide the source height
    pub tile_height: u32,
    /// Resampling filter used to fit candidates to the tile size
    pub filter: FilterType,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            filter: FilterType::Lanczos3,
        }
    }
}

/// Replace every tile of `source` with its closest candidate from `index`
///
/// # Errors
///
/// Returns an error if:
/// - A tile extent is zero or does not divide the matching source extent
/// - The index has no entries
///
/// No partial mosaic is ever returned.
pub fn generate_mosaic(
    source: RgbaImage,
    index: &Index,
    config: &MosaicConfig,
) -> Result<RgbaImage> {
    generate_mosaic_with_progress(source, index, config, || {})
}

/// Same as [`generate_mosaic`], calling `on_tile` once per matched tile
///
/// Tiles are matched and resized in parallel; `on_tile` may run on any
/// worker thread. Replacements are reassembled by tile position, never by
/// completion order.
///
/// # Errors
///
/// Same as [`generate_mosaic`]
pub fn generate_mosaic_with_progress(
    source: RgbaImage,
    index: &Index,
    config: &MosaicConfig,
    on_tile: impl Fn() + Sync,
) -> Result<RgbaImage> {
    let mut matrix = Matrix::new(source, config.tile_width, config.tile_height)?;
    if index.is_empty() {
        return Err(MosaicError::EmptyIndex);
    }

    let replacements = matrix
        .tiles()
        .into_par_iter()
        .map(|tile| {
            let candidate = find_closest(&*tile, index)?;
            let resized =
                imageops::resize(candidate, config.tile_width, config.tile_height, config.filter);
            on_tile();
            Ok(resized)
        })
        .collect::<Result<Vec<RgbaImage>>>()?;

    matrix.recompose(&replacements)?;

    let (width, height) = matrix.image().dimensions();
    info!(
        "Composed {width}x{height} mosaic from {} tiles of {}x{}",
        replacements.len(),
        config.tile_width,
        config.tile_height
    );
    Ok(matrix.into_inner())
}
