//! Fixed-size tile grid over an owned image
//!
//! A [`Matrix`] carves its image into equally sized tiles in row-major order
//! and writes replacement tiles back into the same rectangles. Every other
//! component that talks about "tile order" means the order produced here.

use crate::io::error::{Dimension, MosaicError, Result, invalid_parameter};
use crate::spatial::tiles::{TileRect, tile_rectangles};
use image::{GenericImage, GenericImageView, SubImage};

/// Tile size bound to one owned, mutable image
///
/// The image width is an exact multiple of the tile width and the image
/// height an exact multiple of the tile height.
#[derive(Debug, Clone)]
pub struct Matrix<I> {
    image: I,
    tile_width: u32,
    tile_height: u32,
}

impl<I: GenericImage> Matrix<I> {
    /// Bind an image to a tile size
    ///
    /// Zero-area images are accepted and simply have no tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either tile extent is zero
    /// - The image width is not divisible by `tile_width`
    /// - The image height is not divisible by `tile_height`
    pub fn new(image: I, tile_width: u32, tile_height: u32) -> Result<Self> {
        if tile_width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &tile_width,
                &"must be positive",
            ));
        }
        if tile_height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &tile_height,
                &"must be positive",
            ));
        }

        let (width, height) = image.dimensions();
        if width % tile_width != 0 {
            return Err(MosaicError::Dimension {
                dimension: Dimension::Width,
                size: width,
                tile_size: tile_width,
            });
        }
        if height % tile_height != 0 {
            return Err(MosaicError::Dimension {
                dimension: Dimension::Height,
                size: height,
                tile_size: tile_height,
            });
        }

        Ok(Self {
            image,
            tile_width,
            tile_height,
        })
    }

    /// Tile rectangles in row-major order
    pub fn tile_rectangles(&self) -> Vec<TileRect> {
        let (width, height) = self.image.dimensions();
        tile_rectangles(width, height, self.tile_width, self.tile_height)
    }

    /// Number of tiles in the grid
    pub fn tile_count(&self) -> usize {
        let (width, height) = self.image.dimensions();
        ((width / self.tile_width) as usize) * ((height / self.tile_height) as usize)
    }

    /// Borrowed views of every tile, in the same order as [`Self::tile_rectangles`]
    ///
    /// A [`SubImage`] is not itself a [`GenericImageView`]; generic consumers
    /// take `&*tile`, which is.
    pub fn tiles(&self) -> Vec<SubImage<&I>> {
        self.tile_rectangles()
            .iter()
            .map(|rect| {
                self.image
                    .view(rect.x0, rect.y0, rect.width(), rect.height())
            })
            .collect()
    }

    /// Overwrite each tile rectangle with the matching replacement image
    ///
    /// `tiles[i]` is copied from its own top-left corner into the `i`-th
    /// rectangle. Only the overlap of the two is written: a smaller
    /// replacement leaves the rest of the rectangle untouched, a larger one
    /// is clipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of tiles differs from the number of
    /// tile rectangles; the image is left unmodified in that case
    pub fn recompose<T>(&mut self, tiles: &[T]) -> Result<()>
    where
        T: GenericImageView<Pixel = I::Pixel>,
    {
        let rects = self.tile_rectangles();
        if tiles.len() != rects.len() {
            return Err(MosaicError::TileCountMismatch {
                expected: rects.len(),
                actual: tiles.len(),
            });
        }

        for (rect, tile) in rects.iter().zip(tiles) {
            let width = rect.width().min(tile.width());
            let height = rect.height().min(tile.height());
            for dy in 0..height {
                for dx in 0..width {
                    self.image
                        .put_pixel(rect.x0 + dx, rect.y0 + dy, tile.get_pixel(dx, dy));
                }
            }
        }

        Ok(())
    }

    /// Configured tile size as `(width, height)`
    pub const fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Borrow the owned image
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Release the owned image
    pub fn into_inner(self) -> I {
        self.image
    }
}
