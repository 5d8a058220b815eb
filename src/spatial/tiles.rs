//! Tile rectangles and their row-major enumeration
//!
//! Coordinates are pixel addresses in the owning image, so the grid always
//! starts at (0, 0) and advances left to right, then top to bottom.

/// Axis-aligned tile bounds, `min` inclusive and `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Left edge
    pub x0: u32,
    /// Top edge
    pub y0: u32,
    /// Right edge (exclusive)
    pub x1: u32,
    /// Bottom edge (exclusive)
    pub y1: u32,
}

impl TileRect {
    /// Rectangle of the given size anchored at `(x, y)`
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    /// Horizontal extent in pixels
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Vertical extent in pixels
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Top-left corner as `(x, y)`
    pub const fn origin(&self) -> (u32, u32) {
        (self.x0, self.y0)
    }
}

/// Enumerate the whole tiles covering a `width` x `height` area
///
/// The outer loop walks rows in steps of `tile_height`, the inner loop walks
/// columns in steps of `tile_width`. A partial tile at the right or bottom
/// edge is left out, so every rectangle lies inside the area. A zero tile
/// extent or an empty area yields no rectangles.
pub fn tile_rectangles(
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
) -> Vec<TileRect> {
    if tile_width == 0 || tile_height == 0 {
        return Vec::new();
    }

    let columns = width / tile_width;
    let rows = height / tile_height;
    let mut out = Vec::with_capacity((columns as usize) * (rows as usize));

    for row in 0..rows {
        for column in 0..columns {
            out.push(TileRect::new(
                column * tile_width,
                row * tile_height,
                tile_width,
                tile_height,
            ));
        }
    }
    out
}
