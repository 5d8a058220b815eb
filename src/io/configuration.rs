//! Runtime configuration defaults

// Bounds open file descriptors and decode buffers during indexing
/// Maximum number of candidate files opened and decoded at once
pub const DEFAULT_MAX_IN_FLIGHT: usize = 50;

/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 200;
/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 150;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
