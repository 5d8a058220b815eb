//! Error types for tiling, indexing and matching operations

use std::fmt;
use std::path::PathBuf;

/// Image axis that failed tile-size validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Horizontal axis
    Width,
    /// Vertical axis
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Image dimension is not an exact multiple of the tile size
    Dimension {
        /// Which axis failed
        dimension: Dimension,
        /// Image extent along that axis
        size: u32,
        /// Tile extent along that axis
        tile_size: u32,
    },

    /// One or more directory entries could not be indexed
    ///
    /// Carries every per-entry failure; no partial index survives this error.
    IndexBuild {
        /// Directory that was being indexed
        directory: PathBuf,
        /// Every failing entry, in the order the failures were received
        failures: Vec<MosaicError>,
    },

    /// A match was requested against an index with no entries
    EmptyIndex,

    /// Recompose received a different number of tiles than the grid holds
    TileCountMismatch {
        /// Number of tile rectangles in the grid
        expected: usize,
        /// Number of replacement tiles supplied
        actual: usize,
    },

    /// Signature requested for an image without pixels
    ZeroPixelSignature {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the generated mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The indexing worker pool could not be started
    WorkerPool {
        /// Requested number of worker threads
        threads: usize,
        /// Description of the failure
        reason: String,
    },

    /// An indexing worker stopped without reporting a result
    WorkerLost {
        /// Entries whose results never arrived
        missing: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension {
                dimension,
                size,
                tile_size,
            } => {
                write!(
                    f,
                    "Image {dimension} {size} must be divisible by tile {dimension} {tile_size}"
                )
            }
            Self::IndexBuild {
                directory,
                failures,
            } => {
                write!(
                    f,
                    "Failed to index {} of the entries in '{}':",
                    failures.len(),
                    directory.display()
                )?;
                for failure in failures {
                    write!(f, "\n{failure}")?;
                }
                Ok(())
            }
            Self::EmptyIndex => f.write_str("Cannot match against an empty index"),
            Self::TileCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Recompose expected {expected} tiles but received {actual}"
                )
            }
            Self::ZeroPixelSignature { width, height } => {
                write!(
                    f,
                    "Cannot compute a signature for a {width}x{height} image with no pixels"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WorkerPool { threads, reason } => {
                write!(f, "Failed to start {threads} indexing workers: {reason}")
            }
            Self::WorkerLost { missing } => {
                write!(
                    f,
                    "Indexing workers stopped before reporting {missing} result(s)"
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
