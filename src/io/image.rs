//! Decode and encode collaborators for candidate, source and output images

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decodes an opened candidate file into pixels
///
/// Injected into the index builder so that independent builds can accept
/// different format sets within the same process.
pub trait CandidateDecoder: Send + Sync {
    /// Decode one image from an open file
    ///
    /// # Errors
    ///
    /// Returns the codec error if the bytes are not a supported image
    fn decode(&self, reader: BufReader<File>) -> ImageResult<DynamicImage>;
}

/// Detects the format by sniffing the file contents
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFormat;

impl CandidateDecoder for AnyFormat {
    fn decode(&self, reader: BufReader<File>) -> ImageResult<DynamicImage> {
        ImageReader::new(reader).with_guessed_format()?.decode()
    }
}

/// Accepts exactly one format and rejects everything else
#[derive(Debug, Clone, Copy)]
pub struct FixedFormat(pub ImageFormat);

impl FixedFormat {
    /// Baseline JPEG only
    pub const fn jpeg() -> Self {
        Self(ImageFormat::Jpeg)
    }
}

impl CandidateDecoder for FixedFormat {
    fn decode(&self, reader: BufReader<File>) -> ImageResult<DynamicImage> {
        image::load(reader, self.0)
    }
}

/// Load the image a mosaic will be built over
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save a finished mosaic, creating parent directories as needed
///
/// Formats without an alpha channel receive the RGB channels only.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension does not name a supported format
/// - The image cannot be encoded or written
pub fn save_image(image: RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let format = ImageFormat::from_path(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    let dynamic = DynamicImage::ImageRgba8(image);
    let saved = if format == ImageFormat::Jpeg {
        dynamic.to_rgb8().save_with_format(path, format)
    } else {
        dynamic.save_with_format(path, format)
    };

    saved.map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
