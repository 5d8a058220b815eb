//! Command-line interface: index a library, tile a source image, write the mosaic

use crate::algorithm::executor::{MosaicConfig, generate_mosaic_with_progress};
use crate::algorithm::index::IndexBuilder;
use crate::io::configuration::{
    DEFAULT_MAX_IN_FLIGHT, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{AnyFormat, FixedFormat, load_source, save_image};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::Matrix;
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resampling filter used to fit candidates into tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// Nearest neighbour
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => Self::Nearest,
            Filter::Triangle => Self::Triangle,
            Filter::CatmullRom => Self::CatmullRom,
            Filter::Gaussian => Self::Gaussian,
            Filter::Lanczos3 => Self::Lanczos3,
        }
    }
}

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image out of a library of smaller images"
)]
/// Command-line arguments for mosaic generation
pub struct Cli {
    /// Image to turn into a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of candidate tile images
    #[arg(value_name = "LIBRARY")]
    pub library: PathBuf,

    /// Output path (defaults to <SOURCE stem>_mosaic.<ext> beside the source)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tile width in pixels; must divide the source width
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels; must divide the source height
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Maximum candidates opened and decoded at once
    #[arg(short = 'j', long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    pub max_in_flight: usize,

    /// Only accept JPEG candidates
    #[arg(long)]
    pub jpeg_only: bool,

    /// Resampling filter for fitting candidates into tiles
    #[arg(short, long, value_enum, default_value_t = Filter::Lanczos3)]
    pub filter: Filter,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the mosaic will be written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.source))
    }

    /// Mosaic parameters selected on the command line
    pub fn mosaic_config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            filter: self.filter.into(),
        }
    }
}

/// Runs one mosaic job described by the command line
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the index, generate the mosaic and save it
    ///
    /// The source image and tile size are validated before any candidate is
    /// read, and nothing is written unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be loaded
    /// - The source dimensions are not multiples of the tile size
    /// - The library cannot be indexed or is empty
    /// - The mosaic cannot be saved
    ///
    /// Progress bars are cleared whether or not the run succeeds.
    pub fn process(&mut self) -> Result<()> {
        let outcome = self.run();
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        outcome
    }

    /// Progress display, absent when running quietly
    pub const fn progress_manager(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.mosaic_config();

        let source = load_source(&self.cli.source)?;
        let source = Matrix::new(source, config.tile_width, config.tile_height)?.into_inner();

        let builder = self.index_builder()?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_indexing();
        }
        let index = builder.build_with_progress(&self.cli.library, |received, total| {
            if let Some(ref pm) = self.progress_manager {
                pm.update_indexing(received, total);
            }
        })?;

        let tile_count = ((source.width() / config.tile_width) as usize)
            * ((source.height() / config.tile_height) as usize);
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_matching(tile_count);
        }
        let matching_bar = self
            .progress_manager
            .as_ref()
            .and_then(ProgressManager::matching_bar);

        let mosaic = generate_mosaic_with_progress(source, &index, &config, || {
            if let Some(ref bar) = matching_bar {
                bar.inc(1);
            }
        })?;

        let output_path = self.cli.output_path();
        save_image(mosaic, &output_path)?;

        info!(
            "Wrote '{}' from {} candidates in {:.2?}",
            output_path.display(),
            index.len(),
            start_time.elapsed()
        );
        Ok(())
    }

    fn index_builder(&self) -> Result<IndexBuilder> {
        let builder = if self.cli.jpeg_only {
            IndexBuilder::new(FixedFormat::jpeg())
        } else {
            IndexBuilder::new(AnyFormat)
        };
        builder.with_max_in_flight(self.cli.max_in_flight)
    }
}

/// `<stem>_mosaic.<ext>` next to `input_path`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        extension.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
