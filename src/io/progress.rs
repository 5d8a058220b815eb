//! Terminal progress for the indexing and matching phases

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per mosaic phase
pub struct ProgressManager {
    multi_progress: MultiProgress,
    index_bar: Option<ProgressBar>,
    tile_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no bars shown
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            index_bar: None,
            tile_bar: None,
        }
    }

    /// Show the indexing bar; its length is learned from the first result
    pub fn start_indexing(&mut self) {
        self.index_bar = Some(self.add_bar("Indexing", 0));
    }

    /// Report `received` of `total` candidates processed
    pub fn update_indexing(&self, received: usize, total: usize) {
        if let Some(ref bar) = self.index_bar {
            bar.set_length(total as u64);
            bar.set_position(received as u64);
        }
    }

    /// Show the matching bar for `tiles` tiles
    pub fn start_matching(&mut self, tiles: usize) {
        if let Some(ref bar) = self.index_bar {
            bar.finish();
        }
        self.tile_bar = Some(self.add_bar("Matching", tiles as u64));
    }

    /// Handle to the matching bar, shareable with worker threads
    pub fn matching_bar(&self) -> Option<ProgressBar> {
        self.tile_bar.clone()
    }

    /// Whether every bar that was shown has finished
    pub fn is_idle(&self) -> bool {
        [&self.index_bar, &self.tile_bar]
            .into_iter()
            .flatten()
            .all(ProgressBar::is_finished)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for bar in [&self.index_bar, &self.tile_bar].into_iter().flatten() {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    fn add_bar(&self, prefix: &'static str, length: u64) -> ProgressBar {
        let bar = ProgressBar::new(length);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(prefix);
        self.multi_progress.add(bar)
    }
}
