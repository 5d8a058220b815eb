//! Concurrent indexing of a candidate image directory
//!
//! Every directory entry becomes one job on a dedicated worker pool whose
//! thread count caps how many files are open and decoding at once. Jobs
//! report through a single channel and the builder waits for exactly one
//! report per entry. Any failed entry fails the whole build.
//!
//! There is no timeout: a decoder that never returns stalls the build.

use crate::analysis::signature::Signature;
use crate::io::configuration::DEFAULT_MAX_IN_FLIGHT;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{AnyFormat, CandidateDecoder};
use image::DynamicImage;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};

/// One candidate image paired with its signature
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Where the candidate was loaded from
    pub path: PathBuf,
    /// Decoded candidate pixels
    pub image: DynamicImage,
    /// Mean-colour signature of `image`
    pub signature: Signature,
}

impl IndexEntry {
    /// Sign an image that is already in memory
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Result<Self> {
        let signature = Signature::compute(&image)?;
        Ok(Self {
            path: path.into(),
            image,
            signature,
        })
    }
}

/// In-memory collection of signed candidates
///
/// Entries appear in the order their jobs completed, which is unrelated to
/// directory listing order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    /// Index with no entries
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of indexed candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no candidates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in index order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Iterate entries in index order
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }
}

impl From<Vec<IndexEntry>> for Index {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds an [`Index`] from every entry of a directory
pub struct IndexBuilder {
    decoder: Arc<dyn CandidateDecoder>,
    max_in_flight: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(AnyFormat)
    }
}

impl IndexBuilder {
    /// Builder that decodes candidates with `decoder`
    pub fn new(decoder: impl CandidateDecoder + 'static) -> Self {
        Self {
            decoder: Arc::new(decoder),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Cap the number of candidates opened and decoded at once
    ///
    /// # Errors
    ///
    /// Returns an error if `max_in_flight` is zero
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Result<Self> {
        if max_in_flight == 0 {
            return Err(invalid_parameter(
                "max_in_flight",
                &max_in_flight,
                &"at least one file must be allowed in flight",
            ));
        }
        self.max_in_flight = max_in_flight;
        Ok(self)
    }

    /// Configured concurrency cap
    pub const fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Index every entry of `directory`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be listed
    /// - The worker pool cannot be started
    /// - Any entry cannot be opened, decoded or signed; the error lists every
    ///   failing entry and no partial index is returned
    pub fn build(&self, directory: &Path) -> Result<Index> {
        self.build_with_progress(directory, |_, _| {})
    }

    /// Index every entry of `directory`, reporting `(received, total)` after
    /// each job result arrives
    ///
    /// `on_result` runs on the calling thread.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`]
    pub fn build_with_progress(
        &self,
        directory: &Path,
        mut on_result: impl FnMut(usize, usize),
    ) -> Result<Index> {
        let paths = list_entries(directory)?;
        let total = paths.len();
        if total == 0 {
            info!("No candidates found in '{}'", directory.display());
            return Ok(Index::new());
        }

        let threads = self.max_in_flight.min(total);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("index-worker-{i}"))
            .panic_handler(|_| error!("Index worker panicked before reporting its result"))
            .build()
            .map_err(|e| MosaicError::WorkerPool {
                threads,
                reason: e.to_string(),
            })?;

        let (sender, receiver) = mpsc::channel();
        for path in paths {
            let sender = sender.clone();
            let decoder = Arc::clone(&self.decoder);
            pool.spawn(move || {
                let outcome = index_entry(decoder.as_ref(), path);
                // The receiver only goes away once every result has been drained
                let _ = sender.send(outcome);
            });
        }
        // Leaves only job-held senders, so a dead job disconnects the channel
        drop(sender);

        let mut entries = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for received in 0..total {
            match receiver.recv() {
                Ok(Ok(entry)) => entries.push(entry),
                Ok(Err(failure)) => {
                    warn!("{failure}");
                    failures.push(failure);
                }
                Err(mpsc::RecvError) => {
                    failures.push(MosaicError::WorkerLost {
                        missing: total - received,
                    });
                    break;
                }
            }
            on_result(received + 1, total);
        }

        if !failures.is_empty() {
            return Err(MosaicError::IndexBuild {
                directory: directory.to_path_buf(),
                failures,
            });
        }

        info!(
            "Indexed {} candidates from '{}' with {threads} workers",
            entries.len(),
            directory.display()
        );
        Ok(Index::from(entries))
    }
}

fn list_entries(directory: &Path) -> Result<Vec<PathBuf>> {
    let listing_error = |e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "list directory",
        source: e,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(listing_error)? {
        paths.push(entry.map_err(listing_error)?.path());
    }
    paths.sort();
    Ok(paths)
}

// The file handle is dropped once decoding returns, before signing starts
fn index_entry(decoder: &dyn CandidateDecoder, path: PathBuf) -> Result<IndexEntry> {
    let image = {
        let file = File::open(&path).map_err(|e| MosaicError::FileSystem {
            path: path.clone(),
            operation: "open",
            source: e,
        })?;
        decoder
            .decode(BufReader::new(file))
            .map_err(|e| MosaicError::ImageLoad {
                path: path.clone(),
                source: e,
            })?
    };

    let entry = IndexEntry::from_image(path, image)?;
    debug!("Indexed '{}' as {}", entry.path.display(), entry.signature);
    Ok(entry)
}
