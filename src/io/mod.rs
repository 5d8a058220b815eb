//! Input/output operations and error handling

/// Command-line front end
pub mod cli;
/// Named defaults for tiling, indexing and output
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Decode and encode collaborators
pub mod image;
/// Terminal progress display
pub mod progress;
