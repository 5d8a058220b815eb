//! Colour analysis of whole images

/// Mean-colour signatures and Manhattan distance
pub mod signature;
