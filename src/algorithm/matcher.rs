//! Nearest-candidate lookup by signature distance

use crate::algorithm::index::{Index, IndexEntry};
use crate::analysis::signature::{Signature, Subpixel};
use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, GenericImageView};
use num_traits::AsPrimitive;

/// Entry whose signature is closest to `signature`
///
/// Linear scan with a strict less-than comparison, so the earliest entry wins
/// ties. `None` only for an empty index.
pub fn closest_entry<'a>(index: &'a Index, signature: &Signature) -> Option<&'a IndexEntry> {
    let mut best: Option<(&IndexEntry, f64)> = None;
    for entry in index {
        let distance = entry.signature.distance(signature);
        if best.is_none_or(|(_, min_distance)| distance < min_distance) {
            best = Some((entry, distance));
        }
    }
    best.map(|(entry, _)| entry)
}

/// Candidate image that best matches the mean colour of `query`
///
/// # Errors
///
/// Returns an error if:
/// - The index has no entries (checked before any pixel work)
/// - The query image has no pixels
pub fn find_closest<'a, I>(query: &I, index: &'a Index) -> Result<&'a DynamicImage>
where
    I: GenericImageView,
    Subpixel<I>: AsPrimitive<f64>,
{
    if index.is_empty() {
        return Err(MosaicError::EmptyIndex);
    }

    let signature = Signature::compute(query)?;
    closest_entry(index, &signature)
        .map(|entry| &entry.image)
        .ok_or(MosaicError::EmptyIndex)
}
