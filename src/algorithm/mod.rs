/// Mosaic orchestration over the tile grid
pub mod executor;
/// Concurrent candidate indexing
pub mod index;
/// Closest-candidate lookup
pub mod matcher;
