//! Content post-processing

pub mod analysis;
