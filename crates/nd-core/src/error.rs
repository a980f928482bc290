use thiserror::Error;

use crate::geometry::Face;

/// Low-level geometry errors, raised while constructing the value types in
/// [`crate::geometry`]. Higher crates (`nd-model`, `nd-joinery`) wrap these
/// with `#[from]` rather than duplicating the variants.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("faces {0:?} and {1:?} are not adjacent")]
    NotAdjacent(Face, Face),

    #[error("offset value must be non-negative, got {0}")]
    NegativeOffset(f64),

    #[error("offset {offset} is out of range for edge of length {edge_length}")]
    OffsetOutOfRange { edge_length: f64, offset: f64 },

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("direction and up vectors are parallel, cannot form an orientation")]
    ParallelOrientationVectors,
}
