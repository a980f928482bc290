use thiserror::Error;

use nd_core::geometry::Face;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate piece id: {0}")]
    DuplicatePieceId(String),

    #[error("unknown piece id: {0}")]
    UnknownPieceId(String),

    #[error("fastener {dimension} exceeds the allowed envelope of {limit}")]
    FastenerTooLarge { dimension: f64, limit: f64 },

    #[error(
        "screw length {length} must exceed target thickness {target_thickness} \
         and not exceed combined thickness {combined_thickness}"
    )]
    InvalidScrewLength {
        length: f64,
        target_thickness: f64,
        combined_thickness: f64,
    },

    #[error("screw target contact face must be front or back, got {0:?}")]
    InvalidScrewFace(Face),

    #[error(transparent)]
    Core(#[from] nd_core::Error),
}
