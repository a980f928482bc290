use thiserror::Error;

use nd_core::geometry::Face;

#[derive(Debug, Error)]
pub enum JoineryError {
    /// The policy table (spec §4.5) has no supported placement for this
    /// pair of contact faces — currently only front/back <-> front/back
    /// connections sharing a left/right edge face.
    #[error(
        "unsupported connection: base contact {base_face:?} / target contact {target_face:?}"
    )]
    UnsupportedConnection { base_face: Face, target_face: Face },

    #[error(transparent)]
    Model(#[from] nd_model::Error),

    #[error(transparent)]
    Core(#[from] nd_core::Error),
}
