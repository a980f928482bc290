pub mod anchor;
pub mod connection;
pub mod error;
pub mod model;
pub mod piece;
pub mod resources;
pub mod screw;

pub use anchor::{Anchor, BoundAnchor};
pub use connection::{Connection, ConnectionKind};
pub use error::Error;
pub use model::{Model, ModelConnection, PiecePair};
pub use piece::{Piece, PieceType};
pub use resources::{PieceResource, ResourceSummary};
pub use screw::{CoarseThreadScrew, ScrewPreset, SlimScrew};
