//! Joint projection and construction for nichiyou-daiku.
//!
//! Given two [`BoundAnchor`](nd_model::BoundAnchor)s on either side of a
//! [`Connection`](nd_model::Connection), this crate computes the concrete
//! joint geometry: where each side's fastener (or contact face) sits in its
//! own piece's local frame, and how a point known on one piece's face
//! projects onto the other's.
//!
//! # Architecture
//!
//! 1. [`projection::project_surface_point`] carries a point from one piece's
//!    contact face to the other's, given how their anchors are glued
//!    together.
//! 2. [`joints::joint_pairs_for`] applies the connection-kind policy table to
//!    produce the actual [`JointPair`]s for a [`Connection`](nd_model::Connection).

pub mod error;
pub mod joint;
pub mod joints;
pub mod projection;

pub use error::JoineryError;
pub use joint::{Hole, Joint, JointPair};
pub use joints::{dowel_joint_pairs, joint_pairs_for, vanilla_joint_pair};
pub use projection::{project_joint, project_surface_point};
