use serde::{Deserialize, Serialize};

use nd_core::geometry::Face;

use crate::anchor::BoundAnchor;
use crate::error::Error;

/// The fastening method used at a connection between two bound anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectionKind {
    Vanilla,
    Dowel { diameter: f64, length: f64 },
    Screw { diameter: f64, length: f64 },
}

/// A fastening relationship between two bound anchors on two pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub base: BoundAnchor,
    pub target: BoundAnchor,
    pub kind: ConnectionKind,
}

impl Connection {
    pub fn vanilla(base: BoundAnchor, target: BoundAnchor) -> Connection {
        Connection {
            base,
            target,
            kind: ConnectionKind::Vanilla,
        }
    }

    pub fn dowel(
        base: BoundAnchor,
        target: BoundAnchor,
        diameter: f64,
        length: f64,
    ) -> Result<Connection, Error> {
        let kind = ConnectionKind::Dowel { diameter, length };
        validate_dowel(&base, &target, diameter, length)?;
        Ok(Connection { base, target, kind })
    }

    pub fn screw(
        base: BoundAnchor,
        target: BoundAnchor,
        diameter: f64,
        length: f64,
    ) -> Result<Connection, Error> {
        let kind = ConnectionKind::Screw { diameter, length };
        validate_screw(&base, &target, diameter, length)?;
        Ok(Connection { base, target, kind })
    }
}

fn validate_dowel(
    base: &BoundAnchor,
    target: &BoundAnchor,
    diameter: f64,
    length: f64,
) -> Result<(), Error> {
    let base_len_limit = base.piece.shape().dimension_along(base.anchor.contact_face);
    let target_len_limit = target.piece.shape().dimension_along(target.anchor.contact_face);
    let len_limit = base_len_limit.min(target_len_limit);
    if length > len_limit {
        return Err(Error::FastenerTooLarge {
            dimension: length,
            limit: len_limit,
        });
    }
    check_diameter(base, target, diameter)
}

fn validate_screw(
    base: &BoundAnchor,
    target: &BoundAnchor,
    diameter: f64,
    length: f64,
) -> Result<(), Error> {
    if !matches!(target.anchor.contact_face, Face::Front | Face::Back) {
        return Err(Error::InvalidScrewFace(target.anchor.contact_face));
    }
    let base_thickness = base.piece.shape().dimension_along(base.anchor.contact_face);
    let target_thickness = target.piece.shape().dimension_along(target.anchor.contact_face);
    let combined = base_thickness + target_thickness;
    if length <= target_thickness || length > combined {
        return Err(Error::InvalidScrewLength {
            length,
            target_thickness,
            combined_thickness: combined,
        });
    }
    check_diameter(base, target, diameter)
}

fn check_diameter(base: &BoundAnchor, target: &BoundAnchor, diameter: f64) -> Result<(), Error> {
    let base_limit = base.piece.shape().min_cross_section(base.anchor.contact_face);
    let target_limit = target
        .piece
        .shape()
        .min_cross_section(target.anchor.contact_face);
    let limit = base_limit.min(target_limit);
    if diameter > limit {
        return Err(Error::FastenerTooLarge {
            dimension: diameter,
            limit,
        });
    }
    Ok(())
}
