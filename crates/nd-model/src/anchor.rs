use serde::{Deserialize, Serialize};

use nd_core::geometry::{Box as GeomBox, Edge, EdgePoint, Face, Offset, Orientation3D, SurfacePoint, Vector3D};
use nd_core::Error as CoreError;

use crate::piece::Piece;

/// An attachment point on a piece, named by two adjacent faces and a signed
/// offset along the edge they share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub contact_face: Face,
    pub edge_shared_face: Face,
    pub offset: Offset,
}

impl Anchor {
    /// Builds an anchor, rejecting `contact_face`/`edge_shared_face` pairs
    /// that are equal or opposite.
    pub fn new(
        contact_face: Face,
        edge_shared_face: Face,
        offset: Offset,
    ) -> Result<Anchor, CoreError> {
        if !contact_face.is_adjacent(edge_shared_face) {
            return Err(CoreError::NotAdjacent(contact_face, edge_shared_face));
        }
        Ok(Anchor {
            contact_face,
            edge_shared_face,
            offset,
        })
    }

    /// Orients `Edge(contact_face, edge_shared_face)` so its direction
    /// (`cross(lhs, rhs)`) is positive along its axis, then couples it with
    /// the stored offset.
    pub fn as_edge_point(&self) -> EdgePoint {
        let forward = Edge::new(self.contact_face, self.edge_shared_face)
            .expect("Anchor invariant: contact_face and edge_shared_face are adjacent");
        let edge = if forward.direction_face().is_positive() {
            forward
        } else {
            forward.reversed()
        };
        EdgePoint::new(edge, self.offset)
    }

    /// `cross(contact_face, edge_shared_face)` — the face whose normal is
    /// this anchor's "up" direction.
    pub fn up_face(&self) -> Face {
        Face::cross(self.contact_face, self.edge_shared_face)
            .expect("Anchor invariant: contact_face and edge_shared_face are adjacent")
    }
}

/// An `Anchor` bound to a concrete `Piece`, validated against that piece's
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundAnchor {
    pub piece: Piece,
    pub anchor: Anchor,
}

impl BoundAnchor {
    /// Binds `anchor` to `piece`, validating that the offset, once evaluated
    /// against the edge's length in the piece's shape, lies in
    /// `[0, edge_length]`.
    pub fn new(piece: Piece, anchor: Anchor) -> Result<BoundAnchor, CoreError> {
        let edge_point = anchor.as_edge_point();
        let edge_length = edge_point.edge.length_in(piece.shape());
        let evaluated = edge_point.offset.evaluate(edge_length);
        if evaluated < 0.0 || evaluated > edge_length {
            return Err(CoreError::OffsetOutOfRange {
                edge_length,
                offset: evaluated,
            });
        }
        Ok(BoundAnchor { piece, anchor })
    }

    pub fn geom_box(&self) -> GeomBox {
        GeomBox::new(self.piece.shape())
    }

    /// The anchor's position expressed as a surface point on the piece's
    /// contact face.
    pub fn as_surface_point(&self) -> SurfacePoint {
        SurfacePoint::of(
            self.geom_box(),
            self.anchor.contact_face,
            self.anchor.as_edge_point(),
        )
    }

    /// The anchor's canonical pose on its piece: `direction` is the contact
    /// face's outward normal, `up` is `cross(contact_face, edge_shared_face)`.
    /// When `flip_up`, `up` is negated.
    pub fn as_orientation(&self, flip_up: bool) -> Orientation3D {
        let direction = Vector3D::normal_of(self.anchor.contact_face);
        let up_normal = Vector3D::normal_of(self.anchor.up_face());
        let up = if flip_up { up_normal.scale(-1.0) } else { up_normal };
        Orientation3D::new(direction, up)
            .expect("contact face and its cross product are always orthogonal")
    }
}
