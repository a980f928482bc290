use serde::{Deserialize, Serialize};

use super::dimensions::Shape3D;
use super::face::Face;
use super::offset::Offset;
use crate::error::Error;

/// An ordered pair of adjacent faces; its 3D direction is
/// `normal(lhs) x normal(rhs)`, so `(top, front)` and `(front, top)` are
/// opposite-directed edges sharing the same geometric line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub lhs: Face,
    pub rhs: Face,
}

impl Edge {
    pub fn new(lhs: Face, rhs: Face) -> Result<Edge, Error> {
        if !lhs.is_adjacent(rhs) {
            return Err(Error::NotAdjacent(lhs, rhs));
        }
        Ok(Edge { lhs, rhs })
    }

    /// The face whose normal is this edge's 3D direction.
    pub fn direction_face(self) -> Face {
        Face::cross(self.lhs, self.rhs).expect("Edge invariant: lhs and rhs are adjacent")
    }

    /// The edge traversed in the opposite direction.
    pub fn reversed(self) -> Edge {
        Edge {
            lhs: self.rhs,
            rhs: self.lhs,
        }
    }

    /// This edge's length in a piece of the given shape.
    pub fn length_in(self, shape: Shape3D) -> f64 {
        shape.dimension_along(self.direction_face())
    }
}

/// A point on an `Edge`, named by a signed offset from the edge's origin
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePoint {
    pub edge: Edge,
    pub offset: Offset,
}

impl EdgePoint {
    pub fn new(edge: Edge, offset: Offset) -> EdgePoint {
        EdgePoint { edge, offset }
    }
}
