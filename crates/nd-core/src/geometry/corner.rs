use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::face::Face;

/// One of a box's eight vertices, named by one face per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub vertical: Face,
    pub left_right: Face,
    pub front_back: Face,
}

impl Corner {
    /// Builds a corner out of three faces, one per axis, in any order.
    ///
    /// Panics if two of the three faces share an axis — every caller in this
    /// crate supplies faces already known to span the three distinct axes
    /// (an `Edge`'s two faces plus a third, or three faces of an already
    /// validated anchor).
    fn from_three(a: Face, b: Face, c: Face) -> Corner {
        let faces = [a, b, c];
        let vertical = faces
            .into_iter()
            .find(|f| f.is_vertical_axis())
            .expect("corner must have a vertical-axis face");
        let left_right = faces
            .into_iter()
            .find(|f| f.is_left_to_right_axis())
            .expect("corner must have a left/right-axis face");
        let front_back = faces
            .into_iter()
            .find(|f| f.is_back_to_front_axis())
            .expect("corner must have a front/back-axis face");
        Corner {
            vertical,
            left_right,
            front_back,
        }
    }

    /// The corner named by `face` together with `edge`'s two faces. `face`
    /// must be on the one axis `edge` does not already span.
    pub fn of(face: Face, edge: Edge) -> Corner {
        Corner::from_three(face, edge.lhs, edge.rhs)
    }

    /// The vertex reached by tracing back along `edge`'s positive direction
    /// — the corner from which `EdgePoint` offsets are measured.
    pub fn origin_of(edge: Edge) -> Corner {
        Corner::from_three(edge.lhs, edge.rhs, edge.direction_face().opposite())
    }
}
