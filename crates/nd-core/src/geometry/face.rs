use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the six outward faces of a rectangular piece of lumber.
///
/// Each face carries a fixed outward normal in the piece's local frame:
/// `top=+Z`, `down=-Z`, `right=+Y`, `left=-Y`, `front=+X`, `back=-X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Top,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    /// The face with the antiparallel normal.
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Down,
            Face::Down => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Whether this face's normal points along the positive direction of its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Face::Top | Face::Right | Face::Front)
    }

    /// Top/down faces lie on the vertical (length) axis.
    pub fn is_vertical_axis(self) -> bool {
        matches!(self, Face::Top | Face::Down)
    }

    /// Left/right faces lie on the width axis.
    pub fn is_left_to_right_axis(self) -> bool {
        matches!(self, Face::Left | Face::Right)
    }

    /// Front/back faces lie on the height axis.
    pub fn is_back_to_front_axis(self) -> bool {
        matches!(self, Face::Front | Face::Back)
    }

    /// Whether two faces share an axis (equal or opposite).
    pub fn is_same_axis(self, other: Face) -> bool {
        (self.is_vertical_axis() && other.is_vertical_axis())
            || (self.is_left_to_right_axis() && other.is_left_to_right_axis())
            || (self.is_back_to_front_axis() && other.is_back_to_front_axis())
    }

    /// Two faces are adjacent iff they are neither equal nor opposite.
    pub fn is_adjacent(self, other: Face) -> bool {
        self != other && !self.is_same_axis(other)
    }

    /// The unit outward normal of this face, in piece-local `(x, y, z)`.
    ///
    /// `top=+Z`, `down=-Z`, `right=+Y`, `left=-Y`, `front=+X`, `back=-X`.
    pub(crate) fn normal_vector(self) -> (f64, f64, f64) {
        match self {
            Face::Top => (0.0, 0.0, 1.0),
            Face::Down => (0.0, 0.0, -1.0),
            Face::Left => (0.0, -1.0, 0.0),
            Face::Right => (0.0, 1.0, 0.0),
            Face::Front => (1.0, 0.0, 0.0),
            Face::Back => (-1.0, 0.0, 0.0),
        }
    }

    pub(crate) fn of_normal_vector(v: (f64, f64, f64)) -> Face {
        match v {
            (0.0, 0.0, 1.0) => Face::Top,
            (0.0, 0.0, -1.0) => Face::Down,
            (0.0, -1.0, 0.0) => Face::Left,
            (0.0, 1.0, 0.0) => Face::Right,
            (1.0, 0.0, 0.0) => Face::Front,
            (-1.0, 0.0, 0.0) => Face::Back,
            _ => unreachable!("not a unit axis vector: {v:?}"),
        }
    }

    /// This face's intrinsic 2D basis, as the two faces whose normals equal
    /// `u_dir` and `v_dir` in piece-local frame. Chosen so that
    /// `u_dir x v_dir = normal(self)` for every face (the right-handed
    /// surface invariant).
    pub(crate) fn uv_dirs(self) -> (Face, Face) {
        match self {
            Face::Top => (Face::Front, Face::Right),
            Face::Down => (Face::Front, Face::Left),
            Face::Right => (Face::Top, Face::Front),
            Face::Left => (Face::Front, Face::Top),
            Face::Front => (Face::Right, Face::Top),
            Face::Back => (Face::Top, Face::Right),
        }
    }

    /// The right-hand cross product of two adjacent faces' normals, expressed
    /// as the face whose normal equals `normal(lhs) x normal(rhs)`.
    ///
    /// Defined only when `lhs` and `rhs` are adjacent.
    pub fn cross(lhs: Face, rhs: Face) -> Result<Face, Error> {
        if !lhs.is_adjacent(rhs) {
            return Err(Error::NotAdjacent(lhs, rhs));
        }
        let (ax, ay, az) = lhs.normal_vector();
        let (bx, by, bz) = rhs.normal_vector();
        let cross = (ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);
        Ok(Face::of_normal_vector(cross))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for f in [
            Face::Top,
            Face::Down,
            Face::Left,
            Face::Right,
            Face::Front,
            Face::Back,
        ] {
            assert_eq!(f.opposite().opposite(), f);
        }
    }

    #[test]
    fn test_cross_basic() {
        assert_eq!(Face::cross(Face::Top, Face::Front).unwrap(), Face::Right);
        assert_eq!(Face::cross(Face::Front, Face::Top).unwrap(), Face::Left);
        assert_eq!(Face::cross(Face::Top, Face::Right).unwrap(), Face::Back);
        assert_eq!(Face::cross(Face::Right, Face::Top).unwrap(), Face::Front);
    }

    #[test]
    fn test_cross_is_anticommutative() {
        let faces = [
            Face::Top,
            Face::Down,
            Face::Left,
            Face::Right,
            Face::Front,
            Face::Back,
        ];
        for &a in &faces {
            for &b in &faces {
                if a.is_adjacent(b) {
                    let ab = Face::cross(a, b).unwrap();
                    let ba = Face::cross(b, a).unwrap();
                    assert_eq!(ab, ba.opposite(), "cross({a:?},{b:?})");
                    assert!(ab.is_adjacent(a));
                    assert!(ab.is_adjacent(b));
                }
            }
        }
    }

    #[test]
    fn test_cross_rejects_equal_and_opposite() {
        assert!(Face::cross(Face::Top, Face::Top).is_err());
        assert!(Face::cross(Face::Top, Face::Down).is_err());
    }

    #[test]
    fn test_is_adjacent() {
        assert!(Face::Top.is_adjacent(Face::Front));
        assert!(!Face::Top.is_adjacent(Face::Down));
        assert!(!Face::Top.is_adjacent(Face::Top));
    }

    #[test]
    fn test_axis_classification() {
        assert!(Face::Top.is_vertical_axis());
        assert!(Face::Down.is_vertical_axis());
        assert!(Face::Left.is_left_to_right_axis());
        assert!(Face::Front.is_back_to_front_axis());
        assert!(!Face::Top.is_left_to_right_axis());
    }

    #[test]
    fn test_uv_dirs_are_right_handed() {
        for f in [
            Face::Top,
            Face::Down,
            Face::Left,
            Face::Right,
            Face::Front,
            Face::Back,
        ] {
            let (u, v) = f.uv_dirs();
            assert_eq!(Face::cross(u, v).unwrap(), f, "uv_dirs({f:?})");
        }
    }

    #[test]
    fn test_is_positive() {
        assert!(Face::Top.is_positive());
        assert!(Face::Right.is_positive());
        assert!(Face::Front.is_positive());
        assert!(!Face::Down.is_positive());
        assert!(!Face::Left.is_positive());
        assert!(!Face::Back.is_positive());
    }
}
