use serde::{Deserialize, Serialize};

use super::dimensions::Shape3D;
use super::face::Face;

/// A `Shape3D` placed at the origin of a local frame, spanning
/// `[-W/2,+W/2] x [-H/2,+H/2] x [-L/2,+L/2]`. A `Box` carries no pose; pose
/// only exists at the assembly boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box {
    pub shape: Shape3D,
}

impl Box {
    pub fn new(shape: Shape3D) -> Box {
        Box { shape }
    }

    /// The signed coordinate of `face`'s plane along its own axis: half the
    /// piece dimension along that axis, with the sign of `face.is_positive()`.
    pub fn face_coordinate(self, face: Face) -> f64 {
        let half = self.shape.dimension_along(face) / 2.0;
        if face.is_positive() { half } else { -half }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_coordinate() {
        let b = Box::new(Shape3D::new(89.0, 38.0, 1000.0).unwrap());
        assert_eq!(b.face_coordinate(Face::Top), 500.0);
        assert_eq!(b.face_coordinate(Face::Down), -500.0);
        assert_eq!(b.face_coordinate(Face::Right), 44.5);
        assert_eq!(b.face_coordinate(Face::Left), -44.5);
        assert_eq!(b.face_coordinate(Face::Front), 19.0);
        assert_eq!(b.face_coordinate(Face::Back), -19.0);
    }
}
