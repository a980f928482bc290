use serde::{Deserialize, Serialize};

use super::cuboid::Box;
use super::edge::EdgePoint;
use super::face::Face;
use super::point::{Point2D, Point3D};

/// A point on a box's surface, named by which face it lies on and its
/// intrinsic `(u, v)` coordinate on that face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub face: Face,
    pub point: Point2D,
}

impl SurfacePoint {
    pub fn new(face: Face, point: Point2D) -> SurfacePoint {
        SurfacePoint { face, point }
    }

    /// The surface coordinate on `face` whose 3D position equals the 3D
    /// position of `edge_point`. The edge must be incident to `face` — i.e.
    /// one of `edge_point.edge.lhs` / `.rhs` must equal `face`.
    pub fn of(b: Box, face: Face, edge_point: EdgePoint) -> SurfacePoint {
        debug_assert!(
            edge_point.edge.lhs == face || edge_point.edge.rhs == face,
            "edge not incident to face"
        );
        let p3 = Point3D::of_edge_point(b, edge_point);
        SurfacePoint::new(face, p3.to_surface_point_on(b, face))
    }

    pub fn to_point_3d(self, b: Box) -> Point3D {
        Point3D::of_surface_point(b, self.face, self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::dimensions::Shape3D;
    use crate::geometry::edge::Edge;
    use crate::geometry::offset::Offset;

    #[test]
    fn test_of_matches_edge_point_3d() {
        let b = Box::new(Shape3D::new(89.0, 38.0, 1000.0).unwrap());
        let edge = Edge::new(Face::Front, Face::Top).unwrap();
        let ep = EdgePoint::new(edge, Offset::from_min(30.0).unwrap());

        let sp = SurfacePoint::of(b, Face::Front, ep);
        let via_edge = Point3D::of_edge_point(b, ep);
        let via_surface = sp.to_point_3d(b);

        assert_eq!(via_edge, via_surface);
    }
}
