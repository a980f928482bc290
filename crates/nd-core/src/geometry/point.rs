use serde::{Deserialize, Serialize};

use super::corner::Corner;
use super::cuboid::Box;
use super::edge::EdgePoint;
use super::face::Face;
use super::vector::Vector3D;

/// A coordinate in a face's intrinsic 2D `(u, v)` frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub u: f64,
    pub v: f64,
}

impl Point2D {
    pub fn new(u: f64, v: f64) -> Point2D {
        Point2D { u, v }
    }
}

/// A coordinate in a piece's local 3D `(x, y, z)` frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Point3D {
        Point3D { x, y, z }
    }

    fn on_axis_of(face: Face, value: f64) -> Point3D {
        if face.is_vertical_axis() {
            Point3D::new(0.0, 0.0, value)
        } else if face.is_left_to_right_axis() {
            Point3D::new(0.0, value, 0.0)
        } else {
            Point3D::new(value, 0.0, 0.0)
        }
    }

    fn add(self, other: Point3D) -> Point3D {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    fn scale_vector(v: Vector3D, s: f64) -> Point3D {
        Point3D::new(v.x * s, v.y * s, v.z * s)
    }

    /// The 3D coordinate of a box vertex.
    pub fn of_corner(b: Box, corner: Corner) -> Point3D {
        Point3D::new(
            b.face_coordinate(corner.front_back),
            b.face_coordinate(corner.left_right),
            b.face_coordinate(corner.vertical),
        )
    }

    /// The center of `face`'s plane: zero on the other two axes.
    pub fn of_face_center(b: Box, face: Face) -> Point3D {
        Point3D::on_axis_of(face, b.face_coordinate(face))
    }

    /// `origin_of(edge) + direction_of(edge) * evaluate(edge_length, offset)`.
    pub fn of_edge_point(b: Box, edge_point: EdgePoint) -> Point3D {
        let origin = Corner::origin_of(edge_point.edge);
        let origin_point = Point3D::of_corner(b, origin);
        let direction = Vector3D::of(edge_point.edge);
        let distance = edge_point.offset.evaluate(edge_point.edge.length_in(b.shape));
        origin_point.add(Point3D::scale_vector(direction, distance))
    }

    /// `face_center(face) + u * u_dir(face) + v * v_dir(face)`.
    pub fn of_surface_point(b: Box, face: Face, point: Point2D) -> Point3D {
        let (u_dir, v_dir) = face.uv_dirs();
        Point3D::of_face_center(b, face)
            .add(Point3D::scale_vector(Vector3D::normal_of(u_dir), point.u))
            .add(Point3D::scale_vector(Vector3D::normal_of(v_dir), point.v))
    }

    /// The inverse of [`Point3D::of_surface_point`]: the `(u, v)` coordinate
    /// on `face`'s plane whose 3D position equals `self`.
    pub fn to_surface_point_on(self, b: Box, face: Face) -> Point2D {
        let center = Point3D::of_face_center(b, face);
        let delta = Vector3D::new(self.x - center.x, self.y - center.y, self.z - center.z);
        let (u_dir, v_dir) = face.uv_dirs();
        Point2D::new(
            delta.dot(Vector3D::normal_of(u_dir)),
            delta.dot(Vector3D::normal_of(v_dir)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::dimensions::Shape3D;
    use crate::geometry::edge::Edge;
    use crate::geometry::offset::Offset;

    fn test_box() -> Box {
        Box::new(Shape3D::new(89.0, 38.0, 1000.0).unwrap())
    }

    #[test]
    fn test_of_corner() {
        let b = test_box();
        let corner = Corner::of(Face::Right, Edge::new(Face::Front, Face::Top).unwrap());
        let p = Point3D::of_corner(b, corner);
        assert_eq!(p, Point3D::new(19.0, 44.5, 500.0));
    }

    #[test]
    fn test_surface_round_trip() {
        let b = test_box();
        for face in [
            Face::Top,
            Face::Down,
            Face::Left,
            Face::Right,
            Face::Front,
            Face::Back,
        ] {
            let uv = Point2D::new(10.0, -5.0);
            let p = Point3D::of_surface_point(b, face, uv);
            let back = p.to_surface_point_on(b, face);
            assert!((back.u - uv.u).abs() < 1e-10, "face {face:?}");
            assert!((back.v - uv.v).abs() < 1e-10, "face {face:?}");
        }
    }

    #[test]
    fn test_edge_point_consistency() {
        let b = test_box();
        let edge = Edge::new(Face::Front, Face::Top).unwrap();
        let ep = EdgePoint::new(edge, Offset::from_min(30.0).unwrap());
        let via_edge = Point3D::of_edge_point(b, ep);

        // Front's corner at (right, top) is (19, 44.5, 500); the edge's
        // direction is `left`, so walking 30mm from the origin corner moves
        // 30mm toward `left`, i.e. u (front's u_dir is `right`) drops by 30.
        assert_eq!(via_edge, Point3D::new(19.0, 14.5, 500.0));

        let on_front = via_edge.to_surface_point_on(b, Face::Front);
        assert!((on_front.u - 14.5).abs() < 1e-9);
        assert!((on_front.v - 500.0).abs() < 1e-9);
    }
}
