use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::face::Face;

/// A vector in a face's intrinsic 2D `(u, v)` frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub u: f64,
    pub v: f64,
}

impl Vector2D {
    pub fn new(u: f64, v: f64) -> Vector2D {
        Vector2D { u, v }
    }

    /// The in-plane component of `other`'s outward normal expressed in
    /// `face`'s `(u_dir, v_dir)` basis.
    ///
    /// Both bases are axis-aligned, so this is always `(0, 0)`, `(±1, 0)` or
    /// `(0, ±1)` — it is `(0, 0)` exactly when `other` shares `face`'s axis.
    pub fn of(face: Face, other: Face) -> Vector2D {
        let (u_dir, v_dir) = face.uv_dirs();
        let n = Vector3D::normal_of(other);
        Vector2D {
            u: Vector3D::normal_of(u_dir).dot(n),
            v: Vector3D::normal_of(v_dir).dot(n),
        }
    }
}

/// A vector in a piece's local 3D `(x, y, z)` frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D { x, y, z }
    }

    /// The unit outward normal of `face`.
    pub fn normal_of(face: Face) -> Vector3D {
        let (x, y, z) = face.normal_vector();
        Vector3D { x, y, z }
    }

    /// The unit direction of `edge`, i.e. `normal(cross(edge.lhs, edge.rhs))`.
    pub fn of(edge: Edge) -> Vector3D {
        Vector3D::normal_of(edge.direction_face())
    }

    pub fn dot(self, other: Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn sub(self, other: Vector3D) -> Vector3D {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f64) -> Vector3D {
        Vector3D::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Normalizes to unit length; `None` if the vector is (near) zero.
    pub fn normalized(self) -> Option<Vector3D> {
        let n = self.norm();
        if n < 1e-10 { None } else { Some(self.scale(1.0 / n)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_of_same_axis_is_zero() {
        let v = Vector2D::of(Face::Top, Face::Down);
        assert_eq!(v, Vector2D::new(0.0, 0.0));
    }

    #[test]
    fn test_vector2d_of_in_plane_axes() {
        // top's basis is (front, right); projecting front onto it gives (1, 0).
        assert_eq!(Vector2D::of(Face::Top, Face::Front), Vector2D::new(1.0, 0.0));
        assert_eq!(Vector2D::of(Face::Top, Face::Right), Vector2D::new(0.0, 1.0));
        assert_eq!(Vector2D::of(Face::Top, Face::Back), Vector2D::new(-1.0, 0.0));
    }

    #[test]
    fn test_vector3d_normal_of() {
        assert_eq!(Vector3D::normal_of(Face::Top), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(
            Vector3D::normal_of(Face::Back),
            Vector3D::new(-1.0, 0.0, 0.0)
        );
    }
}
