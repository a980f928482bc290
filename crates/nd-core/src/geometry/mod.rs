//! Six-face oriented-box algebra: the piece-local geometric primitives every
//! higher crate builds anchors, connections, and projections out of.

mod corner;
mod cuboid;
mod dimensions;
mod edge;
mod face;
mod offset;
mod orientation;
mod point;
mod surface;
mod vector;

pub use corner::Corner;
pub use cuboid::Box;
pub use dimensions::{Shape2D, Shape3D};
pub use edge::{Edge, EdgePoint};
pub use face::Face;
pub use offset::Offset;
pub use orientation::Orientation3D;
pub use point::{Point2D, Point3D};
pub use surface::SurfacePoint;
pub use vector::{Vector2D, Vector3D};
