use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::face::Face;

/// A named rectangular cross-section, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape2D {
    pub width: f64,
    pub height: f64,
}

impl Shape2D {
    /// Builds a cross-section, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Shape2D, Error> {
        if width <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "width must be positive, got {width}"
            )));
        }
        if height <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "height must be positive, got {height}"
            )));
        }
        Ok(Shape2D { width, height })
    }
}

/// The full three-axis extent of a piece of lumber, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape3D {
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

impl Shape3D {
    pub fn new(width: f64, height: f64, length: f64) -> Result<Shape3D, Error> {
        for (name, v) in [("width", width), ("height", height), ("length", length)] {
            if v <= 0.0 {
                return Err(Error::InvalidDimension(format!(
                    "{name} must be positive, got {v}"
                )));
            }
        }
        Ok(Shape3D {
            width,
            height,
            length,
        })
    }

    pub fn from_cross_section(cross_section: Shape2D, length: f64) -> Result<Shape3D, Error> {
        Shape3D::new(cross_section.width, cross_section.height, length)
    }

    /// The piece dimension along `face`'s normal: top/down map to `length`,
    /// left/right to `width`, front/back to `height`. This mapping is fixed
    /// by the face-to-axis convention and must not be reordered anywhere
    /// else in the kernel.
    pub fn dimension_along(self, face: Face) -> f64 {
        if face.is_vertical_axis() {
            self.length
        } else if face.is_left_to_right_axis() {
            self.width
        } else {
            self.height
        }
    }

    /// The smaller of the two cross-section dimensions perpendicular to
    /// `face`'s normal.
    pub fn min_cross_section(self, face: Face) -> f64 {
        if face.is_vertical_axis() {
            self.width.min(self.height)
        } else if face.is_left_to_right_axis() {
            self.height.min(self.length)
        } else {
            self.width.min(self.length)
        }
    }
}
