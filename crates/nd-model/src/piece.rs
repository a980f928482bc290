use serde::{Deserialize, Serialize};

use nd_core::geometry::{Shape2D, Shape3D};
use nd_core::Error;

/// A named lumber cross-section the kernel recognises. Each tag maps to a
/// fixed `Shape2D` in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    #[serde(rename = "2x4")]
    Pt2x4,
    #[serde(rename = "1x4")]
    Pt1x4,
}

impl PieceType {
    /// The nominal cross-section, in millimetres, of this lumber size.
    pub fn cross_section(self) -> Shape2D {
        let (width, height) = match self {
            PieceType::Pt2x4 => (89.0, 38.0),
            PieceType::Pt1x4 => (89.0, 19.0),
        };
        Shape2D::new(width, height).expect("built-in piece type dimensions are always positive")
    }
}

/// A single piece of lumber: an id, a cross-section, and a length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: String,
    pub piece_type: PieceType,
    pub length: f64,
}

impl Piece {
    pub fn new(id: impl Into<String>, piece_type: PieceType, length: f64) -> Result<Piece, Error> {
        if length <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "length must be positive, got {length}"
            )));
        }
        Ok(Piece {
            id: id.into(),
            piece_type,
            length,
        })
    }

    /// The full 3D extent of this piece.
    pub fn shape(&self) -> Shape3D {
        Shape3D::from_cross_section(self.piece_type.cross_section(), self.length)
            .expect("piece length was validated positive at construction")
    }
}
