use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::piece::PieceType;

/// Dimensions and volume of a single piece, read directly off a `Model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceResource {
    pub id: String,
    pub piece_type: PieceType,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
}

/// Aggregate lumber requirements for a project, derived from its `Model`.
/// Inventory-only: no positions and no joints, since those require an
/// `Assembly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub pieces: Vec<PieceResource>,
    pub total_pieces: usize,
    pub pieces_by_type: HashMap<PieceType, usize>,
    pub total_length_by_type: HashMap<PieceType, f64>,
    pub total_volume: f64,
}

impl ResourceSummary {
    /// Computes the board-footage summary of every piece in `model`.
    pub fn of(model: &Model) -> ResourceSummary {
        let mut pieces = Vec::new();
        let mut pieces_by_type: HashMap<PieceType, usize> = HashMap::new();
        let mut total_length_by_type: HashMap<PieceType, f64> = HashMap::new();
        let mut total_volume = 0.0;

        for piece in model.pieces() {
            let shape = piece.shape();
            let volume = shape.width * shape.height * shape.length;
            pieces.push(PieceResource {
                id: piece.id.clone(),
                piece_type: piece.piece_type,
                length: piece.length,
                width: shape.width,
                height: shape.height,
                volume,
            });
            *pieces_by_type.entry(piece.piece_type).or_insert(0) += 1;
            *total_length_by_type.entry(piece.piece_type).or_insert(0.0) += piece.length;
            total_volume += volume;
        }

        ResourceSummary {
            total_pieces: pieces.len(),
            pieces,
            pieces_by_type,
            total_length_by_type,
            total_volume,
        }
    }
}
