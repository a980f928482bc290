use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::Error;
use crate::piece::Piece;

/// The pair of piece ids a `Connection` joins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiecePair {
    pub base_id: String,
    pub target_id: String,
}

impl PiecePair {
    pub fn new(base_id: impl Into<String>, target_id: impl Into<String>) -> PiecePair {
        PiecePair {
            base_id: base_id.into(),
            target_id: target_id.into(),
        }
    }
}

/// One entry of a model's connection list: which pieces it joins, plus the
/// `Connection` itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConnection {
    pub pair: PiecePair,
    pub connection: Connection,
}

/// A bag of pieces and the connections between them. The connection list is
/// insertion-ordered: joint ids (assigned downstream by the assembly
/// builder) depend on traversal order, so this map is a `Vec`, not a hash
/// map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    pieces: HashMap<String, Piece>,
    connections: Vec<ModelConnection>,
}

impl Model {
    pub fn new() -> Model {
        Model::default()
    }

    /// Adds a piece, rejecting a duplicate id.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), Error> {
        if self.pieces.contains_key(&piece.id) {
            return Err(Error::DuplicatePieceId(piece.id));
        }
        self.pieces.insert(piece.id.clone(), piece);
        Ok(())
    }

    /// Appends a connection between two already-known pieces.
    pub fn add_connection(
        &mut self,
        base_id: impl Into<String>,
        target_id: impl Into<String>,
        connection: Connection,
    ) -> Result<(), Error> {
        let base_id = base_id.into();
        let target_id = target_id.into();
        if !self.pieces.contains_key(&base_id) {
            return Err(Error::UnknownPieceId(base_id));
        }
        if !self.pieces.contains_key(&target_id) {
            return Err(Error::UnknownPieceId(target_id));
        }
        self.connections.push(ModelConnection {
            pair: PiecePair::new(base_id, target_id),
            connection,
        });
        Ok(())
    }

    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Connections in insertion order.
    pub fn connections(&self) -> impl Iterator<Item = &ModelConnection> {
        self.connections.iter()
    }

    pub fn from_toml(toml_str: &str) -> Result<Model, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceType;

    #[test]
    fn test_rejects_duplicate_piece_id() {
        let mut model = Model::new();
        model
            .add_piece(Piece::new("p1", PieceType::Pt2x4, 1000.0).unwrap())
            .unwrap();
        let err = model.add_piece(Piece::new("p1", PieceType::Pt1x4, 500.0).unwrap());
        assert!(matches!(err, Err(Error::DuplicatePieceId(_))));
    }

    #[test]
    fn test_connection_rejects_unknown_piece() {
        let mut model = Model::new();
        model
            .add_piece(Piece::new("p1", PieceType::Pt2x4, 1000.0).unwrap())
            .unwrap();

        use crate::anchor::{Anchor, BoundAnchor};
        use nd_core::geometry::{Face, Offset};

        let base = BoundAnchor::new(
            model.piece("p1").unwrap().clone(),
            Anchor::new(Face::Front, Face::Top, Offset::from_min(0.0).unwrap()).unwrap(),
        )
        .unwrap();
        let target = BoundAnchor::new(
            Piece::new("p2", PieceType::Pt2x4, 800.0).unwrap(),
            Anchor::new(Face::Back, Face::Top, Offset::from_min(0.0).unwrap()).unwrap(),
        )
        .unwrap();
        let conn = Connection::vanilla(base, target);
        let err = model.add_connection("p1", "p2", conn);
        assert!(matches!(err, Err(Error::UnknownPieceId(_))));
    }

    #[test]
    fn test_connections_preserve_insertion_order() {
        let mut model = Model::new();
        for id in ["p1", "p2", "p3"] {
            model
                .add_piece(Piece::new(id, PieceType::Pt2x4, 1000.0).unwrap())
                .unwrap();
        }

        use crate::anchor::{Anchor, BoundAnchor};
        use nd_core::geometry::{Face, Offset};

        let mk = |id: &str| {
            BoundAnchor::new(
                model.piece(id).unwrap().clone(),
                Anchor::new(Face::Front, Face::Top, Offset::from_min(0.0).unwrap()).unwrap(),
            )
            .unwrap()
        };

        model
            .add_connection("p1", "p2", Connection::vanilla(mk("p1"), mk("p2")))
            .unwrap();
        model
            .add_connection("p2", "p3", Connection::vanilla(mk("p2"), mk("p3")))
            .unwrap();

        let ids: Vec<_> = model
            .connections()
            .map(|mc| (mc.pair.base_id.clone(), mc.pair.target_id.clone()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("p1".to_string(), "p2".to_string()),
                ("p2".to_string(), "p3".to_string())
            ]
        );
    }
}
