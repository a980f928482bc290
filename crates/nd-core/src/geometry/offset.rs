use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A signed position along an edge, measured from one of its two ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Offset {
    FromMin(f64),
    FromMax(f64),
}

impl Offset {
    /// Constructs a `FromMin` offset, rejecting negative values.
    pub fn from_min(v: f64) -> Result<Offset, Error> {
        if v < 0.0 {
            return Err(Error::NegativeOffset(v));
        }
        Ok(Offset::FromMin(v))
    }

    /// Constructs a `FromMax` offset, rejecting negative values.
    pub fn from_max(v: f64) -> Result<Offset, Error> {
        if v < 0.0 {
            return Err(Error::NegativeOffset(v));
        }
        Ok(Offset::FromMax(v))
    }

    /// Resolves this offset against an edge of the given length, returning
    /// the signed distance from the edge's origin corner.
    pub fn evaluate(self, length: f64) -> f64 {
        match self {
            Offset::FromMin(v) => v,
            Offset::FromMax(v) => length - v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(Offset::from_min(-1.0).is_err());
        assert!(Offset::from_max(-0.01).is_err());
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(Offset::from_min(100.0).unwrap().evaluate(1000.0), 100.0);
        assert_eq!(Offset::from_max(100.0).unwrap().evaluate(1000.0), 900.0);
    }
}
