use serde::{Deserialize, Serialize};

use super::vector::Vector3D;
use crate::error::Error;

/// A rigid orientation in a piece's local frame: a direction vector (the
/// joint's +Z) and an up vector (+Y), kept orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation3D {
    pub direction: Vector3D,
    pub up: Vector3D,
}

impl Orientation3D {
    /// Builds an orientation, orthogonalising `up` against `direction` via
    /// Gram-Schmidt. Rejects inputs whose vectors are parallel (including
    /// antiparallel), since no well-defined "up" plane exists then.
    pub fn new(direction: Vector3D, up: Vector3D) -> Result<Orientation3D, Error> {
        let direction = direction
            .normalized()
            .ok_or(Error::ParallelOrientationVectors)?;
        let projection = direction.scale(up.dot(direction));
        let orthogonal = up.sub(projection);
        let up = orthogonal
            .normalized()
            .ok_or(Error::ParallelOrientationVectors)?;
        Ok(Orientation3D { direction, up })
    }
}
