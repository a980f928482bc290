use serde::{Deserialize, Serialize};

use nd_core::geometry::{Orientation3D, SurfacePoint};

/// A placed anchor: a surface point with a full 3D orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub position: SurfacePoint,
    pub orientation: Orientation3D,
}

impl Joint {
    pub fn new(position: SurfacePoint, orientation: Orientation3D) -> Joint {
        Joint {
            position,
            orientation,
        }
    }
}

/// The two joints produced for one fastener or contact, one per piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointPair {
    pub base_side: Joint,
    pub target_side: Joint,
}

impl JointPair {
    pub fn new(base_side: Joint, target_side: Joint) -> JointPair {
        JointPair {
            base_side,
            target_side,
        }
    }
}

/// A drilled pilot hole, with no upper bound on depth (`None` = through
/// hole).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub diameter: f64,
    pub depth: Option<f64>,
}

impl Hole {
    pub fn new(diameter: f64, depth: Option<f64>) -> Hole {
        Hole { diameter, depth }
    }
}
