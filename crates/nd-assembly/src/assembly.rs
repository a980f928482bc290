use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use nd_core::geometry::{Box as GeomBox, Point3D};
use nd_joinery::{joint_pairs_for, Hole, Joint};
use nd_model::{ConnectionKind, Model};

use crate::error::AssemblyError;

/// Fixed diameter (mm) of the pilot hole drilled at every Dowel/Screw joint.
const PILOT_HOLE_DIAMETER: f64 = 3.0;
/// Fixed depth (mm) of the pilot hole drilled at every Dowel/Screw joint.
const PILOT_HOLE_DEPTH: f64 = 5.0;

/// The fully resolved geometry of a model: a `Box` per piece, a `Joint` per
/// generated joint id, the base/target joint-id pairs in connection order,
/// and the pilot holes to drill per piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assembly {
    pub boxes: HashMap<String, GeomBox>,
    pub joints: HashMap<String, Joint>,
    pub joint_conns: Vec<(String, String)>,
    pub pilot_holes: HashMap<String, Vec<(Point3D, Hole)>>,
}

fn alloc_joint_id(next_id: &mut HashMap<String, usize>, piece_id: &str) -> String {
    let n = next_id.entry(piece_id.to_string()).or_insert(0);
    let id = format!("{piece_id}_j{n}");
    *n += 1;
    id
}

impl Assembly {
    /// Builds the assembly for `model` (spec §4.6): one `Box` per piece,
    /// joints allocated in connection-insertion order, and pilot holes for
    /// every joint created under a Dowel or Screw connection.
    pub fn of(model: &Model) -> Result<Assembly, AssemblyError> {
        let mut boxes = HashMap::new();
        for piece in model.pieces() {
            boxes.insert(piece.id.clone(), GeomBox::new(piece.shape()));
        }

        let mut joints = HashMap::new();
        let mut joint_conns = Vec::new();
        let mut pilot_holes: HashMap<String, Vec<(Point3D, Hole)>> = HashMap::new();
        let mut next_id: HashMap<String, usize> = HashMap::new();

        for mc in model.connections() {
            let pair = &mc.pair;
            let connection = &mc.connection;
            let drills_pilot_holes =
                matches!(connection.kind, ConnectionKind::Dowel { .. } | ConnectionKind::Screw { .. });

            for jp in joint_pairs_for(connection)? {
                let base_joint_id = alloc_joint_id(&mut next_id, &pair.base_id);
                let target_joint_id = alloc_joint_id(&mut next_id, &pair.target_id);

                if drills_pilot_holes {
                    let base_box = boxes[&pair.base_id];
                    let target_box = boxes[&pair.target_id];
                    let hole = Hole::new(PILOT_HOLE_DIAMETER, Some(PILOT_HOLE_DEPTH));
                    pilot_holes
                        .entry(pair.base_id.clone())
                        .or_default()
                        .push((jp.base_side.position.to_point_3d(base_box), hole));
                    pilot_holes
                        .entry(pair.target_id.clone())
                        .or_default()
                        .push((jp.target_side.position.to_point_3d(target_box), hole));
                }

                joints.insert(base_joint_id.clone(), jp.base_side);
                joints.insert(target_joint_id.clone(), jp.target_side);
                joint_conns.push((base_joint_id, target_joint_id));
            }
        }

        Ok(Assembly {
            boxes,
            joints,
            joint_conns,
            pilot_holes,
        })
    }
}
