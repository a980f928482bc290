use nd_core::geometry::{Face, Point2D, SurfacePoint, Vector2D};
use nd_model::{BoundAnchor, Connection, ConnectionKind};

use crate::error::JoineryError;
use crate::joint::{Joint, JointPair};
use crate::projection::project_surface_point;

/// Fixed offset (mm) the two dowels of a pair sit from the anchor along the
/// face's in-plane axis, driven by the standard 2x4 cross-section.
const DOWEL_OFFSET: f64 = 25.4;

/// Fixed offset (mm) along the edge axis used for front/back dowel pairs, to
/// avoid splitting the narrow dimension of the piece.
const EDGE_OFFSET: f64 = 44.5;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AxisGroup {
    Vertical,
    LeftRight,
    FrontBack,
}

fn axis_group(face: Face) -> AxisGroup {
    if face.is_vertical_axis() {
        AxisGroup::Vertical
    } else if face.is_left_to_right_axis() {
        AxisGroup::LeftRight
    } else {
        AxisGroup::FrontBack
    }
}

/// The single `JointPair` for a plain-contact (`Vanilla`) connection: the
/// base joint sits at the base anchor, the target joint is its projection.
pub fn vanilla_joint_pair(base: &BoundAnchor, target: &BoundAnchor) -> JointPair {
    let base_joint = Joint::new(base.as_surface_point(), base.as_orientation(false));
    let target_joint = crate::projection::project_joint(base, target, base_joint);
    JointPair::new(base_joint, target_joint)
}

/// Builds the two joint pairs of a dowel placed on `source`'s anchor,
/// offset by `offsets`, each projected onto `other`'s frame.
fn offset_pairs(
    source: &BoundAnchor,
    other: &BoundAnchor,
    source_is_base: bool,
    offsets: [(f64, f64); 2],
) -> [JointPair; 2] {
    let source_anchor_sp = source.as_surface_point();
    offsets.map(|(du, dv)| {
        let source_point = SurfacePoint::new(
            source.anchor.contact_face,
            Point2D::new(source_anchor_sp.point.u + du, source_anchor_sp.point.v + dv),
        );
        let source_joint = Joint::new(source_point, source.as_orientation(false));
        let other_point = project_surface_point(source, other, source_point);
        let other_joint = Joint::new(other_point, other.as_orientation(true));

        if source_is_base {
            JointPair::new(source_joint, other_joint)
        } else {
            JointPair::new(other_joint, source_joint)
        }
    })
}

/// The two `JointPair`s for a Dowel (or, identically, Screw) connection, via
/// the same priority dispatch as the original: whichever side's contact face
/// is vertical owns the placement; failing that, whichever side's contact
/// face is left/right owns it (regardless of what the other side is);
/// failing that, both sides are front/back and the side whose edge-shared
/// face is vertical owns it. Only front/back-contact pairs that *both* share
/// a left/right edge face have no placement rule.
pub fn dowel_joint_pairs(
    base: &BoundAnchor,
    target: &BoundAnchor,
) -> Result<[JointPair; 2], JoineryError> {
    let base_group = axis_group(base.anchor.contact_face);
    let target_group = axis_group(target.anchor.contact_face);

    if base_group == AxisGroup::Vertical {
        return Ok(offset_pairs(base, target, true, [(DOWEL_OFFSET, 0.0), (-DOWEL_OFFSET, 0.0)]));
    }
    if target_group == AxisGroup::Vertical {
        return Ok(offset_pairs(target, base, false, [(DOWEL_OFFSET, 0.0), (-DOWEL_OFFSET, 0.0)]));
    }
    if base_group == AxisGroup::LeftRight {
        return Ok(offset_pairs(base, target, true, [(0.0, DOWEL_OFFSET), (0.0, -DOWEL_OFFSET)]));
    }
    if target_group == AxisGroup::LeftRight {
        return Ok(offset_pairs(target, base, false, [(0.0, DOWEL_OFFSET), (0.0, -DOWEL_OFFSET)]));
    }
    if axis_group(base.anchor.edge_shared_face) == AxisGroup::Vertical {
        return Ok(front_back_offset_pairs(base, target, true));
    }
    if axis_group(target.anchor.edge_shared_face) == AxisGroup::Vertical {
        return Ok(front_back_offset_pairs(target, base, false));
    }
    Err(JoineryError::UnsupportedConnection {
        base_face: base.anchor.contact_face,
        target_face: target.anchor.contact_face,
    })
}

/// The front/back dowel pair on `source`'s anchor: both dowels sit at the
/// same `v`, offset from the anchor by `edge_shared_face`'s in-plane
/// direction so the pair avoids splitting the narrow dimension, and at
/// `u = anchor_u ± 25.4`.
fn front_back_offset_pairs(source: &BoundAnchor, other: &BoundAnchor, source_is_base: bool) -> [JointPair; 2] {
    let offset_dir = Vector2D::of(source.anchor.contact_face, source.anchor.edge_shared_face).v;
    let dv = -offset_dir * EDGE_OFFSET;
    offset_pairs(source, other, source_is_base, [(DOWEL_OFFSET, dv), (-DOWEL_OFFSET, dv)])
}

/// `JointPair`s for a single connection, dispatched on its `ConnectionKind`.
/// Screw uses the same layout as Dowel (spec §4.5): it is modelled as a
/// fastener pair rather than a single joint.
pub fn joint_pairs_for(connection: &Connection) -> Result<Vec<JointPair>, JoineryError> {
    match connection.kind {
        ConnectionKind::Vanilla => {
            Ok(vec![vanilla_joint_pair(&connection.base, &connection.target)])
        }
        ConnectionKind::Dowel { .. } | ConnectionKind::Screw { .. } => {
            let pairs = dowel_joint_pairs(&connection.base, &connection.target)?;
            Ok(pairs.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::geometry::Offset;
    use nd_model::{Anchor, Piece, PieceType};

    fn bound(id: &str, contact: Face, edge_shared: Face, offset: f64, length: f64) -> BoundAnchor {
        let piece = Piece::new(id, PieceType::Pt2x4, length).unwrap();
        let anchor = Anchor::new(contact, edge_shared, Offset::from_min(offset).unwrap()).unwrap();
        BoundAnchor::new(piece, anchor).unwrap()
    }

    #[test]
    fn test_dowel_symmetry_on_top_face() {
        // Scenario B. The contact/edge_shared pair (top, front) resolves to
        // an edge running along the width axis (89mm for a 2x4), not the
        // piece's own length, so the offset must stay within that span.
        let base = bound("p1", Face::Top, Face::Front, 30.0, 1000.0);
        let target = bound("p2", Face::Down, Face::Front, 50.0, 800.0);

        let pairs = dowel_joint_pairs(&base, &target).unwrap();
        let anchor_sp = base.as_surface_point();

        let mut us: Vec<f64> = pairs.iter().map(|p| p.base_side.position.point.u).collect();
        us.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((us[0] - (anchor_sp.point.u - DOWEL_OFFSET)).abs() < 1e-9);
        assert!((us[1] - (anchor_sp.point.u + DOWEL_OFFSET)).abs() < 1e-9);
        for pair in &pairs {
            assert!((pair.base_side.position.point.v - anchor_sp.point.v).abs() < 1e-9);
        }
    }

    #[test]
    fn test_front_back_shared_left_right_is_unsupported() {
        let base = bound("p1", Face::Front, Face::Left, 0.0, 1000.0);
        let target = bound("p2", Face::Back, Face::Right, 0.0, 800.0);
        assert!(matches!(
            dowel_joint_pairs(&base, &target),
            Err(JoineryError::UnsupportedConnection { .. })
        ));
    }

    #[test]
    fn test_vanilla_single_pair() {
        let base = bound("p1", Face::Front, Face::Top, 30.0, 1000.0);
        let target = bound("p2", Face::Down, Face::Front, 50.0, 800.0);
        let conn = Connection::vanilla(base, target);
        let pairs = joint_pairs_for(&conn).unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_left_right_wins_over_front_back_regardless_of_side() {
        // base is left/right, target is front/back: the left/right branch
        // still owns the placement, on whichever side is left/right.
        let base = bound("p1", Face::Left, Face::Top, 0.0, 1000.0);
        let target = bound("p2", Face::Front, Face::Top, 0.0, 800.0);
        let pairs = dowel_joint_pairs(&base, &target).unwrap();
        let anchor_sp = base.as_surface_point();
        let mut vs: Vec<f64> = pairs.iter().map(|p| p.base_side.position.point.v).collect();
        vs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((vs[0] - (anchor_sp.point.v - DOWEL_OFFSET)).abs() < 1e-9);
        assert!((vs[1] - (anchor_sp.point.v + DOWEL_OFFSET)).abs() < 1e-9);
        for pair in &pairs {
            assert!((pair.base_side.position.point.u - anchor_sp.point.u).abs() < 1e-9);
        }

        // Same pairing, sides swapped: target is now left/right and owns it.
        let base2 = bound("p1", Face::Front, Face::Top, 0.0, 1000.0);
        let target2 = bound("p2", Face::Right, Face::Top, 0.0, 800.0);
        let pairs2 = dowel_joint_pairs(&base2, &target2).unwrap();
        let target2_anchor_sp = target2.as_surface_point();
        let mut vs2: Vec<f64> = pairs2.iter().map(|p| p.target_side.position.point.v).collect();
        vs2.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((vs2[0] - (target2_anchor_sp.point.v - DOWEL_OFFSET)).abs() < 1e-9);
        assert!((vs2[1] - (target2_anchor_sp.point.v + DOWEL_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn test_front_back_offset_sign_follows_edge_shared_face() {
        // edge_shared=Top and edge_shared=Down must push the dowel pair's v
        // in opposite directions, derived from Vector2D::of(...).v rather
        // than a fixed sign.
        let base_top = bound("p1", Face::Front, Face::Top, 0.0, 1000.0);
        let target_top = bound("p2", Face::Back, Face::Top, 0.0, 800.0);
        let pairs_top = dowel_joint_pairs(&base_top, &target_top).unwrap();
        let anchor_top = base_top.as_surface_point();
        for pair in &pairs_top {
            assert!((pair.base_side.position.point.v - (anchor_top.point.v - EDGE_OFFSET)).abs() < 1e-9);
        }

        let base_down = bound("p1", Face::Front, Face::Down, 0.0, 1000.0);
        let target_down = bound("p2", Face::Back, Face::Down, 0.0, 800.0);
        let pairs_down = dowel_joint_pairs(&base_down, &target_down).unwrap();
        let anchor_down = base_down.as_surface_point();
        for pair in &pairs_down {
            assert!((pair.base_side.position.point.v - (anchor_down.point.v + EDGE_OFFSET)).abs() < 1e-9);
        }

        let mut us_top: Vec<f64> = pairs_top.iter().map(|p| p.base_side.position.point.u).collect();
        us_top.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((us_top[0] - (anchor_top.point.u - DOWEL_OFFSET)).abs() < 1e-9);
        assert!((us_top[1] - (anchor_top.point.u + DOWEL_OFFSET)).abs() < 1e-9);
    }
}
