use nd_core::geometry::{Point2D, SurfacePoint, Vector2D};
use nd_model::BoundAnchor;

use crate::joint::Joint;

/// A 2x2 matrix whose rows are the contact face's `(u, v)` projections of
/// `edge_shared_face` and of the anchor's up direction. Because both faces
/// lie in the contact plane and are mutually perpendicular, this is always a
/// signed-permutation matrix.
///
/// `flip_up` uses the opposite of `cross(contact_face, edge_shared_face)`
/// instead — the target side of a mated pair is turned over to face the
/// base, the same `as_orientation(flip_up: true)` convention `project_joint`
/// uses for the target's pose.
fn anchor_matrix(bound: &BoundAnchor, flip_up: bool) -> [[f64; 2]; 2] {
    let contact = bound.anchor.contact_face;
    let edge_shared = Vector2D::of(contact, bound.anchor.edge_shared_face);
    let up_face = if flip_up {
        bound.anchor.up_face().opposite()
    } else {
        bound.anchor.up_face()
    };
    let up = Vector2D::of(contact, up_face);
    [[edge_shared.u, edge_shared.v], [up.u, up.v]]
}

fn mat_inv(m: [[f64; 2]; 2]) -> [[f64; 2]; 2] {
    let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    debug_assert!(det.abs() > 1e-7, "anchor matrix must be invertible: {m:?}");
    let inv_det = 1.0 / det;
    [
        [m[1][1] * inv_det, -m[0][1] * inv_det],
        [-m[1][0] * inv_det, m[0][0] * inv_det],
    ]
}

fn mat_mul(a: [[f64; 2]; 2], b: [[f64; 2]; 2]) -> [[f64; 2]; 2] {
    let mut out = [[0.0; 2]; 2];
    for row in 0..2 {
        for col in 0..2 {
            out[row][col] = a[row][0] * b[0][col] + a[row][1] * b[1][col];
        }
    }
    out
}

/// The three signed-permutation flags extracted from the relative
/// transform `T = M_target^-1 . M_base` (spec §4.4 step 3).
struct AxisTransform {
    transpose_axes: bool,
    flip_u: bool,
    flip_v: bool,
}

fn relative_transform(base: &BoundAnchor, target: &BoundAnchor) -> AxisTransform {
    let m_base = anchor_matrix(base, false);
    let m_target = anchor_matrix(target, true);
    let t = mat_mul(mat_inv(m_target), m_base);

    const EPS: f64 = 1e-7;
    let transpose_axes = t[0][0].abs() < EPS && t[1][1].abs() < EPS;
    let flip_u = t[0][0] < -EPS || t[1][0] < -EPS;
    let flip_v = t[0][1] < -EPS || t[1][1] < -EPS;
    AxisTransform {
        transpose_axes,
        flip_u,
        flip_v,
    }
}

/// Transforms a surface point expressed on `base`'s contact face into the
/// matching surface point on `target`'s contact face, under the convention
/// that the two anchors physically coincide once `target` is rotated so its
/// contact face is opposite `base`'s.
pub fn project_surface_point(
    base: &BoundAnchor,
    target: &BoundAnchor,
    p_base: SurfacePoint,
) -> SurfacePoint {
    let base_anchor_sp = base.as_surface_point();
    let target_anchor_sp = target.as_surface_point();

    let transform = relative_transform(base, target);

    let mut du = p_base.point.u - base_anchor_sp.point.u;
    let mut dv = p_base.point.v - base_anchor_sp.point.v;

    if transform.flip_u {
        du = -du;
    }
    if transform.flip_v {
        dv = -dv;
    }
    if transform.transpose_axes {
        std::mem::swap(&mut du, &mut dv);
    }

    SurfacePoint::new(
        target.anchor.contact_face,
        Point2D::new(target_anchor_sp.point.u + du, target_anchor_sp.point.v + dv),
    )
}

/// Projects `j_base` from `base`'s contact face onto `target`'s, flipping
/// `target`'s `up` relative to `base`'s — the target piece is turned over
/// to mate with the base.
pub fn project_joint(base: &BoundAnchor, target: &BoundAnchor, j_base: Joint) -> Joint {
    let position = project_surface_point(base, target, j_base.position);
    let orientation = target.as_orientation(true);
    Joint::new(position, orientation)
}
