//! Rank-2 tensor helpers.
//!
//! Stress, strain, rotation, structural, and permeability tensors are all
//! represented as `glam::DMat3` (column-major 3×3). These helpers cover
//! the operations glam does not provide directly.

use glam::{DMat3, DVec3};
use petraflow_types::constants::EPSILON;

/// Quadratic form n · T · n.
///
/// For a strain tensor ε and a unit normal n this is the normal strain
/// resolved in direction n.
#[inline]
pub fn quadratic_form(t: &DMat3, n: DVec3) -> f64 {
    n.dot(*t * n)
}

/// Self-outer-product n ⊗ n.
///
/// For a unit fracture normal this is the structural tensor M of the
/// fracture plane; (I − M) projects onto the plane itself.
#[inline]
pub fn self_outer_product(n: DVec3) -> DMat3 {
    // Column j of n ⊗ n is n scaled by n[j].
    DMat3::from_cols(n * n.x, n * n.y, n * n.z)
}

/// Returns true if the tensor is symmetric to within `EPSILON`
/// relative to its largest-magnitude entry.
///
/// The comparison scales with the tensor itself, so it holds up for
/// permeability-sized entries (1e-15 and below) as well as order-one
/// stress tensors. The zero tensor is symmetric.
pub fn is_symmetric(t: &DMat3) -> bool {
    let scale = t
        .to_cols_array()
        .iter()
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return true;
    }
    let tol = EPSILON * scale;
    (t.col(0).y - t.col(1).x).abs() <= tol
        && (t.col(0).z - t.col(2).x).abs() <= tol
        && (t.col(1).z - t.col(2).y).abs() <= tol
}
