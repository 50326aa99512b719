//! Elementary axis rotations for fracture-normal reorientation.
//!
//! The host material may be randomly reoriented during setup; two
//! configured angles let the fracture-normal set track that reorientation.
//! The element layout matches the rotation-of-axes convention used in the
//! Zill et al. continuum model: R_xy mixes the first two coordinate axes,
//! R_yz the last two.

use glam::{DMat3, DVec3};

/// Rotation about the out-of-plane (z) axis by `rad_xy` radians.
///
/// ```text
/// [  cos  sin  0 ]
/// [ -sin  cos  0 ]
/// [   0    0   1 ]
/// ```
pub fn rotation_xy(rad_xy: f64) -> DMat3 {
    let (s, c) = rad_xy.sin_cos();
    DMat3::from_cols(
        DVec3::new(c, -s, 0.0),
        DVec3::new(s, c, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    )
}

/// Rotation about the first coordinate (x) axis by `rad_yz` radians.
///
/// ```text
/// [ 1   0    0  ]
/// [ 0  cos  sin ]
/// [ 0 -sin  cos ]
/// ```
pub fn rotation_yz(rad_yz: f64) -> DMat3 {
    let (s, c) = rad_yz.sin_cos();
    DMat3::from_cols(
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, c, -s),
        DVec3::new(0.0, s, c),
    )
}

/// Effective rotation applied to the fracture-normal set: R_xy · R_yz.
///
/// Both elementary rotations are orthonormal, so the composition preserves
/// the norm of every normal it is applied to; with both angles zero it is
/// exactly the identity.
pub fn compose_rotation(rad_xy: f64, rad_yz: f64) -> DMat3 {
    rotation_xy(rad_xy) * rotation_yz(rad_yz)
}
