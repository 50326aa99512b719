//! Per-point input snapshot — the boundary contract with the host.
//!
//! The host simulation owns the mesh and quadrature loop; for each
//! evaluation point it supplies a read-only snapshot of the current
//! stress and strain tensors. The models never mutate or retain it.

use petraflow_math::DMat3;
use petraflow_types::{PetraflowError, PetraflowResult};
use serde::{Deserialize, Serialize};

/// Read-only mechanical state at one evaluation point.
///
/// Which material properties the host sources these tensors from is
/// described by [`stress_property_name`](crate::OrthotropicFractureConfig::stress_property_name)
/// and [`strain_property_name`](crate::OrthotropicFractureConfig::strain_property_name)
/// on the model configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointState {
    /// Current total stress tensor at the point.
    pub stress: DMat3,
    /// Current strain tensor at the point (measure per configuration).
    pub strain: DMat3,
}

impl PointState {
    /// Snapshot with both tensors zero (unstressed, unstrained point).
    pub fn zero() -> Self {
        Self {
            stress: DMat3::ZERO,
            strain: DMat3::ZERO,
        }
    }
}

/// Extract component (i, j) of a permeability tensor with range checks.
///
/// Host post-processing extracts individual tensor components for output
/// fields; indices outside 0..=2 are rejected rather than wrapped.
pub fn permeability_component(k: &DMat3, i: usize, j: usize) -> PetraflowResult<f64> {
    if i > 2 {
        return Err(PetraflowError::IndexOutOfRange(format!(
            "index_i = {i} (permeability tensor indices are 0, 1, 2)"
        )));
    }
    if j > 2 {
        return Err(PetraflowError::IndexOutOfRange(format!(
            "index_j = {j} (permeability tensor indices are 0, 1, 2)"
        )));
    }
    Ok(k.col(j)[i])
}
