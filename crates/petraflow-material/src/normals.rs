//! Fracture-normal direction resolution.
//!
//! The normal source is selected once at model construction and is an
//! explicit two-variant choice: either the configured normals are used
//! directly, or the normals are derived from the eigenvectors of the
//! current stress tensor, under the modeling assumption that fracture
//! planes align with principal stress directions.

use petraflow_math::{symmetric_eigen, DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Source of the three fracture-plane normals (orthotropic model).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalSource {
    /// Fixed, configured normals — one unit vector per column.
    Constant(DMat3),
    /// Eigenvectors of the current stress tensor, one per column,
    /// ordered by ascending principal stress.
    PrincipalStress,
}

impl NormalSource {
    /// Resolve the 3×3 tensor whose columns are the fracture normals.
    pub fn resolve(&self, stress: &DMat3) -> DMat3 {
        match self {
            NormalSource::Constant(normals) => *normals,
            NormalSource::PrincipalStress => symmetric_eigen(stress).eigenvectors,
        }
    }
}

/// Source of the single fracture-plane normal (single-plane model).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneNormalSource {
    /// Fixed, configured normal vector.
    Constant(DVec3),
    /// Eigenvector of the largest principal stress (last column of the
    /// ascending-ordered eigen-decomposition).
    MajorPrincipalStress,
}

impl PlaneNormalSource {
    /// Resolve the fracture-plane normal.
    pub fn resolve(&self, stress: &DMat3) -> DVec3 {
        match self {
            PlaneNormalSource::Constant(normal) => *normal,
            PlaneNormalSource::MajorPrincipalStress => symmetric_eigen(stress).eigenvectors.col(2),
        }
    }
}
