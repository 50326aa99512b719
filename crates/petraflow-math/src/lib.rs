//! # petraflow-math
//!
//! Linear algebra primitives for the petraflow permeability engine.
//!
//! Provides:
//! - Re-exports of `glam` f64 types (`DVec3`, `DMat3`)
//! - Rank-2 tensor helpers (quadratic form, self-outer-product)
//! - Symmetric 3×3 eigen-decomposition (cyclic Jacobi)
//! - Elementary axis rotations used to reorient fracture normals

pub mod decomposition;
pub mod rotation;
pub mod tensor;

// Re-export glam f64 types as the canonical math types for petraflow.
pub use glam::{DMat3, DVec3};

pub use decomposition::{symmetric_eigen, SymmetricEigen};
