//! # petraflow-types
//!
//! Shared types, error taxonomy, and physical constants for the
//! petraflow embedded-fracture permeability engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that the other petraflow crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{PetraflowError, PetraflowResult};
pub use scalar::Scalar;
