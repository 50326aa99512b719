//! # petraflow-material
//!
//! Permeability constitutive models for fractured porous rock.
//!
//! ## Design
//!
//! The [`PermeabilityModel`] trait defines the interface for computing a
//! rank-2 permeability tensor from a per-point stress/strain snapshot.
//! Implementors model flow enhancement from fractures embedded in an
//! isotropic rock matrix, after Zill et al. (2021), *Hydro-mechanical
//! continuum modelling of fluid percolation through rock*:
//!
//! - [`OrthotropicEmbeddedFracture`] — three mutually orthogonal fracture
//!   planes, one aperture evolution per plane.
//! - [`SinglePlaneEmbeddedFracture`] — one fracture plane, normal fixed or
//!   aligned with the largest principal stress.
//!
//! Both are pure functions of `(stress, strain, configuration)`: no state
//! is retained between calls, so the host may evaluate many points
//! concurrently with no synchronization.

pub mod config;
pub mod embedded_fracture;
pub mod normals;
pub mod single_plane;
pub mod state;
pub mod traits;

pub use config::{OrthotropicFractureConfig, SinglePlaneFractureConfig, StrainMeasure};
pub use embedded_fracture::OrthotropicEmbeddedFracture;
pub use normals::{NormalSource, PlaneNormalSource};
pub use single_plane::SinglePlaneEmbeddedFracture;
pub use state::{permeability_component, PointState};
pub use traits::PermeabilityModel;
