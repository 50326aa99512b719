//! Scalar type alias for the engine.
//!
//! Permeabilities sit around 1e-15 m² and aperture terms around 1e-7 m,
//! so the engine runs in `f64` throughout. The alias keeps the choice
//! in one place.

/// The floating-point type used throughout the engine.
pub type Scalar = f64;
