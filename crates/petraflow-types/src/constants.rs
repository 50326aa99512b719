//! Physical constants and numerical defaults.

/// Cubic-law factor relating fracture aperture to permeability:
/// a fracture of aperture b conducts like a slot of permeability b²/12.
pub const CUBIC_LAW_FACTOR: f64 = 12.0;

/// Fallback fracture normal when the constant-normal mode is selected
/// without an explicit vector (vertical fracture plane).
pub const DEFAULT_FRACTURE_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

/// Epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1.0e-12;

/// Maximum Jacobi sweeps for the symmetric eigen-solver.
/// A symmetric 3×3 converges in a handful of sweeps.
pub const JACOBI_MAX_SWEEPS: u32 = 32;
