//! Permeability model trait — the core material abstraction.
//!
//! Every permeability model implements this trait, enabling the host
//! to swap model variants without changing its quadrature-loop logic.

use petraflow_math::DMat3;

use crate::state::PointState;

/// Trait for permeability constitutive models.
///
/// Implementations map the mechanical state at one evaluation point to a
/// rank-2 permeability tensor consumed downstream by the flow-transport
/// equations.
///
/// # Purity
///
/// `permeability` must be a pure function of `(state, configuration)`:
/// no input is mutated, no state is retained between calls, and identical
/// inputs yield bit-identical output. The host may therefore invoke one
/// model instance on many points concurrently with no synchronization.
pub trait PermeabilityModel: Send + Sync {
    /// Compute the permeability tensor at one evaluation point.
    fn permeability(&self, state: &PointState) -> DMat3;

    /// Returns the name of this permeability model.
    fn name(&self) -> &str;
}
