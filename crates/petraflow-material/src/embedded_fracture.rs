//! Orthotropic embedded-fracture permeability model.
//!
//! Three mutually orthogonal fracture planes superimposed on an isotropic
//! rock matrix, after Zill et al. (2021). The permeability is
//!
//! ```text
//! k = k_m·I + Σᵢ (bᵢ/aᵢ)·(bᵢ²/12 − k_m)·(I − Mᵢ)
//! ```
//!
//! where the sum runs over the three fracture planes, Mᵢ = nᵢ⊗nᵢ is the
//! structural tensor of plane i, and the aperture bᵢ evolves from the
//! cubic-law baseline once the strain resolved along nᵢ exceeds the
//! plane's threshold strain:
//!
//! ```text
//! bᵢ = sqrt(12·k_m) + aᵢ·⟨εₙ − e0ᵢ⟩
//! ```
//!
//! ## Pipeline (per evaluation point)
//!
//! 1. Resolve the three fracture normals (fixed, or stress eigenvectors)
//! 2. Apply the composed reorientation R_xy·R_yz to the normal set
//! 3. Per plane: resolve normal strain, gate on the threshold, evolve
//!    the aperture
//! 4. Accumulate k_m·I plus each open plane's in-plane enhancement

use petraflow_math::rotation::compose_rotation;
use petraflow_math::tensor::{quadratic_form, self_outer_product};
use petraflow_math::DMat3;
use petraflow_types::constants::CUBIC_LAW_FACTOR;
use petraflow_types::PetraflowResult;

use crate::config::OrthotropicFractureConfig;
use crate::normals::NormalSource;
use crate::state::PointState;
use crate::traits::PermeabilityModel;

/// Orthotropic three-plane embedded-fracture permeability model.
#[derive(Debug, Clone)]
pub struct OrthotropicEmbeddedFracture {
    config: OrthotropicFractureConfig,
    normal_source: NormalSource,
    /// Composed reorientation R_xy·R_yz, fixed per configuration.
    rotation: DMat3,
}

impl OrthotropicEmbeddedFracture {
    /// Build a model from a validated configuration.
    ///
    /// Fails if any fracture spacing is non-positive, or if the
    /// constant-normal mode is selected without a normal tensor.
    pub fn new(config: OrthotropicFractureConfig) -> PetraflowResult<Self> {
        config.validate()?;
        let normal_source = match config.fixed_normals {
            Some(normals) if config.normal_is_constant => NormalSource::Constant(normals),
            _ => NormalSource::PrincipalStress,
        };
        let rotation = compose_rotation(config.rad_xy, config.rad_yz);
        Ok(Self {
            config,
            normal_source,
            rotation,
        })
    }

    /// The configuration this model was built from.
    pub fn config(&self) -> &OrthotropicFractureConfig {
        &self.config
    }

    /// The effective (reoriented) fracture normals at the given stress
    /// state, one per column. Exposed for host post-processing.
    pub fn rotated_normals(&self, stress: &DMat3) -> DMat3 {
        self.rotation * self.normal_source.resolve(stress)
    }
}

impl PermeabilityModel for OrthotropicEmbeddedFracture {
    fn permeability(&self, state: &PointState) -> DMat3 {
        let km = self.config.matrix_permeability;
        let n_r = self.rotated_normals(&state.stress);

        let mut k = DMat3::IDENTITY * km;

        for i in 0..3 {
            let n = n_r.col(i);

            // Strain resolved along the fracture normal.
            let e_n = quadratic_form(&state.strain, n);

            // Macaulay gate: the plane contributes only once open.
            let e0 = self.config.threshold_strain[i];
            let gate = if e_n > e0 { 1.0 } else { 0.0 };

            // Baseline aperture from the cubic law, then linear growth
            // past the threshold scaled by the fracture spacing.
            let a = self.config.spacing[i];
            let b0 = (CUBIC_LAW_FACTOR * km).sqrt();
            let b = b0 + gate * a * (e_n - e0);

            let coeff = gate * (b / a) * (b * b / CUBIC_LAW_FACTOR - km);

            // (I − M) projects the enhancement into the fracture plane:
            // flow is enhanced along the plane, not across it.
            let m = self_outer_product(n);
            k = k + (DMat3::IDENTITY - m) * coeff;
        }

        k
    }

    fn name(&self) -> &str {
        "orthotropic_embedded_fracture"
    }
}
