//! Single-plane embedded-fracture permeability model.
//!
//! The base variant of the embedded-fracture family: one fracture plane
//! whose normal is either configured (vertical plane by default) or
//! aligned with the largest principal stress. Same aperture law and
//! in-plane enhancement as the orthotropic model, with scalar spacing
//! and threshold:
//!
//! ```text
//! k = k_m·I + (b/a)·(b²/12 − k_m)·(I − n⊗n)
//! b = sqrt(12·k_m) + a·⟨εₙ − e0⟩
//! ```

use petraflow_math::rotation::compose_rotation;
use petraflow_math::tensor::{quadratic_form, self_outer_product};
use petraflow_math::{DMat3, DVec3};
use petraflow_types::constants::CUBIC_LAW_FACTOR;
use petraflow_types::PetraflowResult;

use crate::config::SinglePlaneFractureConfig;
use crate::normals::PlaneNormalSource;
use crate::state::PointState;
use crate::traits::PermeabilityModel;

/// Single-plane embedded-fracture permeability model.
#[derive(Debug, Clone)]
pub struct SinglePlaneEmbeddedFracture {
    config: SinglePlaneFractureConfig,
    normal_source: PlaneNormalSource,
    rotation: DMat3,
}

impl SinglePlaneEmbeddedFracture {
    /// Build a model from a validated configuration.
    ///
    /// In constant-normal mode a missing normal falls back to (0, 0, 1)
    /// rather than failing.
    pub fn new(config: SinglePlaneFractureConfig) -> PetraflowResult<Self> {
        config.validate()?;
        let normal_source = if config.normal_is_constant {
            PlaneNormalSource::Constant(config.constant_normal())
        } else {
            PlaneNormalSource::MajorPrincipalStress
        };
        let rotation = compose_rotation(config.rad_xy, config.rad_yz);
        Ok(Self {
            config,
            normal_source,
            rotation,
        })
    }

    /// The configuration this model was built from.
    pub fn config(&self) -> &SinglePlaneFractureConfig {
        &self.config
    }

    /// The effective (reoriented) fracture normal at the given stress
    /// state. Exposed for host post-processing.
    pub fn rotated_normal(&self, stress: &DMat3) -> DVec3 {
        self.rotation * self.normal_source.resolve(stress)
    }
}

impl PermeabilityModel for SinglePlaneEmbeddedFracture {
    fn permeability(&self, state: &PointState) -> DMat3 {
        let km = self.config.matrix_permeability;
        let n = self.rotated_normal(&state.stress);

        let e_n = quadratic_form(&state.strain, n);

        let e0 = self.config.threshold_strain;
        let gate = if e_n > e0 { 1.0 } else { 0.0 };

        let a = self.config.spacing;
        let b0 = (CUBIC_LAW_FACTOR * km).sqrt();
        let b = b0 + gate * a * (e_n - e0);

        let coeff = gate * (b / a) * (b * b / CUBIC_LAW_FACTOR - km);

        let m = self_outer_product(n);
        DMat3::IDENTITY * km + (DMat3::IDENTITY - m) * coeff
    }

    fn name(&self) -> &str {
        "single_plane_embedded_fracture"
    }
}
