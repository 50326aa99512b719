//! Model configuration with setup-time validation.
//!
//! Configuration is supplied once by the host and validated before any
//! per-point evaluation. Validation failures are fatal: a model cannot be
//! constructed from an invalid configuration.

use petraflow_math::{DMat3, DVec3};
use petraflow_types::constants::{CUBIC_LAW_FACTOR, DEFAULT_FRACTURE_NORMAL, EPSILON};
use petraflow_types::{PetraflowError, PetraflowResult};
use serde::{Deserialize, Serialize};

/// Which strain measure the host should supply in [`PointState::strain`].
///
/// The Zill et al. model is formulated for total strain, but deployments
/// of the orthotropic variant have historically bound it to creep strain.
/// The binding is explicit here so a host cannot source the wrong property
/// silently.
///
/// [`PointState::strain`]: crate::PointState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrainMeasure {
    /// Total mechanical strain (`"total_strain"`).
    Total,
    /// Creep strain only (`"creep_strain"`).
    Creep,
}

impl StrainMeasure {
    /// The material-property name the host sources this measure from.
    pub fn property_name(self) -> &'static str {
        match self {
            StrainMeasure::Total => "total_strain",
            StrainMeasure::Creep => "creep_strain",
        }
    }
}

/// Configuration for the orthotropic three-plane embedded-fracture model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthotropicFractureConfig {
    /// Mean fracture spacing a_i per fracture direction (m). Each must be
    /// strictly positive.
    pub spacing: [f64; 3],

    /// Threshold strain e0_i per fracture direction. A fracture plane only
    /// opens once the resolved normal strain exceeds its threshold.
    pub threshold_strain: [f64; 3],

    /// Matrix (intrinsic) permeability k_m of the unfractured rock (m²).
    pub matrix_permeability: f64,

    /// Nominal initial fracture aperture b0 (m).
    ///
    /// Accepted for completeness but **superseded**: evaluation derives
    /// the baseline aperture as `sqrt(12 · k_m)` per the cubic law, as the
    /// literature model does. Validation warns when the configured value
    /// differs from the derived one.
    pub baseline_aperture: f64,

    /// Rotation angle about the z axis (x-y plane), radians.
    pub rad_xy: f64,

    /// Rotation angle about the x axis (y-z plane), radians.
    pub rad_yz: f64,

    /// Fixed fracture normals, one unit vector per column. Required when
    /// `normal_is_constant` is set; ignored otherwise.
    pub fixed_normals: Option<DMat3>,

    /// Whether the fracture normals are constant/known. When false, the
    /// normals are the eigenvectors of the current stress tensor.
    pub normal_is_constant: bool,

    /// Optional prefix namespacing the stress property this model reads,
    /// letting multiple mechanics material systems coexist on one block.
    pub base_name: Option<String>,

    /// Which strain measure the host supplies. Defaults to creep strain,
    /// the historical binding of the orthotropic variant.
    pub strain_measure: StrainMeasure,
}

impl Default for OrthotropicFractureConfig {
    fn default() -> Self {
        Self {
            spacing: [1.0; 3],
            threshold_strain: [0.0; 3],
            matrix_permeability: 1.0,
            baseline_aperture: CUBIC_LAW_FACTOR.sqrt(),
            rad_xy: 0.0,
            rad_yz: 0.0,
            fixed_normals: None,
            normal_is_constant: false,
            base_name: None,
            strain_measure: StrainMeasure::Creep,
        }
    }
}

impl OrthotropicFractureConfig {
    /// Validate the configuration. Fatal on failure: no per-point
    /// evaluation may happen with an invalid configuration.
    pub fn validate(&self) -> PetraflowResult<()> {
        for (j, &a) in self.spacing.iter().enumerate() {
            if a <= 0.0 {
                return Err(PetraflowError::InvalidConfig(format!(
                    "mean fracture spacing a[{j}] must be > 0, got {a}"
                )));
            }
        }
        if self.matrix_permeability < 0.0 {
            return Err(PetraflowError::InvalidConfig(format!(
                "matrix permeability must be non-negative, got {}",
                self.matrix_permeability
            )));
        }
        if self.normal_is_constant && self.fixed_normals.is_none() {
            return Err(PetraflowError::MissingParameter(
                "fixed_normals: constant-normal mode is selected but no normal tensor was supplied"
                    .into(),
            ));
        }

        let derived = self.derived_baseline_aperture();
        if (self.baseline_aperture - derived).abs() > EPSILON * derived.max(EPSILON) {
            tracing::warn!(
                configured = self.baseline_aperture,
                derived,
                "configured baseline aperture is superseded by sqrt(12·k_m)"
            );
        }
        tracing::debug!(
            stress_property = %self.stress_property_name(),
            strain_property = self.strain_property_name(),
            "orthotropic fracture configuration validated"
        );
        Ok(())
    }

    /// Baseline aperture actually used in evaluation: `sqrt(12 · k_m)`.
    pub fn derived_baseline_aperture(&self) -> f64 {
        (CUBIC_LAW_FACTOR * self.matrix_permeability).sqrt()
    }

    /// Name of the stress property the host should source, honoring the
    /// `base_name` namespacing convention (`"<base>_stress"`).
    pub fn stress_property_name(&self) -> String {
        match &self.base_name {
            Some(base) => format!("{base}_stress"),
            None => "stress".to_string(),
        }
    }

    /// Name of the strain property the host should source.
    pub fn strain_property_name(&self) -> &'static str {
        self.strain_measure.property_name()
    }
}

/// Configuration for the single-plane embedded-fracture model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinglePlaneFractureConfig {
    /// Mean fracture spacing a (m). Must be strictly positive.
    pub spacing: f64,

    /// Threshold strain e0.
    pub threshold_strain: f64,

    /// Matrix (intrinsic) permeability k_m of the unfractured rock (m²).
    pub matrix_permeability: f64,

    /// Rotation angle about the z axis (x-y plane), radians.
    pub rad_xy: f64,

    /// Rotation angle about the x axis (y-z plane), radians.
    pub rad_yz: f64,

    /// Fixed fracture normal. In constant-normal mode a missing vector
    /// falls back to the vertical-plane default (0, 0, 1).
    pub fixed_normal: Option<DVec3>,

    /// Whether the fracture normal is constant/known. When false, the
    /// normal is the eigenvector of the largest principal stress.
    pub normal_is_constant: bool,

    /// Optional prefix namespacing the stress property this model reads.
    pub base_name: Option<String>,

    /// Which strain measure the host supplies. Defaults to total strain.
    pub strain_measure: StrainMeasure,
}

impl Default for SinglePlaneFractureConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            threshold_strain: 1.0,
            matrix_permeability: 1.0,
            rad_xy: 0.0,
            rad_yz: 0.0,
            fixed_normal: None,
            normal_is_constant: false,
            base_name: None,
            strain_measure: StrainMeasure::Total,
        }
    }
}

impl SinglePlaneFractureConfig {
    /// Validate the configuration. Fatal on failure.
    pub fn validate(&self) -> PetraflowResult<()> {
        if self.spacing <= 0.0 {
            return Err(PetraflowError::InvalidConfig(format!(
                "mean fracture spacing a must be > 0, got {}",
                self.spacing
            )));
        }
        if self.matrix_permeability < 0.0 {
            return Err(PetraflowError::InvalidConfig(format!(
                "matrix permeability must be non-negative, got {}",
                self.matrix_permeability
            )));
        }
        tracing::debug!(
            stress_property = %self.stress_property_name(),
            strain_property = self.strain_property_name(),
            "single-plane fracture configuration validated"
        );
        Ok(())
    }

    /// Baseline aperture used in evaluation: `sqrt(12 · k_m)`.
    pub fn derived_baseline_aperture(&self) -> f64 {
        (CUBIC_LAW_FACTOR * self.matrix_permeability).sqrt()
    }

    /// The fixed normal in constant-normal mode, with the (0, 0, 1)
    /// fallback when none was supplied.
    pub fn constant_normal(&self) -> DVec3 {
        self.fixed_normal
            .unwrap_or_else(|| DVec3::from_array(DEFAULT_FRACTURE_NORMAL))
    }

    /// Name of the stress property the host should source.
    pub fn stress_property_name(&self) -> String {
        match &self.base_name {
            Some(base) => format!("{base}_stress"),
            None => "stress".to_string(),
        }
    }

    /// Name of the strain property the host should source.
    pub fn strain_property_name(&self) -> &'static str {
        self.strain_measure.property_name()
    }
}
