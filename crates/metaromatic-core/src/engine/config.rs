use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CHAIN_ID: &str = "A";
pub const DEFAULT_DISTANCE_CUTOFF: f64 = 6.0;
pub const DEFAULT_ANGLE_CUTOFF: f64 = 109.5;
pub const DEFAULT_MIN_BRIDGE_SIZE: usize = 2;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown lone-pair model '{0}' (expected 'rodrigues' or 'cross-product')")]
pub struct ParseLonePairModelError(pub String);

/// How the two sulfur lone-pair directions are estimated from CG, SD and CE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LonePairModel {
    /// Rotates the two S-C bond vectors about their bisector.
    #[default]
    Rodrigues,
    /// Builds the lone pairs from the bisector and the C-S-C plane normal.
    CrossProduct,
}

impl LonePairModel {
    pub fn name(&self) -> &'static str {
        match self {
            LonePairModel::Rodrigues => "rodrigues",
            LonePairModel::CrossProduct => "cross-product",
        }
    }
}

impl FromStr for LonePairModel {
    type Err = ParseLonePairModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rodrigues" | "rm" => Ok(LonePairModel::Rodrigues),
            "cross-product" | "cp" => Ok(LonePairModel::CrossProduct),
            _ => Err(ParseLonePairModelError(s.to_string())),
        }
    }
}

impl fmt::Display for LonePairModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanCutoffs {
    /// Exclusive upper bound on the SD to ring-midpoint distance, in Angstroms.
    pub distance_angstroms: f64,
    /// Exclusive upper bound on theta or phi, in degrees.
    pub angle_degrees: f64,
}

impl Default for ScanCutoffs {
    fn default() -> Self {
        Self {
            distance_angstroms: DEFAULT_DISTANCE_CUTOFF,
            angle_degrees: DEFAULT_ANGLE_CUTOFF,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub chain_id: String,
    pub cutoffs: ScanCutoffs,
    pub lone_pair_model: LonePairModel,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            cutoffs: ScanCutoffs::default(),
            lone_pair_model: LonePairModel::default(),
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    chain_id: Option<String>,
    distance_cutoff: Option<f64>,
    angle_cutoff: Option<f64>,
    lone_pair_model: Option<LonePairModel>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = Some(chain_id.into());
        self
    }
    pub fn distance_cutoff(mut self, angstroms: f64) -> Self {
        self.distance_cutoff = Some(angstroms);
        self
    }
    pub fn angle_cutoff(mut self, degrees: f64) -> Self {
        self.angle_cutoff = Some(degrees);
        self
    }
    pub fn lone_pair_model(mut self, model: LonePairModel) -> Self {
        self.lone_pair_model = Some(model);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let chain_id = self
            .chain_id
            .ok_or(ConfigError::MissingParameter("chain_id"))?;
        if chain_id.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "chain_id",
                reason: "chain identifier must not be empty".to_string(),
            });
        }

        let distance_angstroms = self
            .distance_cutoff
            .ok_or(ConfigError::MissingParameter("distance_cutoff"))?;
        if !(distance_angstroms.is_finite() && distance_angstroms > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "distance_cutoff",
                reason: format!("{distance_angstroms} is not a positive finite distance"),
            });
        }

        let angle_degrees = self
            .angle_cutoff
            .ok_or(ConfigError::MissingParameter("angle_cutoff"))?;
        if !(angle_degrees > 0.0 && angle_degrees <= 180.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "angle_cutoff",
                reason: format!("{angle_degrees} is outside (0, 180] degrees"),
            });
        }

        Ok(AnalysisConfig {
            chain_id: chain_id.trim().to_string(),
            cutoffs: ScanCutoffs {
                distance_angstroms,
                angle_degrees,
            },
            lone_pair_model: self
                .lone_pair_model
                .ok_or(ConfigError::MissingParameter("lone_pair_model"))?,
        })
    }
}

/// Checks a minimum bridge size; a bridge needs at least one aromatic partner.
pub fn validate_min_bridge_size(min_size: usize) -> Result<usize, ConfigError> {
    if min_size == 0 {
        return Err(ConfigError::InvalidParameter {
            parameter: "min_bridge_size",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(min_size)
}
