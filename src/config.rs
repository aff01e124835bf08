use thiserror::Error;

use crate::data::model::Field;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dataset must contain at least one row")]
    NoRows,

    #[error("{field}: standard deviation must be finite and positive, got {std_dev}")]
    InvalidStdDev { field: Field, std_dev: f64 },

    #[error("{field}: clamp range [{min}, {max}] is empty")]
    EmptyClampRange { field: Field, min: f64, max: f64 },

    #[error("{field}: normal distribution rejected")]
    Distribution {
        field: Field,
        #[source]
        source: rand_distr::NormalError,
    },

    #[error("row control bounds invalid: min {min}, default {default}, max {max}")]
    ControlBounds { min: usize, default: usize, max: usize },

    #[error("row control step must be at least 1")]
    ZeroStep,
}

// ---------------------------------------------------------------------------
// Per-field generation parameters
// ---------------------------------------------------------------------------

/// Normal distribution parameters plus the clamp applied after sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDistribution {
    pub field: Field,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    /// `None` means unbounded above.
    pub max: Option<f64>,
}

impl FieldDistribution {
    pub fn clamp(&self, value: f64) -> f64 {
        let lower = value.max(self.min);
        match self.max {
            Some(max) => lower.min(max),
            None => lower,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Every tunable constant of the explorer in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub seed: u64,
    pub rows: usize,
    /// Sampled in this order, one full column at a time.
    pub distributions: Vec<FieldDistribution>,
    /// Smallest window the subset selector will ever return.
    pub clamp_floor: usize,
    pub control_min: usize,
    pub control_default: usize,
    pub control_step: usize,
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rows: 74,
            distributions: vec![
                FieldDistribution {
                    field: Field::SupplierLeadTime,
                    mean: 12.0,
                    std_dev: 5.0,
                    min: 1.0,
                    max: None,
                },
                FieldDistribution {
                    field: Field::InventoryLevels,
                    mean: 300.0,
                    std_dev: 90.0,
                    min: 0.0,
                    max: None,
                },
                FieldDistribution {
                    field: Field::OrderFrequency,
                    mean: 6.0,
                    std_dev: 2.5,
                    min: 0.5,
                    max: None,
                },
                FieldDistribution {
                    field: Field::DeliveryPerformance,
                    mean: 85.0,
                    std_dev: 8.0,
                    min: 40.0,
                    max: Some(100.0),
                },
                FieldDistribution {
                    field: Field::CostPerUnit,
                    mean: 28.0,
                    std_dev: 7.0,
                    min: 1.0,
                    max: None,
                },
            ],
            clamp_floor: 2,
            control_min: 5,
            control_default: 20,
            control_step: 1,
            top_k: 3,
        }
    }
}

impl AnalysisConfig {
    /// The control's upper bound is always the full dataset length.
    pub fn control_max(&self) -> usize {
        self.rows
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        for dist in &self.distributions {
            if !dist.std_dev.is_finite() || dist.std_dev <= 0.0 {
                return Err(ConfigError::InvalidStdDev {
                    field: dist.field,
                    std_dev: dist.std_dev,
                });
            }
            if let Some(max) = dist.max {
                if max < dist.min {
                    return Err(ConfigError::EmptyClampRange {
                        field: dist.field,
                        min: dist.min,
                        max,
                    });
                }
            }
        }
        let max = self.control_max();
        if self.control_min > self.control_default
            || self.control_default > max
            || self.control_min < self.clamp_floor
        {
            return Err(ConfigError::ControlBounds {
                min: self.control_min,
                default: self.control_default,
                max,
            });
        }
        if self.control_step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AnalysisConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.control_max(), 74);
        assert_eq!(cfg.distributions.len(), Field::ALL.len());
    }

    #[test]
    fn rejects_non_positive_std_dev() {
        let mut cfg = AnalysisConfig::default();
        cfg.distributions[2].std_dev = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidStdDev { field: Field::OrderFrequency, .. })
        ));
    }

    #[test]
    fn rejects_inverted_clamp() {
        let mut cfg = AnalysisConfig::default();
        cfg.distributions[3].max = Some(10.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyClampRange { .. })));
    }

    #[test]
    fn rejects_default_above_rows() {
        let mut cfg = AnalysisConfig::default();
        cfg.rows = 10;
        assert!(matches!(cfg.validate(), Err(ConfigError::ControlBounds { .. })));
    }

    #[test]
    fn clamp_respects_both_bounds() {
        let cfg = AnalysisConfig::default();
        let delivery = cfg.distributions[3];
        assert_eq!(delivery.clamp(120.0), 100.0);
        assert_eq!(delivery.clamp(12.0), 40.0);
        assert_eq!(delivery.clamp(77.5), 77.5);
        let lead = cfg.distributions[0];
        assert_eq!(lead.clamp(-3.0), 1.0);
        assert_eq!(lead.clamp(1e6), 1e6);
    }
}
