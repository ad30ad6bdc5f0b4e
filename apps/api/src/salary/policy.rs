//! Salary policy: the versioned set of constants the estimator blends with
//! per-candidate data.
//!
//! Loaded once at startup (JSON file via `SALARY_POLICY_PATH`, otherwise
//! defaults) and shared read-only through `AppState`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("policy field '{field}' must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("policy field '{field}' must be a finite number")]
    NotFinite { field: &'static str },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SalaryPolicy {
    /// Echoed on every estimate so a figure can be traced to the policy that produced it.
    pub version: String,
    /// E, the market-wide benchmark salary.
    pub external_salary: f64,
    /// Wi
    pub internal_weight: f64,
    /// We
    pub external_weight: f64,
    /// C
    pub customization_factor: f64,
    /// Wc
    pub customization_weight: f64,
    pub risk_percentage: f64,
    pub benefits_value: f64,
    pub transparency_score: f64,
    pub transparency_weight: f64,
    pub equity_score: f64,
    pub diversity_premium: f64,
    pub flexibility_score: f64,
    pub flexibility_multiplier: f64,
    pub well_being_value: f64,
    pub functional_multiplier: f64,
    pub market_demand_multiplier: f64,
    /// Used when a location row has no (or a zero) multiplier.
    pub default_location_multiplier: f64,
    /// Used when an industry row has no (or a zero) trend.
    pub default_trend_percentage: f64,
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            version: "default-v1".to_string(),
            external_salary: 92000.0,
            internal_weight: 0.4,
            external_weight: 0.5,
            customization_factor: 5000.0,
            customization_weight: 0.1,
            risk_percentage: 5.0,
            benefits_value: 10000.0,
            transparency_score: 4.0,
            transparency_weight: 0.02,
            equity_score: 4.0,
            diversity_premium: 2000.0,
            flexibility_score: 3.0,
            flexibility_multiplier: 1500.0,
            well_being_value: 3000.0,
            functional_multiplier: 1.05,
            market_demand_multiplier: 1.03,
            default_location_multiplier: 1.1,
            default_trend_percentage: 3.0,
        }
    }
}

impl SalaryPolicy {
    /// Reads a policy from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read salary policy {}", path.display()))?;
        let policy: SalaryPolicy = serde_json::from_str(&raw)
            .with_context(|| format!("Salary policy {} is not valid JSON", path.display()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Every constant must be finite and non-negative.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(PolicyError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(PolicyError::Negative { field, value });
            }
        }
        Ok(())
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 18] {
        [
            ("external_salary", self.external_salary),
            ("internal_weight", self.internal_weight),
            ("external_weight", self.external_weight),
            ("customization_factor", self.customization_factor),
            ("customization_weight", self.customization_weight),
            ("risk_percentage", self.risk_percentage),
            ("benefits_value", self.benefits_value),
            ("transparency_score", self.transparency_score),
            ("transparency_weight", self.transparency_weight),
            ("equity_score", self.equity_score),
            ("diversity_premium", self.diversity_premium),
            ("flexibility_score", self.flexibility_score),
            ("flexibility_multiplier", self.flexibility_multiplier),
            ("well_being_value", self.well_being_value),
            ("functional_multiplier", self.functional_multiplier),
            ("market_demand_multiplier", self.market_demand_multiplier),
            ("default_location_multiplier", self.default_location_multiplier),
            ("default_trend_percentage", self.default_trend_percentage),
        ]
    }
}
