//! Salary Estimator: pure, deterministic blend of internal comparables,
//! market data, skill premiums and policy adjustments.
//!
//! No I/O and no shared state: safe to call concurrently for any number of
//! candidates. Failures are logged and returned, never raised.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::salary::error::EstimateError;
use crate::salary::policy::SalaryPolicy;

/// Flattened numeric inputs for one estimate.
///
/// The three skill vectors are parallel: index `i` in each refers to the same skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimationInputs {
    /// I
    pub internal_median: f64,
    /// Wi
    pub internal_weight: f64,
    /// E
    pub external_salary: f64,
    /// We
    pub external_weight: f64,
    pub skill_proficiency: Vec<f64>,
    pub skill_weights: Vec<f64>,
    pub market_premiums: Vec<f64>,
    pub location_multiplier: f64,
    pub trend_percentage: f64,
    /// C
    pub customization_factor: f64,
    /// Wc
    pub customization_weight: f64,
    pub risk_percentage: f64,
    pub benefits: f64,
    pub transparency_score: f64,
    pub transparency_weight: f64,
    pub equity_score: f64,
    pub diversity_premium: f64,
    pub flexibility_score: f64,
    pub flexibility_multiplier: f64,
    pub well_being_value: f64,
    pub functional_multiplier: f64,
    pub market_demand_multiplier: f64,
}

/// Per-candidate values the policy cannot supply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFactors {
    pub internal_median: f64,
    pub skill_proficiency: Vec<f64>,
    pub skill_weights: Vec<f64>,
    pub market_premiums: Vec<f64>,
    pub location_multiplier: f64,
    pub trend_percentage: f64,
}

impl EstimationInputs {
    pub fn new(factors: CandidateFactors, policy: &SalaryPolicy) -> Self {
        Self {
            internal_median: factors.internal_median,
            internal_weight: policy.internal_weight,
            external_salary: policy.external_salary,
            external_weight: policy.external_weight,
            skill_proficiency: factors.skill_proficiency,
            skill_weights: factors.skill_weights,
            market_premiums: factors.market_premiums,
            location_multiplier: factors.location_multiplier,
            trend_percentage: factors.trend_percentage,
            customization_factor: policy.customization_factor,
            customization_weight: policy.customization_weight,
            risk_percentage: policy.risk_percentage,
            benefits: policy.benefits_value,
            transparency_score: policy.transparency_score,
            transparency_weight: policy.transparency_weight,
            equity_score: policy.equity_score,
            diversity_premium: policy.diversity_premium,
            flexibility_score: policy.flexibility_score,
            flexibility_multiplier: policy.flexibility_multiplier,
            well_being_value: policy.well_being_value,
            functional_multiplier: policy.functional_multiplier,
            market_demand_multiplier: policy.market_demand_multiplier,
        }
    }
}

/// Every component of an estimate, in summation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryBreakdown {
    pub internal_component: f64,
    pub external_component: f64,
    pub skill_premium: f64,
    pub location_adjustment: f64,
    pub trend_adjustment: f64,
    pub customization_adjustment: f64,
    pub risk_premium: f64,
    pub benefits: f64,
    pub transparency_adjustment: f64,
    pub equity_adjustment: f64,
    pub flexibility_premium: f64,
    pub well_being_value: f64,
    pub subtotal: f64,
    pub functional_multiplier: f64,
    pub market_demand_multiplier: f64,
    pub final_salary: f64,
}

/// Computes the recommended salary.
///
/// subtotal = I·Wi + E·We + Σ(pᵢ·wᵢ·mᵢ) + I·(loc−1) + I·trend/100 + C·Wc + I·risk/100
///          + benefits + I·ts·tw + equity·diversity + flex·flex_mult + well_being
/// final    = subtotal · functional · market_demand
pub fn estimate(inputs: &EstimationInputs) -> Result<SalaryBreakdown, EstimateError> {
    check_skill_shape(inputs)?;

    let i = inputs.internal_median;

    let internal_component = i * inputs.internal_weight;
    let external_component = inputs.external_salary * inputs.external_weight;
    let skill_premium = skill_premium(
        &inputs.skill_proficiency,
        &inputs.skill_weights,
        &inputs.market_premiums,
    );
    let location_adjustment = i * (inputs.location_multiplier - 1.0);
    let trend_adjustment = i * (inputs.trend_percentage / 100.0);
    let customization_adjustment = inputs.customization_factor * inputs.customization_weight;
    let risk_premium = i * (inputs.risk_percentage / 100.0);
    let transparency_adjustment = i * inputs.transparency_score * inputs.transparency_weight;
    let equity_adjustment = inputs.equity_score * inputs.diversity_premium;
    let flexibility_premium = inputs.flexibility_score * inputs.flexibility_multiplier;

    let subtotal = internal_component
        + external_component
        + skill_premium
        + location_adjustment
        + trend_adjustment
        + customization_adjustment
        + risk_premium
        + inputs.benefits
        + transparency_adjustment
        + equity_adjustment
        + flexibility_premium
        + inputs.well_being_value;

    let final_salary = subtotal * inputs.functional_multiplier * inputs.market_demand_multiplier;

    let breakdown = SalaryBreakdown {
        internal_component,
        external_component,
        skill_premium,
        location_adjustment,
        trend_adjustment,
        customization_adjustment,
        risk_premium,
        benefits: inputs.benefits,
        transparency_adjustment,
        equity_adjustment,
        flexibility_premium,
        well_being_value: inputs.well_being_value,
        subtotal,
        functional_multiplier: inputs.functional_multiplier,
        market_demand_multiplier: inputs.market_demand_multiplier,
        final_salary,
    };

    check_outcome(&breakdown)?;
    Ok(breakdown)
}

fn check_skill_shape(inputs: &EstimationInputs) -> Result<(), EstimateError> {
    let proficiency = inputs.skill_proficiency.len();
    let weights = inputs.skill_weights.len();
    let premiums = inputs.market_premiums.len();

    if proficiency == 0 || proficiency != weights || proficiency != premiums {
        let err = EstimateError::InvalidShape {
            proficiency,
            weights,
            premiums,
        };
        error!("Invalid estimator input: {err}");
        return Err(err);
    }
    Ok(())
}

fn skill_premium(proficiency: &[f64], weights: &[f64], premiums: &[f64]) -> f64 {
    proficiency
        .iter()
        .zip(weights)
        .zip(premiums)
        .map(|((p, w), m)| p * w * m)
        .sum()
}

fn check_outcome(breakdown: &SalaryBreakdown) -> Result<(), EstimateError> {
    let checked = [
        ("internal_component", breakdown.internal_component),
        ("external_component", breakdown.external_component),
        ("skill_premium", breakdown.skill_premium),
        ("location_adjustment", breakdown.location_adjustment),
        ("trend_adjustment", breakdown.trend_adjustment),
        ("customization_adjustment", breakdown.customization_adjustment),
        ("risk_premium", breakdown.risk_premium),
        ("benefits", breakdown.benefits),
        ("transparency_adjustment", breakdown.transparency_adjustment),
        ("equity_adjustment", breakdown.equity_adjustment),
        ("flexibility_premium", breakdown.flexibility_premium),
        ("well_being_value", breakdown.well_being_value),
        ("final_salary", breakdown.final_salary),
    ];

    if let Some((name, value)) = checked.iter().find(|(_, v)| !v.is_finite()) {
        let err = EstimateError::Computation(format!("{name} is not finite ({value})"));
        error!("Error in salary calculation: {err}");
        return Err(err);
    }

    if breakdown.final_salary < 0.0 {
        let err = EstimateError::Computation(format!(
            "final salary is negative ({})",
            breakdown.final_salary
        ));
        error!("Error in salary calculation: {err}");
        return Err(err);
    }

    Ok(())
}
