//! Reverse simulation: production, efficiency and cost targets in,
//! recommended configuration and investment figures out.
//!
//! Independent of the efficiency model; recommendations come from fixed
//! thresholds on the targets.

use crate::region::Region;
use crate::source::EnergySource;

/// Investment per kg/day of capacity
const INVESTMENT_PER_CAPACITY: f64 = 1000.0;
/// Efficiency (%) at which the investment multiplier is 1
const REFERENCE_EFFICIENCY: f64 = 70.0;
const DAYS_PER_YEAR: f64 = 365.0;
const SUSTAINABILITY_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReverseInput {
    /// kg/day
    pub target_production: f64,
    /// Percent, in [0, 100]
    pub target_efficiency: f64,
    pub target_cost_per_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReverseOutput {
    pub recommended_region: Region,
    pub recommended_energy_source: EnergySource,
    /// kg/day; infinite for a zero efficiency target
    pub required_capacity: f64,
    pub estimated_investment: f64,
    /// Years
    pub payback_period: f64,
    /// At most 10, no lower bound
    pub sustainability_score: f64,
}

impl ReverseOutput {
    pub fn is_finite(&self) -> bool {
        self.required_capacity.is_finite()
            && self.estimated_investment.is_finite()
            && self.payback_period.is_finite()
            && self.sustainability_score.is_finite()
    }
}

pub fn simulate_reverse(input: &ReverseInput) -> ReverseOutput {
    let required_capacity = input.target_production / (input.target_efficiency / 100.0);

    let recommended_energy_source = EnergySource::for_efficiency_target(input.target_efficiency);
    let recommended_region = Region::for_cost_target(input.target_cost_per_kg);

    let base_investment = required_capacity * INVESTMENT_PER_CAPACITY;
    let efficiency_factor = (input.target_efficiency / REFERENCE_EFFICIENCY).powi(2);
    let estimated_investment = base_investment * efficiency_factor;

    let annual_production = input.target_production * DAYS_PER_YEAR;
    let annual_revenue = annual_production * input.target_cost_per_kg;
    let payback_period = estimated_investment / annual_revenue;

    let efficiency_bonus = (input.target_efficiency - REFERENCE_EFFICIENCY) / 10.0;
    let sustainability_score = (recommended_energy_source.sustainability_base() + efficiency_bonus)
        .min(SUSTAINABILITY_MAX);

    ReverseOutput {
        recommended_region,
        recommended_energy_source,
        required_capacity,
        estimated_investment,
        payback_period,
        sustainability_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_eighty_is_hybrid() {
        let out = simulate_reverse(&ReverseInput {
            target_production: 50.0,
            target_efficiency: 80.0,
            target_cost_per_kg: 5.0,
        });
        assert_eq!(out.recommended_energy_source, EnergySource::Hybrid);
        assert_eq!(out.recommended_region, Region::Europe);
        assert_eq!(out.sustainability_score, 9.5);
    }

    #[test]
    fn zero_efficiency_gives_infinite_capacity() {
        let out = simulate_reverse(&ReverseInput {
            target_production: 50.0,
            target_efficiency: 0.0,
            target_cost_per_kg: 3.0,
        });
        assert_eq!(out.required_capacity, f64::INFINITY);
        // inf * 0 from the squared efficiency factor
        assert!(out.estimated_investment.is_nan());
        assert!(out.payback_period.is_nan());
        assert_eq!(out.recommended_energy_source, EnergySource::Grid);
        assert_eq!(out.sustainability_score, -2.0);
        assert!(!out.is_finite());
    }

    #[test]
    fn score_has_no_lower_clamp() {
        let out = simulate_reverse(&ReverseInput {
            target_production: 10.0,
            target_efficiency: 10.0,
            target_cost_per_kg: 8.0,
        });
        assert_eq!(out.sustainability_score, -1.0);
        assert_eq!(out.recommended_region, Region::NorthAmerica);
    }

    #[test]
    fn zero_cost_gives_infinite_payback() {
        let out = simulate_reverse(&ReverseInput {
            target_production: 50.0,
            target_efficiency: 70.0,
            target_cost_per_kg: 0.0,
        });
        assert_eq!(out.payback_period, f64::INFINITY);
    }
}
