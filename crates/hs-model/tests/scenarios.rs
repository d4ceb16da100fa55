//! Regression fixtures for the forward and reverse simulators.

use hs_core::numeric::{Tolerances, nearly_equal};
use hs_model::{
    EFFICIENCY_MAX, EFFICIENCY_MIN, EnergySource, ProductionInput, Region, ReverseInput,
    simulate_production, simulate_reverse,
};
use proptest::prelude::*;

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-12,
        rel: 1e-12,
    }
}

#[test]
fn predict_europe_grid_fixture() {
    let out = simulate_production(&ProductionInput {
        region: Region::Europe,
        raw_material_cost: 2.0,
        energy_source: EnergySource::Grid,
        production_capacity: 100.0,
        temperature: 80.0,
        pressure: 30.0,
    });

    assert!(nearly_equal(out.fuel_cell_efficiency, 86.5500001803564, tol()));
    assert!(nearly_equal(out.hydrogen_production, 86.5500001803564, tol()));
    assert!(nearly_equal(out.cost_per_kg, 6.57770074980714, tol()));
    assert!(nearly_equal(out.co2_emissions, 12.13171574594994, tol()));
}

#[test]
fn reverse_solar_asia_pacific_fixture() {
    let out = simulate_reverse(&ReverseInput {
        target_production: 50.0,
        target_efficiency: 85.0,
        target_cost_per_kg: 3.0,
    });

    assert_eq!(out.recommended_energy_source, EnergySource::Solar);
    assert_eq!(out.recommended_region, Region::AsiaPacific);
    assert!(nearly_equal(out.required_capacity, 58.82352941176471, tol()));
    assert!(nearly_equal(out.estimated_investment, 86734.69387755102, tol()));
    assert!(nearly_equal(out.payback_period, 1.5841953219644023, tol()));
    // 9.5 + 1.5 capped at 10
    assert_eq!(out.sustainability_score, 10.0);
}

#[test]
fn reverse_grid_fixture() {
    let out = simulate_reverse(&ReverseInput {
        target_production: 50.0,
        target_efficiency: 60.0,
        target_cost_per_kg: 7.0,
    });

    assert_eq!(out.recommended_energy_source, EnergySource::Grid);
    assert_eq!(out.recommended_region, Region::NorthAmerica);
    assert!(nearly_equal(out.required_capacity, 83.33333333333334, tol()));
    assert!(nearly_equal(out.estimated_investment, 61224.489795918365, tol()));
    assert!(nearly_equal(out.payback_period, 0.4792523663085586, tol()));
    assert!(nearly_equal(out.sustainability_score, 4.0, tol()));
}

#[test]
fn zero_target_efficiency_does_not_fail() {
    for production in [0.5, 50.0, 1e6] {
        let out = simulate_reverse(&ReverseInput {
            target_production: production,
            target_efficiency: 0.0,
            target_cost_per_kg: 3.0,
        });
        assert_eq!(out.required_capacity, f64::INFINITY);
    }
}

fn any_source() -> impl Strategy<Value = EnergySource> {
    prop::sample::select(EnergySource::ALL.to_vec())
}

fn any_region() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

proptest! {
    #[test]
    fn predict_is_deterministic(
        region in any_region(),
        source in any_source(),
        raw in 0.01_f64..100.0,
        capacity in 0.1_f64..1e5,
        t in -50.0_f64..400.0,
        p in 0.1_f64..700.0,
    ) {
        let input = ProductionInput {
            region,
            raw_material_cost: raw,
            energy_source: source,
            production_capacity: capacity,
            temperature: t,
            pressure: p,
        };
        let a = simulate_production(&input);
        let b = simulate_production(&input);
        prop_assert_eq!(a.hydrogen_production.to_bits(), b.hydrogen_production.to_bits());
        prop_assert_eq!(a.cost_per_kg.to_bits(), b.cost_per_kg.to_bits());
        prop_assert_eq!(a.co2_emissions.to_bits(), b.co2_emissions.to_bits());
        prop_assert!((EFFICIENCY_MIN..=EFFICIENCY_MAX).contains(&a.fuel_cell_efficiency));
        prop_assert!(a.hydrogen_production >= 0.0);
        prop_assert!(a.co2_emissions > 0.0);
    }

    #[test]
    fn reverse_is_deterministic(
        production in 0.1_f64..1e5,
        eff in 0.0_f64..=100.0,
        cost in 0.1_f64..20.0,
    ) {
        let input = ReverseInput {
            target_production: production,
            target_efficiency: eff,
            target_cost_per_kg: cost,
        };
        let a = simulate_reverse(&input);
        let b = simulate_reverse(&input);
        prop_assert_eq!(a.recommended_region, b.recommended_region);
        prop_assert_eq!(a.recommended_energy_source, b.recommended_energy_source);
        prop_assert_eq!(a.required_capacity.to_bits(), b.required_capacity.to_bits());
        prop_assert_eq!(a.payback_period.to_bits(), b.payback_period.to_bits());
        prop_assert!(a.sustainability_score <= 10.0);
    }

    #[test]
    fn sustainability_matches_tier_formula(eff in 0.0_f64..=100.0, delta in 0.0_f64..10.0) {
        let score = |e: f64| {
            simulate_reverse(&ReverseInput {
                target_production: 50.0,
                target_efficiency: e,
                target_cost_per_kg: 5.0,
            })
            .sustainability_score
        };
        let expected = |e: f64| {
            let base = EnergySource::for_efficiency_target(e).sustainability_base();
            (base + (e - 70.0) / 10.0).min(10.0)
        };
        let higher = (eff + delta).min(100.0);
        prop_assert_eq!(score(eff), expected(eff));
        prop_assert!(score(higher) >= expected(higher) - 1e-12);
    }
}
