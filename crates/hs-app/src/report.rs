//! Plain-text rendering of simulation results.

use hs_model::{ProductionOutput, ReverseOutput, SweepAxis, SweepResult};
use std::fmt::Write;

use crate::scenario::{ScenarioOutcome, ScenarioResult};

/// Format with thousands separators and up to three decimals.
///
/// `86734.69387` renders as `86,734.694`.
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && formatted != "0.000";
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

pub fn format_production(output: &ProductionOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Production Analysis Results");
    let _ = writeln!(
        out,
        "  Production:     {:.2} kg/day",
        output.hydrogen_production
    );
    let _ = writeln!(
        out,
        "  Efficiency:     {:.1}%",
        output.fuel_cell_efficiency
    );
    let _ = writeln!(out, "  Cost per kg:    ${:.2}", output.cost_per_kg);
    let _ = writeln!(out, "  CO2 Emissions:  {:.2} kg/kg H2", output.co2_emissions);
    out
}

pub fn format_reverse(output: &ReverseOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Required Parameters");
    let _ = writeln!(out, "  Recommended Setup");
    let _ = writeln!(
        out,
        "    Region:               {}",
        output.recommended_region
    );
    let _ = writeln!(
        out,
        "    Energy Source:        {}",
        output.recommended_energy_source
    );
    let _ = writeln!(
        out,
        "    Required Capacity:    {:.2} kg/day",
        output.required_capacity
    );
    let _ = writeln!(out, "  Financial Analysis");
    let _ = writeln!(
        out,
        "    Investment:           ${}",
        group_thousands(output.estimated_investment)
    );
    let _ = writeln!(
        out,
        "    Payback Period:       {:.1} years",
        output.payback_period
    );
    let _ = writeln!(
        out,
        "    Sustainability Score: {:.1}/10",
        output.sustainability_score
    );
    out
}

pub fn format_sweep(result: &SweepResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", result.definition, result.source);
    let header = match result.definition.axis {
        SweepAxis::Temperature => "T [°C]",
        SweepAxis::Pressure => "p [bar]",
    };
    let _ = writeln!(
        out,
        "{:>12}  {:>10}  {:>10}  {:>10}",
        header, "V_op [V]", "eta_raw %", "eta %"
    );
    for (value, point) in result.independent_values().iter().zip(&result.points) {
        let b = &point.breakdown;
        let marker = if b.is_clamped() { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:>12.3}  {:>10.4}  {:>10.2}  {:>10.2}{}",
            value, b.operating_voltage, b.unclamped_efficiency, b.efficiency, marker
        );
    }
    if result.clamped_count() > 0 {
        let _ = writeln!(out, "* clamped to the reporting envelope");
    }
    out
}

pub fn format_outcome(outcome: &ScenarioOutcome) -> String {
    let mut out = format!("== {} ==\n", outcome.name);
    match (&outcome.result, &outcome.error) {
        (Some(ScenarioResult::Production(output)), _) => out.push_str(&format_production(output)),
        (Some(ScenarioResult::Reverse(output)), _) => out.push_str(&format_reverse(output)),
        (None, Some(error)) => {
            let _ = writeln!(out, "  rejected: {}", error);
        }
        (None, None) => {}
    }
    out
}
