//! Efficiency sweeps.
//!
//! Evaluates the efficiency model across a range of stack temperatures or
//! pressures with the other operating variable held fixed. Used to tabulate
//! sensitivity of the model and to find where the clamp engages.

use crate::efficiency::{EfficiencyBreakdown, breakdown};
use crate::error::{ModelError, ModelResult};
use crate::source::EnergySource;
use hs_core::numeric::ensure_finite;
use std::fmt;

/// Upper bound on points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Operating variable being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepAxis {
    /// Stack temperature, °C
    Temperature,
    /// Stack pressure, bar
    Pressure,
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SweepDefinition {
    pub axis: SweepAxis,
    pub start: f64,
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        axis: SweepAxis,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> ModelResult<Self> {
        ensure_finite(start, "sweep start")?;
        ensure_finite(end, "sweep end")?;

        if num_points < 2 {
            return Err(ModelError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }

        if num_points > MAX_SWEEP_POINTS {
            return Err(ModelError::InvalidSweep {
                what: "sweep must have at most 10000 points",
            });
        }

        if (start - end).abs() < 1e-12 {
            return Err(ModelError::InvalidSweep {
                what: "start and end values must be different",
            });
        }

        if axis == SweepAxis::Pressure && (start <= 0.0 || end <= 0.0) {
            return Err(ModelError::InvalidSweep {
                what: "pressure bounds must be positive",
            });
        }

        Ok(Self {
            axis,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Temperatures in °C may be negative
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature [°C]"),
            Self::Pressure => write!(f, "pressure [bar]"),
        }
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.axis, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// One evaluated sweep point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SweepPoint {
    pub temperature: f64,
    pub pressure: f64,
    pub breakdown: EfficiencyBreakdown,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SweepResult {
    pub definition: SweepDefinition,
    pub source: EnergySource,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Values of the swept variable.
    pub fn independent_values(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| match self.definition.axis {
                SweepAxis::Temperature => p.temperature,
                SweepAxis::Pressure => p.pressure,
            })
            .collect()
    }

    /// Clamped efficiency (%) at each point.
    pub fn efficiencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.breakdown.efficiency).collect()
    }

    /// Number of points where the efficiency clamp engaged.
    pub fn clamped_count(&self) -> usize {
        self.points.iter().filter(|p| p.breakdown.is_clamped()).count()
    }
}

/// Evaluate the efficiency model at every point of `definition`.
///
/// The swept variable replaces the matching fixed value; the other fixed
/// value is held constant.
pub fn run_efficiency_sweep(
    definition: &SweepDefinition,
    fixed_temperature: f64,
    fixed_pressure: f64,
    source: EnergySource,
) -> SweepResult {
    let points = definition
        .generate_points()
        .into_iter()
        .map(|value| {
            let (temperature, pressure) = match definition.axis {
                SweepAxis::Temperature => (value, fixed_pressure),
                SweepAxis::Pressure => (fixed_temperature, value),
            };
            SweepPoint {
                temperature,
                pressure,
                breakdown: breakdown(temperature, pressure, source),
            }
        })
        .collect();

    SweepResult {
        definition: definition.clone(),
        source,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::efficiency::efficiency;

    #[test]
    fn linear_points_hit_both_ends() {
        let def =
            SweepDefinition::new(SweepAxis::Temperature, 20.0, 120.0, 11, SweepType::Linear)
                .unwrap();
        let points = def.generate_points();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], 20.0);
        assert_eq!(points[10], 120.0);
        assert!((points[6] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_pressure_points() {
        let def =
            SweepDefinition::new(SweepAxis::Pressure, 1.0, 1000.0, 4, SweepType::Logarithmic)
                .unwrap();
        let points = def.generate_points();
        assert_eq!(points[0], 1.0);
        assert!((points[1] - 10.0).abs() < 1e-9);
        assert!((points[2] - 100.0).abs() < 1e-9);
        assert_eq!(points[3], 1000.0);
    }

    #[test]
    fn logarithmic_falls_back_for_negative_temperature() {
        let def = SweepDefinition::new(
            SweepAxis::Temperature,
            -20.0,
            20.0,
            5,
            SweepType::Logarithmic,
        )
        .unwrap();
        assert_eq!(def.generate_points(), vec![-20.0, -10.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn rejects_bad_definitions() {
        assert!(SweepDefinition::new(SweepAxis::Temperature, 0.0, 1.0, 1, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(SweepAxis::Temperature, 5.0, 5.0, 3, SweepType::Linear).is_err());
        assert!(matches!(
            SweepDefinition::new(
                SweepAxis::Temperature,
                1.0,
                2.0,
                usize::MAX,
                SweepType::Linear
            ),
            Err(ModelError::InvalidSweep { .. })
        ));
        assert!(SweepDefinition::new(SweepAxis::Pressure, 0.0, 10.0, 3, SweepType::Linear).is_err());
        assert!(matches!(
            SweepDefinition::new(SweepAxis::Temperature, f64::NAN, 10.0, 3, SweepType::Linear),
            Err(ModelError::Core(_))
        ));
    }

    #[test]
    fn accepts_maximum_point_count() {
        let def = SweepDefinition::new(
            SweepAxis::Pressure,
            1.0,
            100.0,
            MAX_SWEEP_POINTS,
            SweepType::Logarithmic,
        )
        .unwrap();
        assert_eq!(def.generate_points().len(), MAX_SWEEP_POINTS);
    }

    #[test]
    fn sweep_matches_direct_evaluation() {
        let def =
            SweepDefinition::new(SweepAxis::Pressure, 1.0, 100.0, 5, SweepType::Linear).unwrap();
        let result = run_efficiency_sweep(&def, 60.0, 999.0, EnergySource::Wind);
        assert_eq!(result.points.len(), 5);
        for point in &result.points {
            assert_eq!(point.temperature, 60.0);
            assert_eq!(
                point.breakdown.efficiency,
                efficiency(60.0, point.pressure, EnergySource::Wind)
            );
        }
        assert_eq!(result.independent_values(), def.generate_points());
    }

    #[test]
    fn counts_clamped_points() {
        let def = SweepDefinition::new(
            SweepAxis::Temperature,
            80.0,
            1000.0,
            2,
            SweepType::Linear,
        )
        .unwrap();
        let result = run_efficiency_sweep(&def, 80.0, 1.0, EnergySource::Grid);
        assert_eq!(result.clamped_count(), 1);
        assert_eq!(result.efficiencies()[1], 40.0);
    }
}
