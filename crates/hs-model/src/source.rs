//! Energy supply categories and their calibration factors.

use crate::error::ModelError;
use std::fmt;

/// Electricity supply feeding the electrolyser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EnergySource {
    Solar,
    Wind,
    Grid,
    Hybrid,
}

impl EnergySource {
    pub const ALL: [EnergySource; 4] = [
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Grid,
        EnergySource::Hybrid,
    ];

    /// Wire key, as accepted by [`str::parse`].
    pub fn key(&self) -> &'static str {
        match self {
            EnergySource::Solar => "solar",
            EnergySource::Wind => "wind",
            EnergySource::Grid => "grid",
            EnergySource::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergySource::Solar => "Solar",
            EnergySource::Wind => "Wind",
            EnergySource::Grid => "Grid",
            EnergySource::Hybrid => "Hybrid",
        }
    }

    /// Multiplier applied to voltage efficiency for supply availability.
    pub fn conversion_factor(&self) -> f64 {
        match self {
            EnergySource::Solar => 0.85,
            EnergySource::Wind => 0.80,
            EnergySource::Grid => 0.95,
            EnergySource::Hybrid => 0.90,
        }
    }

    /// kg CO2 per kg H2 at 100% efficiency.
    pub fn base_emissions(&self) -> f64 {
        match self {
            EnergySource::Solar => 1.5,
            EnergySource::Wind => 1.8,
            EnergySource::Grid => 10.5,
            EnergySource::Hybrid => 4.2,
        }
    }

    /// Sustainability score before the efficiency bonus, out of 10.
    pub fn sustainability_base(&self) -> f64 {
        match self {
            EnergySource::Solar => 9.5,
            EnergySource::Hybrid => 8.5,
            EnergySource::Wind => 9.0,
            EnergySource::Grid => 5.0,
        }
    }

    /// Supply tier recommended for a target efficiency (percent).
    ///
    /// Thresholds are strict: exactly 80 lands on `Hybrid`.
    pub fn for_efficiency_target(target_efficiency: f64) -> Self {
        if target_efficiency > 80.0 {
            EnergySource::Solar
        } else if target_efficiency > 75.0 {
            EnergySource::Hybrid
        } else if target_efficiency > 70.0 {
            EnergySource::Wind
        } else {
            EnergySource::Grid
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for EnergySource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(EnergySource::Solar),
            "wind" => Ok(EnergySource::Wind),
            "grid" => Ok(EnergySource::Grid),
            "hybrid" => Ok(EnergySource::Hybrid),
            _ => Err(ModelError::UnknownEnergySource { key: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for source in EnergySource::ALL {
            assert_eq!(source.key().parse::<EnergySource>().unwrap(), source);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "nuclear".parse::<EnergySource>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownEnergySource { ref key } if key == "nuclear"));
        assert!("Solar".parse::<EnergySource>().is_err());
    }

    #[test]
    fn efficiency_tiers() {
        assert_eq!(EnergySource::for_efficiency_target(85.0), EnergySource::Solar);
        assert_eq!(EnergySource::for_efficiency_target(80.0), EnergySource::Hybrid);
        assert_eq!(EnergySource::for_efficiency_target(75.0), EnergySource::Wind);
        assert_eq!(EnergySource::for_efficiency_target(70.0), EnergySource::Grid);
        assert_eq!(EnergySource::for_efficiency_target(70.0001), EnergySource::Wind);
        assert_eq!(EnergySource::for_efficiency_target(0.0), EnergySource::Grid);
    }

    #[test]
    fn grid_is_the_dirtiest() {
        let grid = EnergySource::Grid.base_emissions();
        for source in EnergySource::ALL {
            assert!(source.base_emissions() <= grid);
        }
    }
}
