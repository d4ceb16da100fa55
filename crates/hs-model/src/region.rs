//! Production regions.

use crate::error::ModelError;
use std::fmt;

/// Market region of the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::AsiaPacific];

    pub fn key(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "north_america",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia_pacific",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
        }
    }

    /// Output multiplier on nameplate capacity.
    pub fn production_factor(&self) -> f64 {
        match self {
            Region::NorthAmerica => 1.1,
            Region::Europe => 1.0,
            Region::AsiaPacific => 0.9,
        }
    }

    /// Region recommended for a target cost per kg.
    pub fn for_cost_target(target_cost_per_kg: f64) -> Self {
        if target_cost_per_kg < 4.0 {
            Region::AsiaPacific
        } else if target_cost_per_kg < 6.0 {
            Region::Europe
        } else {
            Region::NorthAmerica
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Region {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north_america" => Ok(Region::NorthAmerica),
            "europe" => Ok(Region::Europe),
            "asia_pacific" => Ok(Region::AsiaPacific),
            _ => Err(ModelError::UnknownRegion { key: s.to_string() }),
        }
    }
}
