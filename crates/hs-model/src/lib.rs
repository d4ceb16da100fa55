//! hs-model: electrolytic hydrogen production model for hydrosim.
//!
//! Provides:
//! - Energy source and region categories with their fixed calibration factors
//! - Electrochemical efficiency model (Nernst potential + heuristic losses)
//! - Forward simulation: operating inputs -> production, cost, emissions
//! - Reverse simulation: production/efficiency/cost targets -> recommended setup
//! - Efficiency sweeps across temperature or pressure
//!
//! # Numeric degeneracy
//!
//! Every function here is pure and infallible. Inputs outside the documented
//! domain (pressure <= 0, zero target efficiency) produce IEEE infinities or
//! NaN in the output rather than errors; callers validate before calling in.
//!
//! # Example
//!
//! ```
//! use hs_model::{EnergySource, ProductionInput, Region, simulate_production};
//!
//! let output = simulate_production(&ProductionInput {
//!     region: Region::Europe,
//!     raw_material_cost: 2.0,
//!     energy_source: EnergySource::Grid,
//!     production_capacity: 100.0,
//!     temperature: 80.0,
//!     pressure: 30.0,
//! });
//! assert!(output.fuel_cell_efficiency > 86.0 && output.fuel_cell_efficiency < 87.0);
//! ```

pub mod efficiency;
pub mod error;
pub mod forward;
pub mod region;
pub mod reverse;
pub mod source;
pub mod sweeps;

// Re-exports for ergonomics
pub use efficiency::{
    EFFICIENCY_MAX, EFFICIENCY_MIN, EfficiencyBreakdown, breakdown, efficiency, efficiency_at,
};
pub use error::{ModelError, ModelResult};
pub use forward::{ProductionInput, ProductionOutput, simulate_production};
pub use region::Region;
pub use reverse::{ReverseInput, ReverseOutput, simulate_reverse};
pub use source::EnergySource;
pub use sweeps::{
    MAX_SWEEP_POINTS, SweepAxis, SweepDefinition, SweepPoint, SweepResult, SweepType,
    run_efficiency_sweep,
};
