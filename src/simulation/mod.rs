//! # Smart Floor Simulation
//!
//! Models one day of floor heating for a single dwelling, choosing every hour
//! between discharging a PCM (phase-change material) heat store and running a
//! grid-powered heater.
//!
//! ## Components
//!
//! - **Prices**: seeded 24 hour price signal with a morning/evening peak surcharge
//! - **Storage**: bounded PCM reservoir, discharged at the heater rating
//! - **Engine**: the hour stepper that evolves temperature and storage
//! - **Result**: hourly records plus cost, CO2 saved and trees equivalent
//!
//! ## Usage
//!
//! ```rust
//! use smart_floor::simulation::{simulate, SimulationConfig};
//!
//! let result = simulate(&SimulationConfig::default());
//! assert_eq!(result.records.len(), 24);
//! assert_eq!(result.records[0].pcm_use_kw, 2.0);
//! ```

pub mod engine;
pub mod prices;
pub mod result;
pub mod storage;

pub use engine::{simulate, HeatSource, HourOutcome, HourStepper, SimulationConfig};
pub use prices::{PriceSeries, HOURS_PER_DAY};
pub use result::{HourlyRecord, SimulationResult};
pub use storage::PcmStorage;
