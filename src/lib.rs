//! Smart Floor: one-day simulation of floor heating fed from PCM heat storage
//! or the grid, with JSON/CSV reports and a small HTTP service around it.

pub mod api;
pub mod config;
pub mod report;
pub mod simulation;
pub mod telemetry;

pub use simulation::{simulate, HourlyRecord, SimulationConfig, SimulationResult};
