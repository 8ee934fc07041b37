//! Hour-by-hour heat balance of a single room heated either from PCM storage or
//! from the grid.
//!
//! Each hour the room loses heat in proportion to the indoor/outdoor difference.
//! While the room is below the target temperature, storage is discharged first
//! and the grid heater only runs once storage is empty.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::prices::{PriceSeries, HOURS_PER_DAY};
use super::result::{round_to, HourlyRecord, SimulationResult};
use super::storage::PcmStorage;

/// Room volume (m³), only used to scale the heat loss.
pub const ROOM_VOLUME_M3: f64 = 50.0;
/// Rating of both the grid heater and the storage discharge (kW).
pub const HEATER_POWER_KW: f64 = 2.0;
/// Initial and maximum storage level (kWh).
pub const STORAGE_CAPACITY_KWH: f64 = 5.0;
pub const LOSS_COEFFICIENT: f64 = 0.3;
pub const TIME_STEP_HOURS: f64 = 1.0;
/// Thermal mass proxy applied to the net heat flow.
pub const TEMPERATURE_DAMPING: f64 = 0.5;

/// The two caller-supplied inputs of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target indoor temperature (°C).
    pub desired_temp: f64,
    /// Outdoor temperature (°C), also the initial indoor temperature.
    pub outdoor_temp: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            desired_temp: 22.0,
            outdoor_temp: 5.0,
        }
    }
}

impl SimulationConfig {
    pub fn new(desired_temp: f64, outdoor_temp: f64) -> Self {
        Self {
            desired_temp,
            outdoor_temp,
        }
    }
}

/// Heating source chosen for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatSource {
    Idle,
    Storage,
    Grid,
}

/// What happened during one hour, before display rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourOutcome {
    pub source: HeatSource,
    pub heat_kw: f64,
    pub grid_heating_kw: f64,
    pub pcm_use_kw: f64,
    pub heat_loss_kw: f64,
    pub cost_eur: f64,
}

/// Mutable run state. Lives for exactly one call to [`simulate`].
pub struct HourStepper {
    config: SimulationConfig,
    temperature_c: f64,
    storage: PcmStorage,
    cost_eur: f64,
}

impl HourStepper {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            temperature_c: config.outdoor_temp,
            storage: PcmStorage::full(STORAGE_CAPACITY_KWH),
            cost_eur: 0.0,
        }
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn storage(&self) -> &PcmStorage {
        &self.storage
    }

    /// Accumulated grid cost so far (EUR, unrounded).
    pub fn cost_eur(&self) -> f64 {
        self.cost_eur
    }

    /// Heat lost over one step. Negative when the room is colder than outside.
    fn heat_loss_kw(&self) -> f64 {
        LOSS_COEFFICIENT * ROOM_VOLUME_M3 * (self.temperature_c - self.config.outdoor_temp) / 1000.0
    }

    /// Advance one hour at the given price.
    pub fn step(&mut self, price: f64) -> HourOutcome {
        let heat_loss_kw = self.heat_loss_kw();

        let outcome = if self.temperature_c < self.config.desired_temp {
            if self.storage.is_depleted() {
                let grid_heating_kw = HEATER_POWER_KW;
                let cost_eur = grid_heating_kw * price * TIME_STEP_HOURS;
                self.cost_eur += cost_eur;
                HourOutcome {
                    source: HeatSource::Grid,
                    heat_kw: grid_heating_kw,
                    grid_heating_kw,
                    pcm_use_kw: 0.0,
                    heat_loss_kw,
                    cost_eur,
                }
            } else {
                let pcm_use_kw = self.storage.discharge(HEATER_POWER_KW, TIME_STEP_HOURS);
                HourOutcome {
                    source: HeatSource::Storage,
                    heat_kw: pcm_use_kw,
                    grid_heating_kw: 0.0,
                    pcm_use_kw,
                    heat_loss_kw,
                    cost_eur: 0.0,
                }
            }
        } else {
            HourOutcome {
                source: HeatSource::Idle,
                heat_kw: 0.0,
                grid_heating_kw: 0.0,
                pcm_use_kw: 0.0,
                heat_loss_kw,
                cost_eur: 0.0,
            }
        };

        self.temperature_c += (outcome.heat_kw - heat_loss_kw) * TEMPERATURE_DAMPING;
        outcome
    }

    /// Run the full day against `prices` and aggregate the result.
    pub fn run(mut self, prices: &PriceSeries) -> SimulationResult {
        let mut records = Vec::with_capacity(HOURS_PER_DAY);

        for (hour, price) in prices.iter().enumerate() {
            let temperature_c = self.temperature_c;
            let storage_kwh = self.storage.level_kwh();
            let outcome = self.step(price);

            trace!(
                hour,
                temperature_c,
                storage_kwh,
                source = ?outcome.source,
                price,
                "simulated hour"
            );

            records.push(HourlyRecord {
                hour: hour as u8,
                temperature: round_to(temperature_c, 2),
                grid_heating_kw: outcome.grid_heating_kw,
                pcm_use_kw: outcome.pcm_use_kw,
                price: round_to(price, 3),
                storage_kwh,
            });
        }

        let result = SimulationResult::from_records(records, self.cost_eur);
        debug!(
            desired_temp = self.config.desired_temp,
            outdoor_temp = self.config.outdoor_temp,
            total_cost = result.total_cost,
            co2_saved_kg = result.co2_saved_kg,
            grid_hours = result.grid_hours(),
            "simulation finished"
        );
        result
    }
}

/// Simulate one day for the given inputs.
///
/// Total over all numeric inputs: non-finite temperatures propagate into the
/// result instead of failing.
pub fn simulate(config: &SimulationConfig) -> SimulationResult {
    HourStepper::new(*config).run(&PriceSeries::generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hour_draws_from_storage() {
        let mut stepper = HourStepper::new(SimulationConfig::default());
        let outcome = stepper.step(0.2);

        assert_eq!(outcome.source, HeatSource::Storage);
        assert_eq!(outcome.pcm_use_kw, 2.0);
        assert_eq!(outcome.grid_heating_kw, 0.0);
        assert_eq!(outcome.heat_loss_kw, 0.0);
        assert_eq!(stepper.storage().level_kwh(), 3.0);
        assert_eq!(stepper.temperature_c(), 6.0);
    }

    #[test]
    fn test_grid_used_once_storage_is_empty() {
        let mut stepper = HourStepper::new(SimulationConfig::default());
        stepper.step(0.2);
        stepper.step(0.2);
        let partial = stepper.step(0.2);
        assert_eq!(partial.pcm_use_kw, 1.0);
        assert!(stepper.storage().is_depleted());

        let outcome = stepper.step(0.3);
        assert_eq!(outcome.source, HeatSource::Grid);
        assert_eq!(outcome.grid_heating_kw, 2.0);
        assert_eq!(outcome.pcm_use_kw, 0.0);
        assert!((outcome.cost_eur - 0.6).abs() < 1e-12);
        assert!((stepper.cost_eur() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_idle_when_at_target() {
        let mut stepper = HourStepper::new(SimulationConfig::new(5.0, 5.0));
        let outcome = stepper.step(0.2);
        assert_eq!(outcome.source, HeatSource::Idle);
        assert_eq!(outcome.heat_kw, 0.0);
        assert_eq!(stepper.storage().level_kwh(), STORAGE_CAPACITY_KWH);
        assert_eq!(stepper.temperature_c(), 5.0);
    }

    #[test]
    fn test_heat_loss_negative_below_outdoor() {
        // A room colder than outside gains heat through the loss term.
        let mut stepper = HourStepper::new(SimulationConfig::new(0.0, 10.0));
        stepper.temperature_c = 0.0;
        assert!(stepper.heat_loss_kw() < 0.0);
        stepper.step(0.2);
        assert!(stepper.temperature_c() > 0.0);
    }

    #[test]
    fn test_default_run_matches_hand_computed_trajectory() {
        let result = simulate(&SimulationConfig::default());
        let temps: Vec<f64> = result.records.iter().take(4).map(|r| r.temperature).collect();
        assert_eq!(temps, vec![5.0, 6.0, 6.99, 7.48]);

        let pcm: Vec<f64> = result.records.iter().map(|r| r.pcm_use_kw).collect();
        assert_eq!(&pcm[..3], &[2.0, 2.0, 1.0]);
        assert!(pcm[3..].iter().all(|&p| p == 0.0));

        // Grid runs from hour 3 until the room first passes 22 °C at hour 19,
        // then once more at hour 22 after drifting below target.
        let grid_hours: Vec<u8> = result
            .records
            .iter()
            .filter(|r| r.grid_heating_kw > 0.0)
            .map(|r| r.hour)
            .collect();
        let mut expected: Vec<u8> = (3..19).collect();
        expected.push(22);
        assert_eq!(grid_hours, expected);

        assert_eq!(result.co2_saved_kg, 1.17);
        assert_eq!(result.trees_equivalent, 0.06);
        assert!(result.total_cost > 0.0);
    }

    #[test]
    fn test_cost_uses_unrounded_prices() {
        let prices = PriceSeries::generate();
        let result = HourStepper::new(SimulationConfig::default()).run(&prices);
        let expected: f64 = result
            .records
            .iter()
            .filter(|r| r.grid_heating_kw > 0.0)
            .map(|r| HEATER_POWER_KW * prices[r.hour as usize] * TIME_STEP_HOURS)
            .sum();
        assert_eq!(result.total_cost, round_to(expected, 2));
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let result = simulate(&SimulationConfig::new(22.0, f64::NAN));
        assert_eq!(result.records.len(), 24);
        assert!(result.records[0].temperature.is_nan());
    }
}
