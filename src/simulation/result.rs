use serde::{Deserialize, Serialize};

/// Grid emission factor credited for every kWh served from storage (kg CO2/kWh).
pub const CO2_KG_PER_KWH: f64 = 0.233;

/// Yearly CO2 absorption of one tree (kg), used for the trees-equivalent figure.
pub const CO2_KG_PER_TREE: f64 = 21.0;

/// One simulated hour, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub hour: u8,
    /// Indoor temperature at the start of the hour (°C, 2 dp).
    pub temperature: f64,
    pub grid_heating_kw: f64,
    pub pcm_use_kw: f64,
    /// EUR/kWh, 3 dp.
    pub price: f64,
    /// PCM storage level at the start of the hour (kWh).
    pub storage_kwh: f64,
}

/// Outcome of one 24 hour run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub records: Vec<HourlyRecord>,
    pub total_cost: f64,
    pub co2_saved_kg: f64,
    pub trees_equivalent: f64,
}

impl SimulationResult {
    /// Build the result from the hourly records and the unrounded grid cost.
    pub fn from_records(records: Vec<HourlyRecord>, cost_eur: f64) -> Self {
        let co2_saved_kg = co2_saved_kg(&records);
        Self {
            records,
            total_cost: round_to(cost_eur, 2),
            co2_saved_kg,
            trees_equivalent: trees_equivalent(co2_saved_kg),
        }
    }

    /// Total energy served from storage (kWh).
    pub fn pcm_energy_kwh(&self) -> f64 {
        pcm_energy_kwh(&self.records)
    }

    /// Total energy bought from the grid (kWh).
    pub fn grid_energy_kwh(&self) -> f64 {
        self.records.iter().map(|r| r.grid_heating_kw).sum()
    }

    /// Hours in which the grid heater ran.
    pub fn grid_hours(&self) -> usize {
        self.records.iter().filter(|r| r.grid_heating_kw > 0.0).count()
    }
}

fn pcm_energy_kwh(records: &[HourlyRecord]) -> f64 {
    records.iter().map(|r| r.pcm_use_kw).sum()
}

fn co2_saved_kg(records: &[HourlyRecord]) -> f64 {
    round_to(pcm_energy_kwh(records) * CO2_KG_PER_KWH, 2)
}

fn trees_equivalent(co2_saved_kg: f64) -> f64 {
    round_to(co2_saved_kg / CO2_KG_PER_TREE, 2)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
