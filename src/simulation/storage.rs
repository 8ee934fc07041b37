use serde::{Deserialize, Serialize};

/// Phase-change-material heat reservoir.
///
/// Starts full and is only ever discharged during a simulated day; there is no
/// recharge path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PcmStorage {
    capacity_kwh: f64,
    level_kwh: f64,
}

impl PcmStorage {
    pub fn full(capacity_kwh: f64) -> Self {
        Self {
            capacity_kwh,
            level_kwh: capacity_kwh,
        }
    }

    pub fn capacity_kwh(&self) -> f64 {
        self.capacity_kwh
    }

    pub fn level_kwh(&self) -> f64 {
        self.level_kwh
    }

    pub fn is_depleted(&self) -> bool {
        self.level_kwh <= 0.0
    }

    /// Draw at most `max_power_kw` for `dt_hours` from the reservoir.
    ///
    /// Returns the energy actually drawn, which is limited by the remaining level.
    pub fn discharge(&mut self, max_power_kw: f64, dt_hours: f64) -> f64 {
        let drawn = (max_power_kw * dt_hours).min(self.level_kwh).max(0.0);
        self.level_kwh -= drawn;
        drawn
    }
}
