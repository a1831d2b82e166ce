use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::status::CarryOnStatus,
    quantity::{charge::MilliampHours, energy::WattHours, voltage::Volts},
};

/// Single power bank model as it appears in the catalog document.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct BatteryRecord {
    #[builder(into)]
    pub brand: String,

    #[builder(into)]
    pub model: String,

    #[builder(into)]
    #[serde(rename = "capacity_mah")]
    pub capacity: MilliampHours,

    #[builder(into)]
    pub voltage: Volts,

    /// Authoritative energy, not re-derived from the capacity and voltage.
    #[builder(into)]
    #[serde(rename = "capacity_wh")]
    pub energy: WattHours,

    #[builder(into)]
    pub carry_on_status: CarryOnStatus,

    /// Zero stands for «no stated limit».
    #[builder(default)]
    #[serde(default)]
    pub max_quantity: u32,

    #[builder(into, default)]
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidRecord {
    #[error("brand is empty")]
    EmptyBrand,

    #[error("model is empty")]
    EmptyModel,

    #[error("capacity must be positive, got {0:?}")]
    NonPositiveCapacity(MilliampHours),

    #[error("voltage must be positive, got {0:?}")]
    NonPositiveVoltage(Volts),

    #[error("energy must be finite and non-negative, got {0:?}")]
    InvalidEnergy(WattHours),
}

impl BatteryRecord {
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.brand.trim().is_empty() {
            return Err(InvalidRecord::EmptyBrand);
        }
        if self.model.trim().is_empty() {
            return Err(InvalidRecord::EmptyModel);
        }
        if !self.capacity.is_positive() {
            return Err(InvalidRecord::NonPositiveCapacity(self.capacity));
        }
        if !self.voltage.is_positive() {
            return Err(InvalidRecord::NonPositiveVoltage(self.voltage));
        }
        if !self.energy.0.is_finite() || self.energy < WattHours::ZERO {
            return Err(InvalidRecord::InvalidEnergy(self.energy));
        }
        Ok(())
    }

    /// Energy as computed from the capacity and voltage.
    pub fn derived_energy(&self) -> WattHours {
        self.capacity * self.voltage
    }

    /// Whether the stated energy agrees with the derived one within 1% (but no less than 0.05 Wh).
    #[must_use]
    pub fn has_consistent_energy(&self) -> bool {
        let derived = self.derived_energy();
        let tolerance = (derived.0 * 0.01).max(0.05);
        (self.energy - derived).0.abs() <= tolerance
    }

    #[must_use]
    pub const fn quantity_limit(&self) -> Option<u32> {
        if self.max_quantity == 0 { None } else { Some(self.max_quantity) }
    }
}
