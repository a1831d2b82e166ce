use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::{
    input::coerce_or,
    quantity::{charge::MilliampHours, energy::WattHours, voltage::Volts},
};

/// Advisory tier for carrying a battery in the cabin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Up to 100 Wh inclusive.
    #[display("safe")]
    Safe,

    /// Above 100 Wh up to 160 Wh inclusive.
    #[display("caution")]
    Caution,

    /// Above 160 Wh.
    #[display("restricted")]
    Restricted,
}

impl Band {
    pub fn of(energy: WattHours) -> Self {
        if energy <= WattHours::UNRESTRICTED_LIMIT {
            Self::Safe
        } else if energy <= WattHours::APPROVAL_LIMIT {
            Self::Caution
        } else {
            Self::Restricted
        }
    }

    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Safe => "carry-on allowed",
            Self::Caution => "airline approval required",
            Self::Restricted => "not allowed on passenger aircraft",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Safe => Color::Green,
            Self::Caution => Color::DarkYellow,
            Self::Restricted => Color::Red,
        }
    }
}

/// Raw calculator inputs, where anything malformed counts as zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, clap::Args)]
pub struct CalculatorInputs {
    /// Capacity in milliamp-hours.
    #[clap(allow_negative_numbers = true)]
    pub capacity: String,

    /// Nominal voltage in volts.
    #[clap(allow_negative_numbers = true)]
    pub voltage: String,
}

impl CalculatorInputs {
    pub fn capacity(&self) -> MilliampHours {
        MilliampHours::from(coerce_or(&self.capacity, 0.0))
    }

    pub fn voltage(&self) -> Volts {
        Volts::from(coerce_or(&self.voltage, 0.0))
    }

    pub fn calculate(&self) -> Calculation {
        Calculation::compute(self.capacity(), self.voltage())
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Calculation {
    #[serde(rename = "value_wh")]
    pub energy: WattHours,

    pub band: Band,
}

impl Calculation {
    const NONE: Self = Self { energy: WattHours::ZERO, band: Band::Safe };

    /// Energy rounded to hundredths, banded on the rounded value.
    ///
    /// Non-positive and NaN inputs yield zero. Infinite inputs are restricted.
    pub fn compute(capacity: MilliampHours, voltage: Volts) -> Self {
        if !(capacity > MilliampHours::ZERO && voltage > Volts::ZERO) {
            return Self::NONE;
        }
        let energy = (capacity * voltage).round_to_hundredths();
        Self { energy, band: Band::of(energy) }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.energy == WattHours::ZERO
    }
}

impl Display for Calculation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.energy.0.is_infinite() {
            f.write_str("∞ Wh")
        } else {
            write!(f, "{:.2} Wh", self.energy.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn compute(capacity: f64, voltage: f64) -> Calculation {
        Calculation::compute(MilliampHours::from(capacity), Volts::from(voltage))
    }

    #[test]
    fn test_zero_capacity() {
        let calculation = compute(0.0, 5.0);
        assert_abs_diff_eq!(calculation.energy.0, 0.0);
        assert_eq!(calculation.band, Band::Safe);
    }

    #[test]
    fn test_negative_voltage() {
        assert!(compute(20_000.0, -3.7).is_zero());
    }

    #[test]
    fn test_safe() {
        let calculation = compute(20_000.0, 3.7);
        assert_abs_diff_eq!(calculation.energy.0, 74.0);
        assert_eq!(calculation.band, Band::Safe);

        let calculation = compute(27_000.0, 3.7);
        assert_abs_diff_eq!(calculation.energy.0, 99.9);
        assert_eq!(calculation.band, Band::Safe);
    }

    #[test]
    fn test_caution() {
        let calculation = compute(30_000.0, 3.7);
        assert_abs_diff_eq!(calculation.energy.0, 111.0);
        assert_eq!(calculation.band, Band::Caution);
    }

    #[test]
    fn test_restricted() {
        let calculation = compute(50_000.0, 3.7);
        assert_abs_diff_eq!(calculation.energy.0, 185.0);
        assert_eq!(calculation.band, Band::Restricted);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Band::of(WattHours::from(100.0)), Band::Safe);
        assert_eq!(Band::of(WattHours::from(100.01)), Band::Caution);
        assert_eq!(Band::of(WattHours::from(160.0)), Band::Caution);
        assert_eq!(Band::of(WattHours::from(160.01)), Band::Restricted);
    }

    #[test]
    fn test_band_uses_rounded_value() {
        // 100.004 Wh rounds down to 100.00 Wh:
        let calculation = compute(100_004.0, 1.0);
        assert_abs_diff_eq!(calculation.energy.0, 100.0);
        assert_eq!(calculation.band, Band::Safe);
    }

    #[test]
    fn test_boundaries_hold_after_rounding() {
        let calculation = compute(100_005.0, 1.0);
        assert_eq!(calculation.energy, WattHours::from(100.0));
        assert_eq!(calculation.band, Band::Safe);

        let calculation = compute(160_005.0, 1.0);
        assert_eq!(calculation.energy, WattHours::from(160.0));
        assert_eq!(calculation.band, Band::Caution);
    }

    #[test]
    fn test_infinite_capacity_is_restricted() {
        let calculation = compute(f64::INFINITY, 3.7);
        assert!(calculation.energy.0.is_infinite());
        assert_eq!(calculation.band, Band::Restricted);
        assert_eq!(calculation.to_string(), "∞ Wh");
    }

    #[test]
    fn test_nan_is_zero() {
        assert!(compute(f64::NAN, 3.7).is_zero());
    }

    fn inputs(capacity: &str, voltage: &str) -> CalculatorInputs {
        CalculatorInputs { capacity: capacity.to_owned(), voltage: voltage.to_owned() }
    }

    #[test]
    fn test_inputs() {
        assert_abs_diff_eq!(inputs("20000", "3.7").calculate().energy.0, 74.0);
        assert_abs_diff_eq!(inputs("20000mAh", " 3.7V").calculate().energy.0, 74.0);
        assert!(inputs("abc", "3.7").calculate().is_zero());
        assert!(inputs("20000", "").calculate().is_zero());
        assert!(inputs("-20000", "3.7").calculate().is_zero());
        assert_eq!(inputs("Infinity", "3.7").calculate().band, Band::Restricted);
    }

    #[test]
    fn test_display() {
        assert_eq!(compute(20_000.0, 3.7).to_string(), "74.00 Wh");
        assert_eq!(compute(10_000.0, 3.85).to_string(), "38.50 Wh");
    }

    #[test]
    fn test_serialize_ok() -> anyhow::Result<()> {
        let json = serde_json::to_string(&compute(30_000.0, 3.7))?;
        assert_eq!(json, r#"{"value_wh":111.0,"band":"caution"}"#);
        Ok(())
    }
}
