use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type WattHours = Quantity<1, 1>;

impl WattHours {
    /// Carry-on without airline approval.
    pub const UNRESTRICTED_LIMIT: Self = Self(100.0);

    /// Carry-on with airline approval.
    pub const APPROVAL_LIMIT: Self = Self(160.0);

    /// Round to hundredths of a Watt-hour, the precision the calculator reports.
    ///
    /// Rounds the exact decimal value of the float, so that `100.005` (stored as `100.00499…`)
    /// stays at `100.00`. Exact ties, which only occur at odd multiples of ⅛, round away from zero.
    pub fn round_to_hundredths(self) -> Self {
        let eighths = self.0 * 8.0;
        if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
            // `x * 100` is exact here:
            Self((self.0 * 100.0).round() / 100.0)
        } else {
            format!("{:.2}", self.0).parse().map_or(self, Self)
        }
    }
}

impl Display for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wh", self.0)
    }
}

impl Debug for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Wh", self.0)
    }
}
