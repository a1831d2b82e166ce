use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{
    fmt::ThousandsSeparated,
    quantity::{Quantity, energy::WattHours, voltage::Volts},
};

pub type MilliampHours = Quantity<1, 0>;

impl Display for MilliampHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mAh", ThousandsSeparated(self.0))
    }
}

impl Debug for MilliampHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}mAh", self.0)
    }
}

impl Mul<Volts> for MilliampHours {
    type Output = WattHours;

    fn mul(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * rhs.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_volts() {
        assert_abs_diff_eq!((MilliampHours::from(20_000.0) * Volts::from(3.7)).0, 74.0);
        assert_abs_diff_eq!((MilliampHours::from(10_000.0) * Volts::from(3.85)).0, 38.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(MilliampHours::from(26_800.0).to_string(), "26,800 mAh");
    }
}
