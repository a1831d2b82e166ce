use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Volts = Quantity<0, 1>;

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}V", self.0)
    }
}
