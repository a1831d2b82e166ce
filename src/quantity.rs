pub mod charge;
pub mod energy;
pub mod voltage;

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Scalar tagged with its electric dimensions, so that milliamp-hours cannot be mixed up with volts.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::Sub,
)]
#[serde(transparent)]
pub struct Quantity<const CHARGE: isize, const POTENTIAL: isize>(pub f64);

impl<const CHARGE: isize, const POTENTIAL: isize> Quantity<CHARGE, POTENTIAL> {
    pub const ZERO: Self = Self(0.0);

    /// Finite and strictly greater than zero.
    pub const fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Total ordering, NaN sorts last.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}
