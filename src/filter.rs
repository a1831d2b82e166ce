use bon::Builder;
use itertools::Itertools;

use crate::{
    catalog::{record::BatteryRecord, status::CarryOnStatus},
    input::coerce_or,
    quantity::energy::WattHours,
};

/// Raw filter inputs, exactly as the user typed them.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct FilterInputs {
    /// Case-insensitive substring of the brand, model, or notes.
    #[clap(long, short, default_value = "")]
    pub search: String,

    /// Carry-on status code: `allowed`, `conditional`, or `forbidden`.
    #[clap(long, default_value = "")]
    pub status: String,

    /// Minimal energy in Watt-hours, inclusive.
    #[clap(long = "min-wh", default_value = "")]
    pub min_energy: String,

    /// Maximal energy in Watt-hours, inclusive.
    #[clap(long = "max-wh", default_value = "")]
    pub max_energy: String,
}

impl FilterInputs {
    /// Sample the current inputs into fresh criteria.
    pub fn criteria(&self) -> FilterCriteria {
        let status = self.status.trim();
        FilterCriteria::builder()
            .search_term(&self.search)
            .maybe_status((!status.is_empty()).then(|| CarryOnStatus::from(status)))
            .min_energy(coerce_or(&self.min_energy, 0.0))
            .max_energy(coerce_or(&self.max_energy, f64::INFINITY))
            .build()
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Builder)]
pub struct FilterCriteria {
    #[builder(into, default)]
    search_term: SearchTerm,

    status: Option<CarryOnStatus>,

    #[builder(into, default = WattHours::ZERO)]
    min_energy: WattHours,

    #[builder(into, default = WattHours::from(f64::INFINITY))]
    max_energy: WattHours,
}

/// Trimmed and lower-cased search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl From<&str> for SearchTerm {
    fn from(term: &str) -> Self {
        Self(term.trim().to_lowercase())
    }
}

impl From<&String> for SearchTerm {
    fn from(term: &String) -> Self {
        Self::from(term.as_str())
    }
}

impl SearchTerm {
    fn is_found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FilterCriteria {
    #[must_use]
    pub fn matches(&self, record: &BatteryRecord) -> bool {
        self.matches_search_term(record)
            && self.status.as_ref().is_none_or(|status| *status == record.carry_on_status)
            && record.energy >= self.min_energy
            && record.energy <= self.max_energy
    }

    fn matches_search_term(&self, record: &BatteryRecord) -> bool {
        self.search_term.0.is_empty()
            || [&record.brand, &record.model, &record.notes]
                .into_iter()
                .any(|field| self.search_term.is_found_in(field))
    }
}

/// Select the matching records, sorted by energy ascending.
///
/// The sort is stable, so records with equal energy keep their catalog order.
pub fn filter(catalog: &[BatteryRecord], criteria: &FilterCriteria) -> Vec<BatteryRecord> {
    catalog
        .iter()
        .filter(|record| criteria.matches(record))
        .sorted_by(|lhs, rhs| lhs.energy.total_cmp(&rhs.energy))
        .cloned()
        .collect()
}
