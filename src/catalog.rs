pub mod record;
pub mod source;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{record::BatteryRecord, source::Fetch},
    prelude::*,
};

/// Immutable, ordered list of battery models.
#[must_use]
#[derive(Clone, Debug, Default, Serialize, Deserialize, derive_more::Deref, derive_more::From)]
#[serde(transparent)]
pub struct Catalog(Vec<BatteryRecord>);

impl Catalog {
    /// Fetch, parse, and validate the catalog document.
    #[instrument(skip_all, fields(source = %source))]
    pub async fn fetch_from(source: &dyn Fetch) -> Result<Self> {
        let catalog = Self::from_json(&source.fetch().await?)?;
        info!(n_records = catalog.len(), "loaded the catalog");
        Ok(catalog)
    }

    pub fn from_json(document: &[u8]) -> Result<Self> {
        let catalog: Self = serde_json::from_slice(document).context("malformed catalog document")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject the whole catalog if any record is invalid.
    ///
    /// Inconsistent energy is only reported, the stated value stays authoritative.
    fn validate(&self) -> Result {
        for (index, record) in self.0.iter().enumerate() {
            record.validate().with_context(|| {
                format!("invalid record #{index} ({} {})", record.brand, record.model)
            })?;
            if !record.has_consistent_energy() {
                warn!(
                    index,
                    brand = %record.brand,
                    model = %record.model,
                    stated = ?record.energy,
                    derived = ?record.derived_energy(),
                    "stated energy disagrees with capacity × voltage",
                );
            }
        }
        Ok(())
    }
}
