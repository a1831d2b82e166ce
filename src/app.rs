use crate::{
    catalog::{Catalog, record::BatteryRecord, source::Fetch},
    filter::{FilterInputs, filter},
    prelude::*,
};

/// Shown instead of the results when the catalog could not be loaded.
pub const LOAD_FAILURE: &str =
    "Failed to load the battery catalog. Check the catalog location and try again.";

/// Owns the catalog and the view derived from it.
pub struct App {
    source: Box<dyn Fetch>,
    catalog: Catalog,
    view: Vec<BatteryRecord>,
    pub inputs: FilterInputs,
}

impl App {
    /// Start with an empty catalog, call [`App::reload`] to fill it in.
    #[must_use]
    pub fn new(source: Box<dyn Fetch>, inputs: FilterInputs) -> Self {
        Self { source, catalog: Catalog::default(), view: Vec::new(), inputs }
    }

    /// Fetch the catalog anew and recompute the view.
    ///
    /// On failure, the last known good catalog and view stay in place.
    #[instrument(skip_all)]
    pub async fn reload(&mut self) -> Result {
        self.catalog = Catalog::fetch_from(self.source.as_ref()).await?;
        self.apply();
        Ok(())
    }

    /// Like [`App::reload`], but reports the failure instead of returning it.
    pub async fn reload_or_report(&mut self) -> bool {
        match self.reload().await {
            Ok(()) => true,
            Err(error) => {
                error!(source = %self.source, "failed to load the catalog: {error:#}");
                println!("{LOAD_FAILURE}");
                false
            }
        }
    }

    /// Recompute the view from the full catalog and the current inputs.
    pub fn apply(&mut self) -> &[BatteryRecord] {
        let criteria = self.inputs.criteria();
        self.view = filter(&self.catalog, &criteria);
        debug!(?criteria, n_matched = self.view.len(), "filtered");
        &self.view
    }

    #[must_use]
    pub fn view(&self) -> &[BatteryRecord] {
        &self.view
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
