use clap::Parser;

use crate::{
    app::{App, LOAD_FAILURE},
    catalog::source::Fetch,
    cli::CatalogArgs,
    filter::FilterInputs,
    prelude::*,
    render::{Layout, render_records},
};

#[derive(Parser)]
pub struct ListArgs {
    #[clap(flatten)]
    pub filter: FilterInputs,

    #[clap(long, value_enum, default_value_t = Layout::Table, env = "LAYOUT")]
    pub layout: Layout,
}

impl ListArgs {
    pub async fn run(self, catalog: &CatalogArgs) -> Result {
        println!("{}", self.render(Box::new(catalog.source.clone())).await?);
        Ok(())
    }

    /// Nothing is rendered when the catalog cannot be loaded, so the output is never partial.
    #[instrument(skip_all, fields(source = %source))]
    async fn render(self, source: Box<dyn Fetch>) -> Result<String> {
        let mut app = App::new(source, self.filter);
        app.reload().await.context(LOAD_FAILURE)?;
        let n_total = app.catalog().len();
        let view = app.view();
        info!(n_matched = view.len(), n_total, "filtered");
        render_records(view, self.layout)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::catalog::source::CatalogSource;

    fn list(filter: FilterInputs, layout: Layout) -> ListArgs {
        ListArgs { filter, layout }
    }

    #[tokio::test]
    async fn test_failed_load_renders_nothing() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/batteries.json"));
        let result = list(FilterInputs::default(), Layout::Json).render(Box::new(source)).await;
        let error = result.expect_err("the load should fail");
        assert_eq!(error.to_string(), LOAD_FAILURE);
    }

    #[tokio::test]
    async fn test_json_output_is_parseable() -> Result {
        let source = CatalogSource::File(PathBuf::from("data/batteries.json"));
        let filter = FilterInputs { search: "anker".to_owned(), ..FilterInputs::default() };
        let output = list(filter, Layout::Json).render(Box::new(source)).await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&output)?;
        assert!(!records.is_empty());
        Ok(())
    }
}
