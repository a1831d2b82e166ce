use std::{
    fmt::Display,
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::prelude::*;

/// Something the catalog document can be fetched from.
#[async_trait]
pub trait Fetch: Display + Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Catalog document location: a local path or an HTTP(S) URL.
#[derive(Clone, Debug, derive_more::Display)]
pub enum CatalogSource {
    #[display("{}", _0.display())]
    File(PathBuf),

    #[display("{_0}")]
    Http(Url),
}

impl FromStr for CatalogSource {
    type Err = Error;

    fn from_str(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(location.parse().with_context(|| format!("invalid URL: `{location}`"))?))
        } else {
            ensure!(!location.trim().is_empty(), "empty catalog location");
            Ok(Self::File(PathBuf::from(location)))
        }
    }
}

#[async_trait]
impl Fetch for CatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read `{}`", path.display())),
            Self::Http(url) => {
                let response = build_client()?.get(url.clone()).send().await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

fn build_client() -> Result<Client> {
    Ok(Client::builder().timeout(Duration::from_secs(10)).build()?)
}
