//! Typed read access to the hosted store.
//!
//! This file contains:
//! - StoreClient definition and construction
//! - The single fetch path every accessor goes through
//! - Row-count discrimination for by-slug lookups
//!
//! The per-table accessors live in the tables/ subdirectory.

mod error;
mod query;
mod tables;

pub use error::StoreError;
pub use query::{Direction, Filter, FilterOp, Nulls, Order, QueryOptions};

use serde::de::DeserializeOwned;
use url::Url;

/// Client for the store's REST interface.
///
/// Explicitly constructed from configuration and passed by reference via
/// `AppState`, so callers (and tests) can point it at a substitute store.
/// One accessor call is one request and one response: no caching, no
/// retries, whatever timeout the underlying client enforces by default.
pub struct StoreClient {
    http: reqwest::Client,
    rest_url: Url,
    api_key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, url::ParseError> {
        let rest_url = Url::parse(base_url)?.join("rest/v1/")?;
        Ok(StoreClient {
            http: reqwest::Client::new(),
            rest_url,
            api_key: api_key.to_string(),
        })
    }

    /// Execute one configured read against one table.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        table: &'static str,
        options: &QueryOptions,
    ) -> Result<Vec<T>, StoreError> {
        let url = self.rest_url.join(table).map_err(|e| StoreError::QueryFailed {
            detail: e.to_string(),
        })?;

        let response = self
            .http
            .get(url)
            .query(&options.to_query_pairs())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::QueryFailed {
                detail: format!("{}: {}", status, body),
            });
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Narrow an equality-on-slug read down to exactly one record.
    pub(crate) fn expect_single<T>(
        table: &'static str,
        slug: &str,
        mut rows: Vec<T>,
    ) -> Result<T, StoreError> {
        match rows.len() {
            0 => Err(StoreError::NotFound {
                table,
                slug: slug.to_string(),
            }),
            1 => Ok(rows.remove(0)),
            count => Err(StoreError::AmbiguousResult {
                table,
                slug: slug.to_string(),
                count,
            }),
        }
    }
}
