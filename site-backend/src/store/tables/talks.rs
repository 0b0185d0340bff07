//! Talk read operations

use crate::models::Talk;

use super::super::{Filter, FilterOp, Order, QueryOptions, StoreClient, StoreError};

impl StoreClient {
    /// All talks, most recently created first.
    pub async fn get_talks(&self) -> Result<Vec<Talk>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("created_at")),
            limit: None,
        };
        self.fetch("talks", &options).await
    }

    /// Exactly one talk for the slug, or `NotFound` / `AmbiguousResult`.
    pub async fn get_talk_by_slug(&self, slug: &str) -> Result<Talk, StoreError> {
        let options = QueryOptions {
            filter: Some(Filter::new("slug", FilterOp::Eq, slug)),
            order: None,
            limit: None,
        };
        let rows = self.fetch("talks", &options).await?;
        Self::expect_single("talks", slug, rows)
    }
}
