//! Post read operations

use crate::models::Post;

use super::super::{Filter, FilterOp, Order, QueryOptions, StoreClient, StoreError};

impl StoreClient {
    /// Posts newest first; drafts (null `published_at`) sort after every
    /// published post.
    pub async fn get_posts(&self, limit: Option<u32>) -> Result<Vec<Post>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("published_at").nulls_last()),
            limit,
        };
        self.fetch("posts", &options).await
    }

    /// Exactly one post for the slug, or `NotFound` / `AmbiguousResult`.
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Post, StoreError> {
        let options = QueryOptions {
            filter: Some(Filter::new("slug", FilterOp::Eq, slug)),
            order: None,
            limit: None,
        };
        let rows = self.fetch("posts", &options).await?;
        Self::expect_single("posts", slug, rows)
    }
}
