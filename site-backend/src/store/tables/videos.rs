//! Video read operations

use crate::models::Video;

use super::super::{Order, QueryOptions, StoreClient, StoreError};

impl StoreClient {
    /// Videos newest first; unpublished rows sort last.
    pub async fn get_videos(&self, limit: Option<u32>) -> Result<Vec<Video>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("published_at").nulls_last()),
            limit,
        };
        self.fetch("videos", &options).await
    }
}
