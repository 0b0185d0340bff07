//! Media-tracking read operations (books, anime, gaming achievements)

use crate::models::{Anime, Book, GamingAchievement};

use super::super::{Order, QueryOptions, StoreClient, StoreError};

impl StoreClient {
    /// All tracked books, most recently added first.
    pub async fn get_books(&self) -> Result<Vec<Book>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("created_at")),
            limit: None,
        };
        self.fetch("books", &options).await
    }

    /// All tracked anime, most recently added first.
    pub async fn get_anime(&self) -> Result<Vec<Anime>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("created_at")),
            limit: None,
        };
        self.fetch("anime", &options).await
    }

    /// All gaming achievements, most recently added first.
    pub async fn get_gaming_achievements(&self) -> Result<Vec<GamingAchievement>, StoreError> {
        let options = QueryOptions {
            filter: None,
            order: Some(Order::desc("created_at")),
            limit: None,
        };
        self.fetch("gaming_achievements", &options).await
    }
}
