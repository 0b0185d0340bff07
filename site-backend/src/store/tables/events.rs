//! Event read operations

use chrono::Utc;

use crate::models::Event;

use super::super::{Filter, FilterOp, Order, QueryOptions, StoreClient, StoreError};

impl StoreClient {
    /// Upcoming events soonest first, or past events most recent first.
    ///
    /// "Now" is captured once per call as a UTC instant and used verbatim in
    /// the store filter.
    pub async fn get_events(&self, upcoming: bool) -> Result<Vec<Event>, StoreError> {
        let now = Utc::now().to_rfc3339();

        let options = if upcoming {
            QueryOptions {
                filter: Some(Filter::new("event_date", FilterOp::Gte, now)),
                order: Some(Order::asc("event_date")),
                limit: None,
            }
        } else {
            QueryOptions {
                filter: Some(Filter::new("event_date", FilterOp::Lt, now)),
                order: Some(Order::desc("event_date")),
                limit: None,
            }
        };

        self.fetch("events", &options).await
    }

    /// Every event that references the talk, soonest first.
    pub async fn get_events_by_talk_slug(&self, talk_slug: &str) -> Result<Vec<Event>, StoreError> {
        let options = QueryOptions {
            filter: Some(Filter::new("talk_slug", FilterOp::Eq, talk_slug)),
            order: Some(Order::asc("event_date")),
            limit: None,
        };
        self.fetch("events", &options).await
    }
}
