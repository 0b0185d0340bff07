use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A talk abstract, referenced from events by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talk {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
