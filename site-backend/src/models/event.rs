use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A speaking or community event. `talk_slug` is a denormalized reference
/// to the talk given there; integrity is owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub event_url: Option<String>,
    pub event_type: Option<String>,
    pub talk_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub event_url: Option<String>,
    pub event_type: Option<String>,
    pub talk_slug: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk_slug: Option<Option<String>>,
}
