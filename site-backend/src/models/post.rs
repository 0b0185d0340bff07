use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post row. `published_at` is null while the post is a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape: everything the store does not assign itself. Write paths
/// live outside this service; the shape is the contract they serialize.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
}

/// Update shape: only the fields present in the patch are sent.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_store_row() {
        let json = r#"{
            "id": 7,
            "title": "Measure branching in DAX",
            "slug": "measure-branching-in-dax",
            "content": "Body text",
            "excerpt": null,
            "published_at": "2024-01-01T00:00:00+00:00",
            "featured_image": null,
            "created_at": "2023-12-30T08:15:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.slug, "measure-branching-in-dax");
        assert!(post.excerpt.is_none());
        assert!(post.published_at.is_some());
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = PostPatch {
            title: Some("New title".to_string()),
            excerpt: Some(None),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "New title");
        assert!(object["excerpt"].is_null());
    }
}
