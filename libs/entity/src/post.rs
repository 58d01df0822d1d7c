use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{fields::Fields, Kind, Record, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Sets `published_at` to `now` when the post is published without one.
    /// Only the create path calls this.
    pub fn stamp_published_at(mut self, now: DateTime<Utc>) -> Self {
        if self.published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self
    }
}

impl Record for Post {
    const KIND: Kind = Kind::Post;
    const TIMESTAMP_FIELDS: &'static [&'static str] = &["published_at"];

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::new(value)?;

        let post = Post {
            title: fields.required_str("title"),
            slug: fields.required_str("slug"),
            excerpt: fields.required_str("excerpt"),
            content: fields.required_str("content"),
            tags: fields.str_list("tags"),
            published: fields.bool_or("published", true),
            published_at: fields.optional_timestamp("published_at"),
        };

        fields.finish(post)
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::Post;
    use crate::Record;

    fn body() -> serde_json::Value {
        json!({
            "title": "Discipline is a skill",
            "slug": "discipline-is-a-skill",
            "excerpt": "You can train it.",
            "content": "Long form content.",
        })
    }

    #[test]
    fn test_published_post_is_stamped() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let post = Post::from_value(&body()).unwrap();

        // Act
        let post = post.stamp_published_at(now);

        // Assert
        assert!(post.published);
        assert_eq!(post.published_at, Some(now));
    }

    #[test]
    fn test_supplied_published_at_is_kept() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let mut body = body();
        body["published_at"] = json!("2023-01-02T03:04:05Z");

        // Act
        let post = Post::from_value(&body).unwrap().stamp_published_at(now);

        // Assert
        assert_eq!(
            post.published_at,
            Some(Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_draft_is_not_stamped() {
        // Arrange
        let mut body = body();
        body["published"] = json!(false);

        // Act
        let post = Post::from_value(&body).unwrap().stamp_published_at(Utc::now());

        // Assert
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn test_serializes_timestamp_as_rfc3339() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let post = Post::from_value(&body()).unwrap().stamp_published_at(now);

        // Act
        let value = serde_json::to_value(&post).unwrap();

        // Assert
        assert_eq!(value["published_at"], json!("2024-06-01T08:00:00Z"));
        assert_eq!(value["tags"], json!([]));
    }
}
