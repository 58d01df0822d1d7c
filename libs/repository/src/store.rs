use std::fmt::Debug;

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};

use crate::Response;

/// The handful of document-store calls the service makes. One long-lived
/// handle is shared by every in-flight request.
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    /// Inserts one document and returns the store-assigned id as a string.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Response<String>;

    /// At most `limit` documents matching `filter`, in the store's natural order.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Response<Vec<Document>>;

    async fn list_collection_names(&self) -> Response<Vec<String>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Equals(Bson),
    /// The field is an array holding the value.
    Contains(Bson),
}

/// Field constraints for a list query. An empty filter matches everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Condition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.conditions
            .push((field.to_string(), Condition::Equals(value.into())));
        self
    }

    pub fn contains(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.conditions
            .push((field.to_string(), Condition::Contains(value.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(String, Condition)] {
        &self.conditions
    }

    /// MongoDB query document for this filter.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for (field, condition) in &self.conditions {
            match condition {
                Condition::Equals(value) => {
                    document.insert(field.as_str(), value.clone());
                }
                Condition::Contains(value) => {
                    document.insert(
                        field.as_str(),
                        doc! { "$in": Bson::Array(vec![value.clone()]) },
                    );
                }
            }
        }
        document
    }

    /// Evaluates the filter the way MongoDB would for these operators.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|(field, condition)| {
            let Some(actual) = document.get(field) else {
                return false;
            };

            match condition {
                Condition::Equals(expected) => actual == expected,
                Condition::Contains(expected) => match actual {
                    Bson::Array(items) => items.contains(expected),
                    scalar => scalar == expected,
                },
            }
        })
    }
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::Filter;

    #[test]
    fn test_empty_filter_matches_everything() {
        // Arrange
        let filter = Filter::new();

        // Act & Assert
        assert!(filter.is_empty());
        assert_eq!(filter.to_document(), doc! {});
        assert!(filter.matches(&doc! { "category": "reset" }));
        assert!(filter.matches(&doc! {}));
    }

    #[test]
    fn test_to_document() {
        // Arrange
        let filter = Filter::new().equals("published", true).contains("tags", "mindset");

        // Act
        let document = filter.to_document();

        // Assert
        assert_eq!(
            document,
            doc! { "published": true, "tags": { "$in": ["mindset"] } }
        );
    }

    #[test]
    fn test_equals() {
        let filter = Filter::new().equals("category", "reset").equals("active", false);

        assert!(filter.matches(&doc! { "category": "reset", "active": false }));
        assert!(!filter.matches(&doc! { "category": "reset", "active": true }));
        assert!(!filter.matches(&doc! { "category": "membership", "active": false }));
        assert!(!filter.matches(&doc! { "category": "reset" }));
    }

    #[test]
    fn test_contains() {
        let filter = Filter::new().contains("tags", "X");

        assert!(filter.matches(&doc! { "tags": ["A", "X"] }));
        assert!(filter.matches(&doc! { "tags": "X" }));
        assert!(!filter.matches(&doc! { "tags": ["A", "B"] }));
        assert!(!filter.matches(&doc! { "tags": [] }));
        assert!(!filter.matches(&doc! { "title": "X" }));
    }
}
