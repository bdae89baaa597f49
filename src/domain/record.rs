//! Entities returned by the catalog backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog record as returned by the search endpoint.
///
/// `id` and `title` are required; a response missing either fails
/// deserialization and the page falls back to the empty result set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub url: Option<String>,
    /// Short excerpt shown on the teaser tile.
    #[serde(default)]
    pub headline: Option<String>,
}

/// A selectable record category.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_backend_json() {
        let record: Record = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Grant round announced",
                "organization": "dao one",
                "publishedAt": "2023-05-01",
                "headline": "A new round of grants."
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Grant round announced");
        assert_eq!(record.organization.as_deref(), Some("dao one"));
        assert_eq!(
            record.published_at,
            NaiveDate::from_ymd_opt(2023, 5, 1),
        );
        assert!(record.author.is_none());
        assert!(record.url.is_none());
    }

    #[test]
    fn record_without_required_fields_is_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"title": "no id"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"id": "seven", "title": "t"}"#).is_err());
    }
}
