use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// WordPress object ID. Core sites send integers; some proxies and headless
/// setups re-serialize them as strings. Anything else (including `null`) is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Metadata attached to every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub updated_at: String,
}

impl DocumentMetadata {
    /// Parses `updated_at` as WordPress emits it (`2024-05-01T09:30:00`, site
    /// local time, no offset). RFC 3339 values are accepted too.
    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.updated_at, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(&self.updated_at)
                    .ok()
                    .map(|dt| dt.naive_local())
            })
    }
}

/// The canonical output unit: plain text plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub extra_info: DocumentMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn metadata(updated_at: &str) -> DocumentMetadata {
        DocumentMetadata {
            id: ItemId::Number(7),
            title: "Hello".to_string(),
            url: "https://example.com/hello".to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn test_modified_at_parses_wordpress_format() {
        let parsed = metadata("2024-05-01T09:30:15").modified_at().unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.second(), 15);
    }

    #[test]
    fn test_modified_at_accepts_rfc3339() {
        assert!(metadata("2024-05-01T09:30:15+02:00").modified_at().is_some());
        assert!(metadata("yesterday").modified_at().is_none());
    }

    #[test]
    fn test_document_serializes_with_extra_info() {
        let doc = Document {
            text: "Body".to_string(),
            extra_info: metadata("2024-05-01T09:30:15"),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["extra_info"]["id"], 7);
        assert_eq!(json["extra_info"]["url"], "https://example.com/hello");
        assert_eq!(json["text"], "Body");
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::Number(12).to_string(), "12");
        assert_eq!(ItemId::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(ItemId::Other(Value::Null).to_string(), "null");
    }

    #[test]
    fn test_item_id_other_round_trips_through_serde() {
        let id: ItemId = serde_json::from_str("null").unwrap();
        assert_eq!(id, ItemId::Other(Value::Null));
        assert_eq!(serde_json::to_string(&ItemId::Other(serde_json::json!(1.5))).unwrap(), "1.5");
    }
}
