//! Maps raw REST items onto the canonical document shape.
//!
//! Field access is all-or-nothing: the first item lacking an `id`, `link` or
//! `modified` key fails the whole batch. A key that is present is taken as
//! sent, whatever its type.

pub mod html;

use crate::error::MalformedItemError;
use crate::model::{Document, DocumentMetadata, ItemId, RawItem, RenderedField};
use crate::types::ContentType;
use html::TextExtractor;
use serde_json::Value;

/// Where an item sits in the concatenated sequence, for error reporting.
#[derive(Debug, Clone, Copy)]
struct ItemOrigin<'a> {
    position: usize,
    content_type: &'a ContentType,
}

impl ItemOrigin<'_> {
    fn missing(&self, field: &'static str) -> MalformedItemError {
        MalformedItemError::MissingField {
            position: self.position,
            content_type: self.content_type.to_string(),
            field,
        }
    }
}

/// Normalizes items in order. `items` yields each raw item together with the
/// content type it was fetched from.
pub fn normalize_items<'a, I, E>(
    items: I,
    extractor: &E,
) -> Result<Vec<Document>, MalformedItemError>
where
    I: IntoIterator<Item = (&'a ContentType, &'a RawItem)>,
    E: TextExtractor + ?Sized,
{
    items
        .into_iter()
        .enumerate()
        .map(|(position, (content_type, item))| {
            normalize_item(item, position, content_type, extractor)
        })
        .collect()
}

/// Normalizes a single item into a document.
pub fn normalize_item<E>(
    item: &RawItem,
    position: usize,
    content_type: &ContentType,
    extractor: &E,
) -> Result<Document, MalformedItemError>
where
    E: TextExtractor + ?Sized,
{
    let origin = ItemOrigin {
        position,
        content_type,
    };

    if item.as_object().is_none() {
        return Err(MalformedItemError::NotAnObject {
            position,
            content_type: content_type.to_string(),
        });
    }

    let id = resolve_id(item, &origin)?;
    let url = required_text(item, "link", &origin)?;
    let updated_at = required_text(item, "modified", &origin)?;

    let body = resolve_rendered(item, "content").unwrap_or_else(|| {
        log::debug!("Item {} of '{}' has no content; using empty text", id, content_type);
        String::new()
    });
    let title = resolve_rendered(item, "title").unwrap_or_else(|| {
        log::debug!("Item {} of '{}' has no title", id, content_type);
        String::new()
    });

    Ok(Document {
        text: extractor.extract_text(&body),
        extra_info: DocumentMetadata {
            id,
            title,
            url,
            updated_at,
        },
    })
}

/// Resolves a `{rendered}`-or-scalar field to its text.
pub fn resolve_rendered(item: &RawItem, field: &str) -> Option<String> {
    item.field(field)
        .and_then(RenderedField::from_value)
        .and_then(RenderedField::resolve)
}

fn resolve_id(item: &RawItem, origin: &ItemOrigin<'_>) -> Result<ItemId, MalformedItemError> {
    let id = match item.get("id").ok_or_else(|| origin.missing("id"))? {
        Value::Number(n) => n
            .as_i64()
            .map(ItemId::Number)
            .unwrap_or_else(|| ItemId::Other(Value::Number(n.clone()))),
        Value::String(s) => ItemId::Text(s.clone()),
        other => ItemId::Other(other.clone()),
    };
    Ok(id)
}

/// A present key as text: strings verbatim, `null` as empty, anything else
/// as its JSON form.
fn required_text(
    item: &RawItem,
    field: &'static str,
    origin: &ItemOrigin<'_>,
) -> Result<String, MalformedItemError> {
    let text = match item.get(field).ok_or_else(|| origin.missing(field))? {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => {
            log::debug!(
                "Item {} of '{}' has a non-string '{}'; keeping its JSON form",
                origin.position,
                origin.content_type,
                field
            );
            other.to_string()
        }
    };
    Ok(text)
}
