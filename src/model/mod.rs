//! Data model: raw REST items as received, and the documents produced from them.

mod document;
mod raw_item;

pub use document::{Document, DocumentMetadata, ItemId};
pub use raw_item::{RawItem, RenderedField};
