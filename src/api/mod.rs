//! WordPress REST API interaction: the ability to retrieve content from a site.
//!
//! Separates I/O (`client`), parsing (`parser`), the page loop (`pagination`)
//! and the collection driver (`reader`).

pub mod client;
pub mod pagination;
pub mod parser;
pub mod reader;
pub mod types;

use crate::error::RemoteRequestError;
use crate::types::ContentType;
use types::PageResponse;

/// The ability to fetch one page of one collection.
///
/// The reader depends on this trait, never on HTTP details.
pub trait PageSource {
    /// Fetches `page` (1-based) of `content_type`.
    fn fetch_page(
        &self,
        content_type: &ContentType,
        page: u32,
    ) -> Result<PageResponse, RemoteRequestError>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(
        &self,
        content_type: &ContentType,
        page: u32,
    ) -> Result<PageResponse, RemoteRequestError> {
        (**self).fetch_page(content_type, page)
    }
}

// Re-export the public interface
pub use client::WordPressHttpClient;
pub use reader::WordPressReader;
pub use types::{CollectionSummary, LoadOutcome, LoadReport};
