// src/api/types.rs
//! Type definitions for the WordPress API module.

use crate::model::{Document, RawItem};
use crate::types::ContentType;

/// One page of a collection plus its pagination state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub items: Vec<RawItem>,
    /// The page to request next, or `None` when this page was the last.
    pub next_page: Option<u32>,
    /// Total pages as reported by the server (defaulted when absent).
    pub total_pages: u32,
    /// Total items as reported by the server, when present.
    pub total_items: Option<u64>,
}

impl PageResponse {
    /// Builds a page response, deriving `next_page` from the page number and
    /// the reported total.
    pub fn new(items: Vec<RawItem>, page: u32, total_pages: u32, total_items: Option<u64>) -> Self {
        Self {
            items,
            next_page: next_page_after(page, total_pages),
            total_pages,
            total_items,
        }
    }
}

/// `page + 1` while the collection has more pages, otherwise `None`.
pub fn next_page_after(page: u32, total_pages: u32) -> Option<u32> {
    if total_pages > page {
        page.checked_add(1)
    } else {
        None
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
    pub headers: reqwest::header::HeaderMap,
}

/// All pages of one collection, accumulated in page order.
#[derive(Debug, Clone, Default)]
pub struct PaginationResult {
    pub items: Vec<RawItem>,
    pub pages_fetched: u32,
    /// Set when the page limit stopped pagination before the last page.
    pub truncated: bool,
    pub total_pages: Option<u32>,
    pub total_items: Option<u64>,
}

/// Fetch statistics for one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub content_type: ContentType,
    pub pages_fetched: u32,
    pub items_fetched: usize,
    pub total_pages: Option<u32>,
    pub total_items: Option<u64>,
    pub truncated: bool,
}

/// Raw items of one content type together with their fetch statistics.
#[derive(Debug, Clone)]
pub struct CollectionFetch {
    pub items: Vec<RawItem>,
    pub summary: CollectionSummary,
}

impl CollectionFetch {
    pub fn from_pagination(content_type: ContentType, result: PaginationResult) -> Self {
        Self {
            summary: CollectionSummary {
                content_type,
                pages_fetched: result.pages_fetched,
                items_fetched: result.items.len(),
                total_pages: result.total_pages,
                total_items: result.total_items,
                truncated: result.truncated,
            },
            items: result.items,
        }
    }
}

/// Per-collection statistics for one `load_data` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub collections: Vec<CollectionSummary>,
}

impl LoadReport {
    /// Content types whose pagination was cut short by the page limit.
    pub fn truncated(&self) -> impl Iterator<Item = &ContentType> {
        self.collections
            .iter()
            .filter(|c| c.truncated)
            .map(|c| &c.content_type)
    }

    pub fn is_truncated(&self) -> bool {
        self.collections.iter().any(|c| c.truncated)
    }

    pub fn pages_fetched(&self) -> u32 {
        self.collections.iter().map(|c| c.pages_fetched).sum()
    }

    pub fn items_fetched(&self) -> usize {
        self.collections.iter().map(|c| c.items_fetched).sum()
    }
}

/// Documents produced by a load together with how they were fetched.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub documents: Vec<Document>,
    pub report: LoadReport,
}
