// src/lib.rs
//! wp2docs library: reads WordPress pages, posts and custom content types
//! through the REST API and normalizes them into plain-text documents.
//!
//! # Public API
//!
//! - **Reader**: `WordPressReader::load_data`, the entry point
//! - **Configuration**: `ReaderConfig`, `ReaderConfigBuilder`
//! - **Page fetching**: `PageSource`, `WordPressHttpClient`
//! - **Data model**: `RawItem`, `RenderedField`, `Document`, `DocumentMetadata`
//! - **Normalization**: `normalize_item`, `HtmlTextExtractor`
//! - **Error handling**: `AppError`, `RemoteRequestError`, `MalformedItemError`
//! - **Output**: rendering and delivery used by the CLI

mod analytics;
mod api;
mod config;
mod constants;
mod error;
mod model;
mod normalize;
pub mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, MalformedItemError, RemoteRequestError, WordPressErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    CommandLineInput, OutputFormat, PipelineConfig, ReaderConfig, ReaderConfigBuilder,
    PASSWORD_ENV, USERNAME_ENV,
};
pub use crate::constants::{BROWSER_USER_AGENT, LOG_FILE_NAME, WP_API_PAGE_SIZE};

// --- Domain Types ---
pub use crate::types::{ContentType, ContentTypes, Credentials, PageLimit, ValidatedUrl};

// --- Data Model ---
pub use crate::model::{Document, DocumentMetadata, ItemId, RawItem, RenderedField};

// --- API Client ---
pub use crate::api::{
    client::collection_endpoint,
    pagination::fetch_all_pages,
    parser::{parse_page_response, parse_total_pages},
    types::{next_page_after, ApiResponse, CollectionFetch, PageResponse, PaginationResult},
    CollectionSummary, LoadOutcome, LoadReport, PageSource, WordPressHttpClient,
    WordPressReader,
};

// --- Normalization ---
pub use crate::normalize::html::{HtmlTextExtractor, TextExtractor};
pub use crate::normalize::{normalize_item, normalize_items, resolve_rendered};

// --- Analytics ---
pub use crate::analytics::{describe_report, measure_documents, ContentSummary};

// --- Pipeline Traits ---
pub use crate::pipeline::{DocumentDelivery, DocumentSource};
