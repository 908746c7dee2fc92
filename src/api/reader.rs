// src/api/reader.rs
//! Drives pagination across every configured content type and normalizes the
//! collected items into documents.

use super::client::WordPressHttpClient;
use super::pagination::fetch_all_pages;
use super::types::{CollectionFetch, LoadOutcome, LoadReport};
use super::PageSource;
use crate::config::ReaderConfig;
use crate::error::{AppError, RemoteRequestError};
use crate::model::Document;
use crate::normalize::html::{HtmlTextExtractor, TextExtractor};
use crate::normalize::normalize_items;
use crate::types::ContentType;

/// Reads pages, posts and custom content types from one WordPress site.
///
/// Every call re-fetches everything; nothing is cached between calls.
pub struct WordPressReader<S = WordPressHttpClient> {
    source: S,
    config: ReaderConfig,
    extractor: Box<dyn TextExtractor + Send + Sync>,
}

impl WordPressReader<WordPressHttpClient> {
    /// Creates a reader that talks to the site over HTTP.
    pub fn new(config: ReaderConfig) -> Result<Self, AppError> {
        let client = WordPressHttpClient::new(&config)?;
        Ok(Self::with_source(client, config))
    }
}

impl<S: PageSource> WordPressReader<S> {
    /// Creates a reader over any page source.
    pub fn with_source(source: S, config: ReaderConfig) -> Self {
        Self {
            source,
            config,
            extractor: Box::new(HtmlTextExtractor),
        }
    }

    /// Replaces the markup-to-text extractor.
    pub fn with_extractor<E>(mut self, extractor: E) -> Self
    where
        E: TextExtractor + Send + Sync + 'static,
    {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Loads every configured content type and returns one document per item.
    pub fn load_data(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.load_data_with_report()?.documents)
    }

    /// Like [`load_data`](Self::load_data), but also reports per-collection
    /// statistics, including whether the page limit truncated a collection.
    pub fn load_data_with_report(&self) -> Result<LoadOutcome, AppError> {
        if self.config.content_types.is_empty() {
            log::warn!("No content types configured; nothing to fetch");
            return Ok(LoadOutcome::default());
        }

        log::info!(
            "Fetching [{}] from {}",
            self.config.content_types,
            self.config.base_url
        );

        let mut collections = Vec::with_capacity(self.config.content_types.len());
        for content_type in &self.config.content_types {
            collections.push(self.fetch_collection(content_type)?);
        }

        let items = collections.iter().flat_map(|collection| {
            collection
                .items
                .iter()
                .map(move |item| (&collection.summary.content_type, item))
        });
        let documents = normalize_items(items, self.extractor.as_ref())?;

        let report = LoadReport {
            collections: collections.into_iter().map(|c| c.summary).collect(),
        };

        log::info!(
            "Normalized {} documents from {} pages",
            documents.len(),
            report.pages_fetched()
        );

        Ok(LoadOutcome { documents, report })
    }

    /// Fetches every page of one content type, honouring the page limit.
    pub fn fetch_collection(
        &self,
        content_type: &ContentType,
    ) -> Result<CollectionFetch, RemoteRequestError> {
        let result = fetch_all_pages(
            |page| self.source.fetch_page(content_type, page),
            self.config.page_limit,
        )?;

        let fetch = CollectionFetch::from_pagination(content_type.clone(), result);
        let summary = &fetch.summary;

        if summary.truncated {
            log::warn!(
                "Stopped '{}' after {} of {} pages (page limit)",
                content_type,
                summary.pages_fetched,
                summary.total_pages.unwrap_or(summary.pages_fetched)
            );
        }
        log::info!(
            "Fetched {} '{}' items over {} pages",
            summary.items_fetched,
            content_type,
            summary.pages_fetched
        );

        Ok(fetch)
    }
}
