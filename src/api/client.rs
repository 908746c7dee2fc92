// src/api/client.rs
//! Blocking HTTP client for the WordPress REST API.
//!
//! Builds collection URLs, attaches basic auth when configured and hands the
//! raw response to the parser. Each `fetch_page` call is one GET.

use super::parser::parse_page_response;
use super::types::{ApiResponse, PageResponse};
use super::PageSource;
use crate::config::ReaderConfig;
use crate::constants::{BROWSER_USER_AGENT, WP_API_PAGE_SIZE, WP_REST_ROUTE};
use crate::error::{AppError, RemoteRequestError};
use crate::types::{ContentType, Credentials, ValidatedUrl};
use reqwest::blocking::Client;
use reqwest::header;
use url::Url;

/// A thin wrapper around reqwest's blocking client for one WordPress site.
#[derive(Clone)]
pub struct WordPressHttpClient {
    client: Client,
    base_url: ValidatedUrl,
    credentials: Option<Credentials>,
}

impl WordPressHttpClient {
    /// Creates a client for the site named in `config`.
    pub fn new(config: &ReaderConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()
            .map_err(AppError::HttpClient)?;

        if let Some(credentials) = &config.credentials {
            log::debug!("Using basic authentication as {}", credentials);
        }

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
        })
    }

    /// Creates the default headers sent with every request.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(BROWSER_USER_AGENT),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Makes a GET request and captures status, headers and body text.
    pub fn get(&self, url: Url) -> Result<ApiResponse<String>, RemoteRequestError> {
        log::debug!("GET {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let transport = |source| RemoteRequestError::Transport {
            url: url.to_string(),
            source,
        };

        let response = request.send().map_err(transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let data = response.text().map_err(transport)?;

        Ok(ApiResponse {
            data,
            status,
            url: url.to_string(),
            headers,
        })
    }
}

impl PageSource for WordPressHttpClient {
    fn fetch_page(
        &self,
        content_type: &ContentType,
        page: u32,
    ) -> Result<PageResponse, RemoteRequestError> {
        let url = collection_endpoint(&self.base_url, content_type, page)?;
        let result = self.get(url)?;
        parse_page_response(result, page)
    }
}

/// `{base_url}/wp-json/wp/v2/{content_type}?per_page=100&page={page}`.
///
/// The route is appended to whatever path the base URL already has, so
/// sites installed in a subdirectory work. Any query or fragment on the
/// base URL is dropped.
pub fn collection_endpoint(
    base_url: &ValidatedUrl,
    content_type: &ContentType,
    page: u32,
) -> Result<Url, RemoteRequestError> {
    let mut url = base_url.as_url().clone();
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| RemoteRequestError::InvalidEndpoint {
                base_url: base_url.to_string(),
            })?;
        segments
            .pop_if_empty()
            .extend(WP_REST_ROUTE)
            .push(content_type.as_str());
    }

    url.query_pairs_mut()
        .append_pair("per_page", &WP_API_PAGE_SIZE.to_string())
        .append_pair("page", &page.to_string());

    Ok(url)
}
