// src/api/parser.rs
//! Response parsing: item arrays, pagination headers and REST error bodies.

use super::types::{ApiResponse, PageResponse};
use crate::constants::{
    DEFAULT_TOTAL_PAGES, ERROR_BODY_PREVIEW_LENGTH, TOTAL_ITEMS_HEADER, TOTAL_PAGES_HEADER,
};
use crate::error::{RemoteRequestError, WordPressErrorCode};
use crate::model::RawItem;
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Error payload emitted by `WP_Error` responses.
#[derive(Debug, Deserialize)]
struct WordPressErrorBody {
    code: String,
    message: String,
}

/// Parses the response for `page` of a collection.
pub fn parse_page_response(
    result: ApiResponse<String>,
    page: u32,
) -> Result<PageResponse, RemoteRequestError> {
    if !result.status.is_success() {
        return Err(parse_error_response(result));
    }

    let items: Vec<RawItem> = serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        RemoteRequestError::UnexpectedBody {
            url: result.url.clone(),
            reason: format!("expected a JSON array of items ({})", e),
            preview: preview(&result.data),
        }
    })?;

    let total_pages = parse_total_pages(&result.headers);
    let total_items = parse_total_items(&result.headers);

    log::debug!(
        "Page {}/{} from {}: {} items",
        page,
        total_pages,
        result.url,
        items.len()
    );

    Ok(PageResponse::new(items, page, total_pages, total_items))
}

/// Turns a non-success response into a `RemoteRequestError`, reading the
/// REST error code when the body carries one.
pub fn parse_error_response(result: ApiResponse<String>) -> RemoteRequestError {
    let (code, message) = match serde_json::from_str::<WordPressErrorBody>(&result.data) {
        Ok(body) => (WordPressErrorCode::from_api_response(&body.code), body.message),
        Err(_) => (
            WordPressErrorCode::from_http_status(result.status.as_u16()),
            result
                .status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| preview(&result.data)),
        ),
    };

    log::error!("HTTP {} from {} ({})", result.status, result.url, code);

    RemoteRequestError::Status {
        status: result.status,
        url: result.url,
        code,
        message,
        body: result.data,
    }
}

/// Reads the total page count. Absent or unparseable headers count as one page.
pub fn parse_total_pages(headers: &HeaderMap) -> u32 {
    match header_number::<u32>(headers, TOTAL_PAGES_HEADER) {
        HeaderValue::Parsed(n) => n,
        HeaderValue::Absent => {
            log::debug!("No {} header; assuming a single page", TOTAL_PAGES_HEADER);
            DEFAULT_TOTAL_PAGES
        }
        HeaderValue::Invalid(raw) => {
            log::warn!(
                "Unparseable {} header '{}'; assuming a single page",
                TOTAL_PAGES_HEADER,
                raw
            );
            DEFAULT_TOTAL_PAGES
        }
    }
}

/// Reads the total item count, when the server reports one.
pub fn parse_total_items(headers: &HeaderMap) -> Option<u64> {
    match header_number::<u64>(headers, TOTAL_ITEMS_HEADER) {
        HeaderValue::Parsed(n) => Some(n),
        _ => None,
    }
}

enum HeaderValue<T> {
    Parsed(T),
    Absent,
    Invalid(String),
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> HeaderValue<T> {
    let Some(value) = headers.get(name) else {
        return HeaderValue::Absent;
    };
    let raw = String::from_utf8_lossy(value.as_bytes());
    let parsed = raw.trim().parse::<T>();
    match parsed {
        Ok(n) => HeaderValue::Parsed(n),
        Err(_) => HeaderValue::Invalid(raw.into_owned()),
    }
}

/// Shortens a body for log and error display, respecting char boundaries.
pub fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
