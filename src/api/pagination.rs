// src/api/pagination.rs
//! Page-number pagination over a single collection.

use super::types::{PageResponse, PaginationResult};
use crate::types::PageLimit;

/// Fetches pages 1, 2, ... until the server reports the last page or
/// `max_pages` pages have been accumulated.
///
/// The limit is checked after a page's items are appended, so a limit of N
/// yields exactly N pages when the collection has more than N.
pub fn fetch_all_pages<F, E>(
    mut fetch_fn: F,
    max_pages: Option<PageLimit>,
) -> Result<PaginationResult, E>
where
    F: FnMut(u32) -> Result<PageResponse, E>,
{
    let mut result = PaginationResult::default();
    let mut page = 1u32;

    loop {
        let response = fetch_fn(page)?;

        result.pages_fetched += 1;
        result.total_pages = Some(response.total_pages);
        result.total_items = response.total_items.or(result.total_items);
        result.items.extend(response.items);

        let Some(next_page) = response.next_page else {
            break;
        };

        if let Some(limit) = max_pages {
            if result.pages_fetched >= limit.get() {
                log::debug!("Reached maximum page limit: {}", limit);
                result.truncated = true;
                break;
            }
        }

        page = next_page;
    }

    Ok(result)
}
