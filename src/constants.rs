// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// WordPress REST API boundaries
// ---------------------------------------------------------------------------

/// How many items are requested per page of a collection.
///
/// 100 is the largest `per_page` value the WordPress REST API accepts.
pub const WP_API_PAGE_SIZE: u32 = 100;

/// Path segments appended to the site URL to reach the core REST namespace.
pub const WP_REST_ROUTE: [&str; 3] = ["wp-json", "wp", "v2"];

/// Response header carrying the total number of pages in a collection.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Response header carrying the total number of items in a collection.
pub const TOTAL_ITEMS_HEADER: &str = "X-WP-Total";

/// Page count assumed when the total-pages header is absent or unparseable.
pub const DEFAULT_TOTAL_PAGES: u32 = 1;

/// User agent sent with every request. Some hosts reject the default
/// HTTP-client user agent outright.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// File name of the debug log written to the temp directory.
pub const LOG_FILE_NAME: &str = "wp2docs.log";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
