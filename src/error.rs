// src/error.rs
//! Application error types with structured error handling.
//!
//! Two failure modes matter to callers of the reader: the remote site refused
//! or broke a request (`RemoteRequestError`), or it returned an item that
//! cannot be turned into a document (`MalformedItemError`). Both are fatal for
//! the call that hit them.

use std::fmt;
use thiserror::Error;

/// WordPress REST API error codes as a typed vocabulary.
///
/// The REST API reports failures as `{"code": "...", "message": "...",
/// "data": {"status": N}}`. Matching on variants keeps the CLI's hints free
/// of stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPressErrorCode {
    /// The route does not exist, usually an unregistered content type
    NoRoute,
    /// The requested page is past the end of the collection
    InvalidPageNumber,
    /// A query parameter failed validation
    InvalidParam,
    /// Authentication is required for this collection
    NotLoggedIn,
    /// The authenticated user may not read this collection
    Forbidden,
    /// The supplied username is unknown
    InvalidUsername,
    /// The supplied password or application password is wrong
    IncorrectPassword,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl WordPressErrorCode {
    /// Parse a REST API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rest_no_route" => Self::NoRoute,
            "rest_post_invalid_page_number" => Self::InvalidPageNumber,
            "rest_invalid_param" => Self::InvalidParam,
            "rest_not_logged_in" => Self::NotLoggedIn,
            "rest_forbidden" | "rest_forbidden_context" | "rest_cannot_read" => Self::Forbidden,
            "invalid_username" | "invalid_email" => Self::InvalidUsername,
            "incorrect_password" => Self::IncorrectPassword,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether the failure points at missing or wrong credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::NotLoggedIn
                | Self::Forbidden
                | Self::InvalidUsername
                | Self::IncorrectPassword
                | Self::HttpStatus(401)
                | Self::HttpStatus(403)
        )
    }

    /// Whether the failure means the content type has no REST route.
    pub fn is_unknown_content_type(&self) -> bool {
        matches!(self, Self::NoRoute)
    }
}

impl fmt::Display for WordPressErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoute => write!(f, "rest_no_route"),
            Self::InvalidPageNumber => write!(f, "rest_post_invalid_page_number"),
            Self::InvalidParam => write!(f, "rest_invalid_param"),
            Self::NotLoggedIn => write!(f, "rest_not_logged_in"),
            Self::Forbidden => write!(f, "rest_forbidden"),
            Self::InvalidUsername => write!(f, "invalid_username"),
            Self::IncorrectPassword => write!(f, "incorrect_password"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// A page request that did not produce a usable item batch.
#[derive(Error, Debug)]
pub enum RemoteRequestError {
    #[error("WordPress API returned HTTP {status} for {url} ({code}): {message}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        code: WordPressErrorCode,
        message: String,
        /// The complete response body as received.
        body: String,
    },

    #[error("HTTP transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response body from {url}: {reason}\nBody: {preview}")]
    UnexpectedBody {
        url: String,
        reason: String,
        preview: String,
    },

    #[error("Cannot build a REST endpoint from {base_url}")]
    InvalidEndpoint { base_url: String },
}

impl RemoteRequestError {
    /// HTTP status of the failing response, when one was received.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            Self::UnexpectedBody { .. } | Self::InvalidEndpoint { .. } => None,
        }
    }

    /// Typed REST error code, when the server sent one.
    pub fn code(&self) -> Option<&WordPressErrorCode> {
        match self {
            Self::Status { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// A raw item that cannot be normalized into a document.
///
/// `position` is the item's index in the concatenated item sequence of the
/// failing call; `content_type` names the collection it came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedItemError {
    #[error("Item #{position} from '{content_type}' is not a JSON object")]
    NotAnObject {
        position: usize,
        content_type: String,
    },

    #[error("Item #{position} from '{content_type}' is missing required field '{field}'")]
    MissingField {
        position: usize,
        content_type: String,
        field: &'static str,
    },
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    RemoteRequest(#[from] RemoteRequestError),

    #[error(transparent)]
    MalformedItem(#[from] MalformedItemError),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize documents: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}
