//! Content-type identifiers and the ordered set the reader iterates over.

use super::ValidationError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// The REST route segment for WordPress pages.
pub const PAGES: &str = "pages";
/// The REST route segment for WordPress posts.
pub const POSTS: &str = "posts";

/// A REST collection name such as `pages`, `posts` or a custom post type's
/// `rest_base`. Case-sensitive and otherwise unchecked: an identifier the
/// site doesn't know surfaces as an HTTP error from the REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("content_type"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn pages() -> Self {
        Self(PAGES.to_string())
    }

    pub fn posts() -> Self {
        Self(POSTS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free set of content types. Iteration follows insertion
/// order, which makes fetch order across types deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTypes(IndexSet<ContentType>);

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from the two well-known flags plus a comma-separated
    /// supplement. Blank entries in the supplement are skipped.
    pub fn from_flags(
        include_pages: bool,
        include_posts: bool,
        additional: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut types = Self::new();
        if include_pages {
            types.insert(ContentType::pages());
        }
        if include_posts {
            types.insert(ContentType::posts());
        }
        if let Some(list) = additional {
            types.extend_from_list(list)?;
        }
        Ok(types)
    }

    /// Inserts a content type; returns `false` when it was already present.
    pub fn insert(&mut self, content_type: ContentType) -> bool {
        self.0.insert(content_type)
    }

    /// Adds every non-blank entry of a comma-separated list.
    pub fn extend_from_list(&mut self, list: &str) -> Result<(), ValidationError> {
        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            if !self.insert(ContentType::new(entry)?) {
                log::debug!("Ignoring duplicate content type '{}'", entry);
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|ct| ct.as_str() == name)
    }
}

impl<'a> IntoIterator for &'a ContentTypes {
    type Item = &'a ContentType;
    type IntoIter = indexmap::set::Iter<'a, ContentType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ContentTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(ContentType::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Maximum number of pages fetched per content type. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageLimit(NonZeroU32);

impl PageLimit {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ValidationError::OutOfBounds {
                value,
                min: 1,
                max: u32::MAX,
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
