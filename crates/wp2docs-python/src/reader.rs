//! Python-facing reader.

use crate::types::{documents_to_list, to_py_err};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;
use wp2docs::{ReaderConfig, WordPressReader};

/// Reads pages, posts and custom content types from a WordPress site.
///
/// Args:
///     url: Base URL of the site, e.g. "https://example.com"
///     username: Username for basic authentication
///     password: Application password for basic authentication
///     get_pages: Include static pages (default True)
///     get_posts: Include blog posts (default True)
///     additional_post_types: Comma-separated extra content types
///     page_limit: Maximum pages to fetch per content type
#[pyclass(name = "WordpressReader")]
pub struct PyWordpressReader {
    inner: WordPressReader,
}

#[pymethods]
impl PyWordpressReader {
    #[new]
    #[pyo3(signature = (
        url,
        username = None,
        password = None,
        get_pages = true,
        get_posts = true,
        additional_post_types = None,
        page_limit = None,
    ))]
    fn new(
        url: &str,
        username: Option<String>,
        password: Option<String>,
        get_pages: bool,
        get_posts: bool,
        additional_post_types: Option<String>,
        page_limit: Option<u32>,
    ) -> PyResult<Self> {
        let mut builder = ReaderConfig::builder(url)
            .include_pages(get_pages)
            .include_posts(get_posts);
        if let Some(username) = username {
            builder = builder.username(username);
        }
        if let Some(password) = password {
            builder = builder.password(password);
        }
        if let Some(list) = additional_post_types {
            builder = builder.additional_content_types(list);
        }
        if let Some(limit) = page_limit {
            builder = builder.page_limit(limit);
        }

        let config = builder
            .build()
            .map_err(|e| PyValueError::new_err(format!("Invalid reader configuration: {}", e)))?;
        let inner = WordPressReader::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Fetch every configured content type and return a list of documents.
    ///
    /// Each document is a dict `{"text": str, "extra_info": {"id", "title",
    /// "url", "updated_at"}}`. The GIL is released while fetching.
    fn load_data<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        let docs = py
            .allow_threads(|| self.inner.load_data())
            .map_err(to_py_err)?;
        documents_to_list(py, &docs)
    }

    /// Like `load_data`, but returns `(documents, truncated_types)` where
    /// `truncated_types` names collections cut short by `page_limit`.
    fn load_data_with_report<'py>(
        &self,
        py: Python<'py>,
    ) -> PyResult<(Bound<'py, PyList>, Vec<String>)> {
        let outcome = py
            .allow_threads(|| self.inner.load_data_with_report())
            .map_err(to_py_err)?;
        let truncated = outcome
            .report
            .truncated()
            .map(|t| t.to_string())
            .collect();
        Ok((documents_to_list(py, &outcome.documents)?, truncated))
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "WordpressReader(url='{}', content_types='{}')",
            config.base_url, config.content_types
        )
    }
}
