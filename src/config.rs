// src/config.rs
use crate::error::AppError;
use crate::types::{ContentTypes, Credentials, PageLimit, ValidatedUrl, ValidationError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Environment variable consulted when `--username` is not given.
pub const USERNAME_ENV: &str = "WP_USERNAME";
/// Environment variable consulted when `--password` is not given.
pub const PASSWORD_ENV: &str = "WP_PASSWORD";

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Base URL of the WordPress site (e.g., "https://example.com")
    pub url: String,

    /// Username for basic authentication (falls back to WP_USERNAME)
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Application password for basic authentication (falls back to WP_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,

    /// Skip static pages
    #[arg(long, default_value_t = false)]
    pub no_pages: bool,

    /// Skip blog posts
    #[arg(long, default_value_t = false)]
    pub no_posts: bool,

    /// Comma-separated list of additional content types (e.g., "webinars,my-custom-page")
    #[arg(short = 't', long)]
    pub additional_content_types: Option<String>,

    /// Maximum number of pages to fetch per content type
    #[arg(short = 'l', long)]
    pub page_limit: Option<u32>,

    /// Output file for the documents (optional)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Copy the rendered documents to the clipboard
    #[arg(short = 'b', long, default_value_t = false)]
    pub clipboard: bool,

    /// Pipe mode - write documents directly to stdout for piping
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// How documents are rendered for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

/// Immutable reader configuration: where to read from, as whom, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub base_url: ValidatedUrl,
    pub credentials: Option<Credentials>,
    pub content_types: ContentTypes,
    pub page_limit: Option<PageLimit>,
}

impl ReaderConfig {
    /// Starts a builder with pages and posts included and no page limit.
    pub fn builder(base_url: impl Into<String>) -> ReaderConfigBuilder {
        ReaderConfigBuilder::new(base_url)
    }
}

/// Construction-time options for [`ReaderConfig`].
#[derive(Debug, Clone)]
pub struct ReaderConfigBuilder {
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    include_pages: bool,
    include_posts: bool,
    additional_content_types: Option<String>,
    page_limit: Option<u32>,
}

impl ReaderConfigBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            include_pages: true,
            include_posts: true,
            additional_content_types: None,
            page_limit: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn include_pages(mut self, include: bool) -> Self {
        self.include_pages = include;
        self
    }

    pub fn include_posts(mut self, include: bool) -> Self {
        self.include_posts = include;
        self
    }

    /// Comma-separated extra content types, e.g. `"webinars,my-custom-page"`.
    pub fn additional_content_types(mut self, list: impl Into<String>) -> Self {
        self.additional_content_types = Some(list.into());
        self
    }

    pub fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<ReaderConfig, ValidationError> {
        let base_url = ValidatedUrl::parse(&self.base_url)?;
        let credentials =
            Credentials::from_parts(self.username.as_deref(), self.password.as_deref());
        let content_types = ContentTypes::from_flags(
            self.include_pages,
            self.include_posts,
            self.additional_content_types.as_deref(),
        )?;
        let page_limit = self.page_limit.map(PageLimit::new).transpose()?;

        if self.username.is_some() != self.password.is_some() {
            log::warn!("Only one of username/password given; requests will be unauthenticated");
        }

        Ok(ReaderConfig {
            base_url,
            credentials,
            content_types,
            page_limit,
        })
    }
}

/// Resolved CLI configuration: the reader settings plus delivery options.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub reader: ReaderConfig,
    pub output_file: Option<PathBuf>,
    pub clipboard: bool,
    pub pipe: bool,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let username = cli.username.or_else(|| std::env::var(USERNAME_ENV).ok());
        let password = cli.password.or_else(|| std::env::var(PASSWORD_ENV).ok());

        let mut builder = ReaderConfig::builder(cli.url)
            .include_pages(!cli.no_pages)
            .include_posts(!cli.no_posts);
        if let Some(username) = username {
            builder = builder.username(username);
        }
        if let Some(password) = password {
            builder = builder.password(password);
        }
        if let Some(list) = cli.additional_content_types {
            builder = builder.additional_content_types(list);
        }
        if let Some(limit) = cli.page_limit {
            builder = builder.page_limit(limit);
        }

        Ok(PipelineConfig {
            reader: builder.build()?,
            output_file: cli.output_file.map(PathBuf::from),
            clipboard: cli.clipboard,
            pipe: cli.pipe,
            format: cli.format,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ReaderConfig::builder("https://example.com").build().unwrap();
        assert_eq!(config.content_types.to_string(), "pages, posts");
        assert!(config.credentials.is_none());
        assert!(config.page_limit.is_none());
    }

    #[test]
    fn test_builder_full() {
        let config = ReaderConfig::builder("https://example.com/blog/")
            .username("editor")
            .password("abcd efgh ijkl")
            .include_pages(false)
            .additional_content_types("webinars, events")
            .page_limit(2)
            .build()
            .unwrap();

        assert_eq!(config.content_types.to_string(), "posts, webinars, events");
        assert_eq!(config.credentials.as_ref().map(|c| c.username()), Some("editor"));
        assert_eq!(config.page_limit.map(PageLimit::get), Some(2));
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        assert!(matches!(
            ReaderConfig::builder("example.com").build(),
            Err(ValidationError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ReaderConfig::builder("https://example.com").page_limit(0).build(),
            Err(ValidationError::OutOfBounds { value: 0, .. })
        ));
    }

    #[test]
    fn test_half_credentials_are_dropped() {
        let config = ReaderConfig::builder("https://example.com")
            .username("editor")
            .build()
            .unwrap();
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = CommandLineInput::try_parse_from([
            "wp2docs",
            "https://example.com",
            "--no-posts",
            "-t",
            "webinars",
            "--page-limit",
            "3",
            "--format",
            "jsonl",
            "--username",
            "editor",
            "--password",
            "secret",
        ])
        .unwrap();

        let config = PipelineConfig::resolve(cli).unwrap();
        assert_eq!(config.reader.content_types.to_string(), "pages, webinars");
        assert_eq!(config.reader.page_limit.map(PageLimit::get), Some(3));
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(config.reader.credentials.is_some());
        assert!(!config.pipe);
    }
}
