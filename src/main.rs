// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::path::PathBuf;
use wp2docs::output::{
    default_output_filename, deliver, render_documents, DeliveryTarget, OutputPlan, OutputReport,
};
use wp2docs::{
    describe_report, measure_documents, AppError, CommandLineInput, DocumentDelivery,
    DocumentSource, LoadOutcome, PipelineConfig, RemoteRequestError, WordPressReader,
    LOG_FILE_NAME, PASSWORD_ENV, USERNAME_ENV,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // Logs go to stderr so pipe mode keeps stdout clean.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("cannot open log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the pipeline: load → render → deliver.
fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = WordPressToDocuments::new(config)?;

    let outcome = pipeline.load()?;
    let rendered = render_documents(&outcome.documents, config.format)?;
    let report = pipeline.deliver(rendered)?;
    pipeline.report_completion(&outcome, &report);

    Ok(())
}

/// Orchestrates loading a site's content and delivering the documents.
struct WordPressToDocuments<'a> {
    config: &'a PipelineConfig,
    reader: WordPressReader,
}

impl<'a> WordPressToDocuments<'a> {
    fn new(config: &'a PipelineConfig) -> Result<Self, AppError> {
        Ok(Self {
            config,
            reader: WordPressReader::new(config.reader.clone())?,
        })
    }

    /// Where the documents go when neither pipe mode nor clipboard is chosen.
    fn output_path(&self) -> PathBuf {
        self.config.output_file.clone().unwrap_or_else(|| {
            PathBuf::from(default_output_filename(
                &self.config.reader.base_url,
                self.config.format,
            ))
        })
    }

    fn plan(&self, rendered: String) -> OutputPlan {
        let mut plan = OutputPlan::new(rendered);
        if self.config.pipe {
            return plan.to(DeliveryTarget::Stdout);
        }

        if self.config.output_file.is_some() || !self.config.clipboard {
            plan = plan.to(DeliveryTarget::File(self.output_path()));
        }
        if self.config.clipboard {
            plan = plan.to(DeliveryTarget::Clipboard);
        }
        plan
    }

    /// Reports completion to the user with stats and delivery confirmations.
    fn report_completion(&self, outcome: &LoadOutcome, report: &OutputReport) {
        if self.config.pipe {
            return;
        }

        let stats = measure_documents(&outcome.documents);
        println!(
            "📄 Loaded {} documents ({} characters) from {}.",
            stats.documents, stats.total_chars, self.config.reader.base_url
        );
        for line in describe_report(&outcome.report) {
            println!("   {}", line);
        }
        if stats.empty_documents > 0 {
            println!("   {} documents have no text content.", stats.empty_documents);
        }
        if let Some(latest) = stats.latest_update {
            println!("   Most recent update: {}", latest);
        }
        if outcome.report.is_truncated() {
            eprintln!(
                "⚠️  Page limit ({}) reached. Some content may be missing.",
                self.config
                    .reader
                    .page_limit
                    .map(|l| l.to_string())
                    .unwrap_or_default()
            );
        }

        for delivered in &report.delivered {
            match &delivered.target {
                DeliveryTarget::File(path) => {
                    println!("✓ Saved {} bytes to {}", delivered.bytes, path.display());
                }
                DeliveryTarget::Clipboard => {
                    println!("✓ Copied {} bytes to clipboard", delivered.bytes);
                }
                DeliveryTarget::Stdout => {}
            }
        }
    }
}

impl DocumentSource for WordPressToDocuments<'_> {
    fn load(&self) -> Result<LoadOutcome, AppError> {
        self.reader.load_data_with_report()
    }
}

impl DocumentDelivery for WordPressToDocuments<'_> {
    fn deliver(&self, rendered: String) -> Result<OutputReport, AppError> {
        let report = deliver(&self.plan(rendered));

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failure_messages(),
            });
        }

        Ok(report)
    }
}

/// Prints a hint for failures with a well-known cause.
fn explain_failure(error: &AppError) {
    if let AppError::RemoteRequest(RemoteRequestError::Status { code, .. }) = error {
        if code.is_unknown_content_type() {
            eprintln!("hint: one of the content types is not exposed by this site's REST API");
        } else if code.is_auth_failure() {
            eprintln!(
                "hint: check the credentials (--username/--password or {}/{})",
                USERNAME_ENV, PASSWORD_ENV
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli).context("invalid configuration")?;
    log::debug!("Resolved configuration: {:?}", config.reader);

    if let Err(error) = execute_pipeline(&config) {
        explain_failure(&error);
        return Err(error).context(format!("failed to read {}", config.reader.base_url));
    }

    Ok(())
}
