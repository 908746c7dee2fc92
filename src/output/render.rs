// src/output/render.rs
//! Serializes documents for delivery.

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::model::Document;

/// Renders documents as a pretty JSON array or as JSON Lines.
pub fn render_documents(documents: &[Document], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(documents)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for document in documents {
                out.push_str(&serde_json::to_string(document)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}
