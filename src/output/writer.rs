// src/output/writer.rs
//! The only place where file, stdout or clipboard writes happen.

use super::clipboard::copy_to_clipboard;
use super::types::{Delivered, DeliveryTarget, FailedDelivery, OutputPlan, OutputReport};
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Sends the plan's content to each target. A failing target is recorded and
/// the remaining targets are still attempted.
pub fn deliver(plan: &OutputPlan) -> OutputReport {
    let mut report = OutputReport::default();

    for target in &plan.targets {
        match send(target, &plan.content) {
            Ok(()) => {
                log::debug!("Delivered {} bytes to {}", plan.content.len(), target);
                report.delivered.push(Delivered {
                    target: target.clone(),
                    bytes: plan.content.len(),
                });
            }
            Err(e) => {
                log::error!("Delivery to {} failed: {}", target, e);
                report.failed.push(FailedDelivery {
                    target: target.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}

fn send(target: &DeliveryTarget, content: &str) -> Result<(), AppError> {
    match target {
        DeliveryTarget::File(path) => write_file(path, content),
        DeliveryTarget::Clipboard => copy_to_clipboard(content),
        DeliveryTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
