// src/output/types.rs
//! Delivery plan and its outcome.

use std::fmt;
use std::path::PathBuf;

/// A destination for rendered documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    File(PathBuf),
    Clipboard,
    Stdout,
}

impl fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Clipboard => f.write_str("clipboard"),
            Self::Stdout => f.write_str("stdout"),
        }
    }
}

/// Rendered documents plus every destination they should reach, in order.
#[derive(Debug, Clone)]
pub struct OutputPlan {
    pub content: String,
    pub targets: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new(content: String) -> Self {
        Self {
            content,
            targets: Vec::new(),
        }
    }

    pub fn to(mut self, target: DeliveryTarget) -> Self {
        self.targets.push(target);
        self
    }
}

/// A target that received the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub target: DeliveryTarget,
    pub bytes: usize,
}

/// A target that could not be reached.
#[derive(Debug, Clone)]
pub struct FailedDelivery {
    pub target: DeliveryTarget,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub delivered: Vec<Delivered>,
    pub failed: Vec<FailedDelivery>,
}

impl OutputReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// `target: error` for each failed delivery.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("{}: {}", f.target, f.error))
            .collect()
    }
}
