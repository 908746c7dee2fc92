// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Rendering and path calculation are pure; `writer` performs the I/O.

mod clipboard;
mod paths;
mod render;
mod types;
mod writer;

pub use clipboard::copy_to_clipboard;
pub use paths::{default_output_filename, sanitize_filename};
pub use render::render_documents;
pub use types::{Delivered, DeliveryTarget, FailedDelivery, OutputPlan, OutputReport};
pub use writer::deliver;
