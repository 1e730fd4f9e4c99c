//! Use case orchestration for nuget-report.
//!
//! This crate provides the application layer: use cases that coordinate the repo, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup and the
//! workspace prompt.

#![forbid(unsafe_code)]

mod output;
mod render;
mod report;

pub use output::{Destination, emit_report, write_classification_json};
pub use render::{render_annotations, render_markdown};
pub use report::{ReportInput, ReportOutput, load_config_text, run_report};
