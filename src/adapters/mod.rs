//! Adapters - Implementations of port interfaces and transport surfaces.
//!
//! - `http` - axum REST API over the application handlers
//! - `report` - Report renderers (Markdown)

pub mod http;
pub mod report;

pub use report::MarkdownReportRenderer;
