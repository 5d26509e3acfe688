//! Report adapters - ReportRenderer implementations.

mod markdown_renderer;

pub use markdown_renderer::MarkdownReportRenderer;
