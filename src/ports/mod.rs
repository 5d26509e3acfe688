//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReportRenderer` - Turns a leadership FMEA report into a document

mod report_renderer;

pub use report_renderer::{RenderError, RenderOptions, ReportRenderer};
