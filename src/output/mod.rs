//! Output module
//! Report structures and format-specific rendering

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::AnalysisReport;
