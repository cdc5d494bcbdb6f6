//! roster-report: Report generation for roster.

pub mod text;

pub use text::TextReportGenerator;
