//! Report export adapters

mod file;

pub use file::FileReportExporter;
