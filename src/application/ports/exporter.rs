//! Report export port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Export errors
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to write report: {0}")]
    WriteFailed(String),
}

/// Port for offering the final report as a file
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Write the report and return the path it landed at
    async fn export(&self, report: &str) -> Result<PathBuf, ExportError>;
}
