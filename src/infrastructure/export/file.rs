//! File report exporter

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use tokio::fs;

use crate::application::ports::{ExportError, ReportExporter};

/// Writes the final report to `DNA_Report_<YYYY-MM-DD>.txt` under the
/// configured directory, creating it when missing.
pub struct FileReportExporter {
    dir: PathBuf,
}

impl FileReportExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_name() -> String {
        format!("DNA_Report_{}.txt", Local::now().format("%Y-%m-%d"))
    }
}

#[async_trait]
impl ReportExporter for FileReportExporter {
    async fn export(&self, report: &str) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        let path = self.dir.join(Self::file_name());
        fs::write(&path, report)
            .await
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        Ok(path)
    }
}
