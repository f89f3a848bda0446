//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod capture;
pub mod config;
pub mod exporter;
pub mod transcriber;

// Re-export common types
pub use capture::{
    DeviceAccessError, DeviceHandle, MediaCapture, PlaybackError, RecordingError,
};
pub use config::ConfigStore;
pub use exporter::{ExportError, ReportExporter};
pub use transcriber::{Transcriber, TranscriptionError};
