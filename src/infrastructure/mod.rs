//! Infrastructure layer - adapter implementations

pub mod capture;
pub mod config;
pub mod export;
pub mod transcription;

// Re-export adapters
pub use capture::{CpalCapture, NoopCapture};
pub use config::XdgConfigStore;
pub use export::FileReportExporter;
pub use transcription::TemplateTranscriber;
