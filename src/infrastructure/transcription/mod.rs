//! Transcription adapters

mod template;

pub use template::TemplateTranscriber;
