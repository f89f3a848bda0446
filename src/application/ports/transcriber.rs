//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioClip;
use crate::domain::prompt::Prompt;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Empty audio clip")]
    EmptyClip,

    #[error("Transcription provider failed: {0}")]
    ProviderFailed(String),
}

/// Port for turning a captured clip into text.
///
/// The reference adapter is a deterministic per-domain template; a real
/// speech-to-text provider slots in here without touching the analysis
/// engine or the controller.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a captured response.
    ///
    /// # Arguments
    /// * `clip` - The captured audio
    /// * `prompt` - The prompt the response answers, for domain context
    async fn transcribe(
        &self,
        clip: &AudioClip,
        prompt: &Prompt,
    ) -> Result<String, TranscriptionError>;
}
