//! Template transcriber
//!
//! Deterministic stand-in for a real speech-to-text provider: every clip
//! transcribes to a fixed sentence templated on the prompt's domain. A
//! genuine provider replaces this adapter without touching the analysis
//! engine or the controller.

use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::audio::AudioClip;
use crate::domain::prompt::Prompt;

/// Deterministic per-domain transcription stub
pub struct TemplateTranscriber;

impl TemplateTranscriber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for TemplateTranscriber {
    async fn transcribe(
        &self,
        clip: &AudioClip,
        prompt: &Prompt,
    ) -> Result<String, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::EmptyClip);
        }
        Ok(format!(
            "Resposta simulada para {}: Responsável, organizado, ajudando \
             pessoas. Justiça e igualdade.",
            prompt.domain().label()
        ))
    }
}
