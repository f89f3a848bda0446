//! Session controller use case
//!
//! Drives the prompt/record/analyze turn sequence over the media capture
//! and transcription ports, folding each response into the profile and
//! synthesizing the final report after the last turn.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::analysis::{fold, synthesize};
use crate::domain::config::DEFAULT_SETTLE_DELAY_MS;
use crate::domain::profile::Profile;
use crate::domain::prompt::{prompt_at, prompt_count, Prompt};
use crate::domain::session::{InvalidStateTransition, Session, SessionPhase};

use super::ports::{
    DeviceAccessError, DeviceHandle, MediaCapture, PlaybackError, RecordingError, Transcriber,
    TranscriptionError,
};

/// Errors from the session controller
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Device access failed: {0}")]
    DeviceAccess(#[from] DeviceAccessError),

    #[error("Playback failed: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error("Capture device not acquired")]
    DeviceNotAcquired,

    #[error("No prompt at index {0}")]
    MissingPrompt(usize),

    #[error("Session was restarted")]
    Restarted,
}

/// Read-only view of the session for the renderer
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub current_index: usize,
    pub profile: Profile,
    pub last_error: Option<SessionError>,
    pub final_report: Option<String>,
}

/// Controller state behind the mutex. The lock is never held across an
/// adapter await; `epoch` bumps on every restart so work that resumes
/// after an await can detect it went stale and discard its result.
struct Inner {
    session: Session,
    profile: Profile,
    last_error: Option<SessionError>,
    final_report: Option<String>,
    device: Option<DeviceHandle>,
    epoch: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            session: Session::new(),
            profile: Profile::empty(),
            last_error: None,
            final_report: None,
            device: None,
            epoch: 0,
        }
    }
}

/// Session controller over injected capture and transcription ports.
pub struct SessionController<M, T>
where
    M: MediaCapture,
    T: Transcriber,
{
    capture: M,
    transcriber: T,
    settle_delay: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl<M, T> SessionController<M, T>
where
    M: MediaCapture,
    T: Transcriber,
{
    /// Create a controller with the default inter-turn settle delay
    pub fn new(capture: M, transcriber: T) -> Self {
        Self {
            capture,
            transcriber,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            inner: Arc::new(Mutex::new(Inner::new())),
        }
    }

    /// Override the delay between folding a turn and the next playback
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Current view of the session for the renderer
    pub async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().await;
        SessionSnapshot {
            phase: inner.session.phase(),
            current_index: inner.session.current_index(),
            profile: inner.profile.clone(),
            last_error: inner.last_error.clone(),
            final_report: inner.final_report.clone(),
        }
    }

    /// Current phase without a full snapshot
    pub async fn phase(&self) -> SessionPhase {
        self.inner.lock().await.session.phase()
    }

    /// Acquire the capture device and play the first prompt. Legal only
    /// from the idle phase; returns once the session is waiting for the
    /// user (or idle again, on device failure).
    pub async fn initialize(&self) -> Result<(), SessionError> {
        let epoch = {
            let mut inner = self.inner.lock().await;
            if !inner.session.is_idle() {
                return Err(InvalidStateTransition {
                    current_phase: inner.session.phase(),
                    action: "initialize".to_string(),
                }
                .into());
            }
            inner.last_error = None;
            inner.epoch
        };

        match self.capture.acquire_device().await {
            Ok(handle) => {
                let mut inner = self.inner.lock().await;
                if inner.epoch != epoch {
                    drop(inner);
                    self.capture.release_device(handle).await;
                    return Err(SessionError::Restarted);
                }
                inner.device = Some(handle);
                inner.session.begin_listening()?;
            }
            Err(e) => {
                let err = SessionError::from(e);
                let mut inner = self.inner.lock().await;
                if inner.epoch == epoch {
                    inner.last_error = Some(err.clone());
                }
                return Err(err);
            }
        }

        self.play_current_prompt(epoch).await
    }

    /// Begin recording the response to the current prompt. Legal only
    /// while waiting for the user, with an acquired device.
    pub async fn start_turn(&self) -> Result<(), SessionError> {
        let (device, epoch) = {
            let mut inner = self.inner.lock().await;
            if inner.session.phase() != SessionPhase::WaitingForUser {
                return Err(InvalidStateTransition {
                    current_phase: inner.session.phase(),
                    action: "start turn".to_string(),
                }
                .into());
            }
            let Some(device) = inner.device else {
                let err = SessionError::DeviceNotAcquired;
                inner.last_error = Some(err.clone());
                return Err(err);
            };
            inner.last_error = None;
            (device, inner.epoch)
        };

        match self.capture.begin_recording(&device).await {
            Ok(()) => {
                let mut inner = self.inner.lock().await;
                if inner.epoch != epoch {
                    return Err(SessionError::Restarted);
                }
                inner.session.begin_recording()?;
                Ok(())
            }
            Err(e) => {
                let err = SessionError::from(e);
                let mut inner = self.inner.lock().await;
                if inner.epoch == epoch {
                    inner.last_error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    /// Finish the current turn: finalize the capture, transcribe it, fold
    /// the text into the profile and advance. Plays the next prompt after
    /// the settle delay, or synthesizes the final report on the last turn.
    /// On failure the index is untouched and the same prompt is retried
    /// from the wait state.
    pub async fn stop_turn(&self) -> Result<(), SessionError> {
        let (epoch, prompt) = {
            let mut inner = self.inner.lock().await;
            inner.session.begin_processing()?;
            let index = inner.session.current_index();
            let Some(prompt) = prompt_at(index) else {
                let err = SessionError::MissingPrompt(index);
                inner.last_error = Some(err.clone());
                inner.session.fail_processing()?;
                return Err(err);
            };
            (inner.epoch, prompt)
        };

        let text = match self.capture_and_transcribe(prompt).await {
            Ok(text) => text,
            Err(err) => {
                let mut inner = self.inner.lock().await;
                if inner.epoch == epoch {
                    inner.last_error = Some(err.clone());
                    inner.session.fail_processing()?;
                }
                return Err(err);
            }
        };

        let finished = {
            let mut inner = self.inner.lock().await;
            if inner.epoch != epoch {
                return Err(SessionError::Restarted);
            }
            inner.profile = fold(&text, &inner.profile, prompt);
            inner.session.advance_turn()?;
            let finished = inner.session.current_index() >= prompt_count();
            if finished {
                inner.final_report = Some(synthesize(&inner.profile));
                inner.session.finish()?;
            }
            finished
        };

        if finished {
            return Ok(());
        }

        tokio::time::sleep(self.settle_delay).await;
        {
            let mut inner = self.inner.lock().await;
            if inner.epoch != epoch {
                return Err(SessionError::Restarted);
            }
            inner.session.resume_listening()?;
        }

        self.play_current_prompt(epoch).await
    }

    /// Reset to a fresh idle session and release the capture device.
    /// Callable from any phase; any in-flight turn discards its result
    /// when it next observes the bumped epoch.
    pub async fn restart(&self) {
        let device = {
            let mut inner = self.inner.lock().await;
            inner.epoch += 1;
            inner.session.reset();
            inner.profile = Profile::empty();
            inner.last_error = None;
            inner.final_report = None;
            inner.device.take()
        };
        if let Some(handle) = device {
            self.capture.release_device(handle).await;
        }
    }

    /// Context-sensitive recovery: re-initialize when the device was never
    /// acquired, replay the current prompt when stalled around playback,
    /// otherwise fall back to a full restart.
    pub async fn retry_after_error(&self) -> Result<(), SessionError> {
        enum Plan {
            Initialize,
            Replay(u64),
            Restart,
        }

        let plan = {
            let mut inner = self.inner.lock().await;
            inner.last_error = None;
            if inner.device.is_none() {
                Plan::Initialize
            } else {
                match inner.session.phase() {
                    SessionPhase::Listening => Plan::Replay(inner.epoch),
                    SessionPhase::WaitingForUser => {
                        inner.session.replay()?;
                        Plan::Replay(inner.epoch)
                    }
                    _ => Plan::Restart,
                }
            }
        };

        match plan {
            Plan::Initialize => self.initialize().await,
            Plan::Replay(epoch) => self.play_current_prompt(epoch).await,
            Plan::Restart => {
                self.restart().await;
                Ok(())
            }
        }
    }

    async fn capture_and_transcribe(&self, prompt: &Prompt) -> Result<String, SessionError> {
        let clip = self.capture.end_recording().await?;
        let text = self.transcriber.transcribe(&clip, prompt).await?;
        Ok(text)
    }

    /// Play the current prompt's cue and move to the wait state. Playback
    /// failure also lands in the wait state, with the error recorded, so
    /// the same prompt can be retried or answered anyway.
    async fn play_current_prompt(&self, epoch: u64) -> Result<(), SessionError> {
        let audio = {
            let inner = self.inner.lock().await;
            if inner.epoch != epoch {
                return Err(SessionError::Restarted);
            }
            let index = inner.session.current_index();
            let Some(prompt) = prompt_at(index) else {
                return Err(SessionError::MissingPrompt(index));
            };
            prompt.audio()
        };

        let played = self.capture.play_clip(&audio).await;

        let mut inner = self.inner.lock().await;
        if inner.epoch != epoch {
            return Err(SessionError::Restarted);
        }
        inner.session.finish_playback()?;
        match played {
            Ok(()) => Ok(()),
            Err(e) => {
                let err = SessionError::from(e);
                inner.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioClip;
    use crate::domain::prompt::AudioRef;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    // Mock implementations for testing

    #[derive(Default)]
    struct MockCapture {
        releases: AtomicUsize,
        next_handle: AtomicU64,
    }

    #[async_trait]
    impl MediaCapture for MockCapture {
        async fn acquire_device(&self) -> Result<DeviceHandle, DeviceAccessError> {
            Ok(DeviceHandle::new(
                self.next_handle.fetch_add(1, Ordering::SeqCst),
            ))
        }

        async fn play_clip(&self, _audio: &AudioRef) -> Result<(), PlaybackError> {
            Ok(())
        }

        async fn begin_recording(&self, _device: &DeviceHandle) -> Result<(), RecordingError> {
            Ok(())
        }

        async fn end_recording(&self) -> Result<AudioClip, RecordingError> {
            Ok(AudioClip::new(vec![0i16; 1600], 16_000))
        }

        async fn release_device(&self, _device: DeviceHandle) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct MockTranscriber;

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            _clip: &AudioClip,
            prompt: &Prompt,
        ) -> Result<String, TranscriptionError> {
            Ok(format!("resposta para {}", prompt.domain().label()))
        }
    }

    fn controller() -> SessionController<MockCapture, MockTranscriber> {
        SessionController::new(MockCapture::default(), MockTranscriber)
            .with_settle_delay(Duration::from_millis(0))
    }

    #[tokio::test]
    async fn initialize_reaches_wait_state() {
        let controller = controller();
        controller.initialize().await.unwrap();
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::WaitingForUser);
        assert_eq!(snapshot.current_index, 0);
        assert!(snapshot.last_error.is_none());
    }

    #[tokio::test]
    async fn initialize_twice_is_rejected() {
        let controller = controller();
        controller.initialize().await.unwrap();
        let err = controller.initialize().await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidState(_)));
        // The rejection does not disturb the session
        assert_eq!(controller.phase().await, SessionPhase::WaitingForUser);
    }

    #[tokio::test]
    async fn start_turn_before_initialize_is_rejected() {
        let controller = controller();
        let err = controller.start_turn().await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidState(_)));
        assert_eq!(controller.phase().await, SessionPhase::Idle);
    }

    #[tokio::test]
    async fn stop_turn_from_wait_state_is_rejected() {
        let controller = controller();
        controller.initialize().await.unwrap();
        let err = controller.stop_turn().await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidState(_)));
        assert_eq!(controller.phase().await, SessionPhase::WaitingForUser);
    }

    #[tokio::test]
    async fn one_turn_folds_and_advances() {
        let controller = controller();
        controller.initialize().await.unwrap();
        controller.start_turn().await.unwrap();
        assert_eq!(controller.phase().await, SessionPhase::Recording);
        controller.stop_turn().await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::WaitingForUser);
        assert_eq!(snapshot.current_index, 1);
        assert_eq!(snapshot.profile.fragments.len(), 1);
    }

    #[tokio::test]
    async fn full_session_finishes_with_report() {
        let controller = controller();
        controller.initialize().await.unwrap();
        for _ in 0..prompt_count() {
            controller.start_turn().await.unwrap();
            controller.stop_turn().await.unwrap();
        }
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::Finished);
        assert_eq!(snapshot.profile.fragments.len(), prompt_count());
        let report = snapshot.final_report.unwrap();
        assert!(report.contains("RELATÓRIO DNA"));
    }

    #[tokio::test]
    async fn restart_releases_device_and_resets() {
        let controller = controller();
        controller.initialize().await.unwrap();
        controller.start_turn().await.unwrap();
        controller.restart().await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::Idle);
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.profile, Profile::empty());
        assert!(snapshot.last_error.is_none());
        assert_eq!(controller.capture.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn restart_without_device_releases_nothing() {
        let controller = controller();
        controller.restart().await;
        assert_eq!(controller.capture.releases.load(Ordering::SeqCst), 0);
    }
}
