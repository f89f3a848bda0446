//! Media capture port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioClip;
use crate::domain::prompt::AudioRef;

/// Errors while acquiring the capture device
#[derive(Debug, Clone, Error)]
pub enum DeviceAccessError {
    #[error("No input device available")]
    NoDevice,

    #[error("Microphone access denied: {0}")]
    AccessDenied(String),

    #[error("Failed to open capture device: {0}")]
    OpenFailed(String),
}

/// Errors while playing a prompt's audio cue
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("No output device available: {0}")]
    DeviceNotAvailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Errors while recording a response
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("No recording in progress")]
    NotRecording,

    #[error("No audio data captured")]
    EmptyCapture,
}

/// Handle to an acquired capture device. Created by the adapter when the
/// device is acquired; owned by the controller for the session's lifetime
/// and handed back to the adapter on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(u64);

impl DeviceHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Port for platform audio I/O: prompt playback plus response capture.
///
/// Playback resolves exactly once, with either success or a
/// [`PlaybackError`]. At most one recording is in flight at a time;
/// `end_recording` without a matching `begin_recording`, or with zero
/// captured samples, fails.
#[async_trait]
pub trait MediaCapture: Send + Sync {
    /// Acquire the input device for the session
    async fn acquire_device(&self) -> Result<DeviceHandle, DeviceAccessError>;

    /// Play a prompt's audio cue to completion
    async fn play_clip(&self, audio: &AudioRef) -> Result<(), PlaybackError>;

    /// Begin capturing a response on the acquired device
    async fn begin_recording(&self, device: &DeviceHandle) -> Result<(), RecordingError>;

    /// Finalize the capture into a clip
    async fn end_recording(&self) -> Result<AudioClip, RecordingError>;

    /// Release the device. Called exactly once per acquired handle, on
    /// session restart or teardown.
    async fn release_device(&self, device: DeviceHandle);
}
