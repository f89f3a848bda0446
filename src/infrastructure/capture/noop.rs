//! No-op media capture for silent mode and machines without audio hardware
//!
//! Playback is a short sleep; recording yields a synthetic non-empty clip.
//! Deterministic apart from wall-clock timing, which makes it the adapter
//! of choice for CI and for driving the session without a microphone.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::application::ports::{
    DeviceAccessError, DeviceHandle, MediaCapture, PlaybackError, RecordingError,
};
use crate::domain::audio::AudioClip;
use crate::domain::prompt::AudioRef;

const SYNTHETIC_SAMPLE_RATE: u32 = 16_000;
const PLAYBACK_PAUSE_MS: u64 = 300;

/// Silent capture adapter
pub struct NoopCapture {
    is_recording: AtomicBool,
    next_handle: AtomicU64,
}

impl NoopCapture {
    pub fn new() -> Self {
        Self {
            is_recording: AtomicBool::new(false),
            next_handle: AtomicU64::new(1),
        }
    }
}

impl Default for NoopCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaCapture for NoopCapture {
    async fn acquire_device(&self) -> Result<DeviceHandle, DeviceAccessError> {
        Ok(DeviceHandle::new(
            self.next_handle.fetch_add(1, Ordering::SeqCst),
        ))
    }

    async fn play_clip(&self, _audio: &AudioRef) -> Result<(), PlaybackError> {
        sleep(Duration::from_millis(PLAYBACK_PAUSE_MS)).await;
        Ok(())
    }

    async fn begin_recording(&self, _device: &DeviceHandle) -> Result<(), RecordingError> {
        if self.is_recording.swap(true, Ordering::SeqCst) {
            return Err(RecordingError::StartFailed(
                "Recording already in progress".to_string(),
            ));
        }
        Ok(())
    }

    async fn end_recording(&self) -> Result<AudioClip, RecordingError> {
        if !self.is_recording.swap(false, Ordering::SeqCst) {
            return Err(RecordingError::NotRecording);
        }
        // One second of silence stands in for the captured response
        Ok(AudioClip::new(
            vec![0i16; SYNTHETIC_SAMPLE_RATE as usize],
            SYNTHETIC_SAMPLE_RATE,
        ))
    }

    async fn release_device(&self, _device: DeviceHandle) {
        self.is_recording.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_synthetic_clip() {
        let capture = NoopCapture::new();
        let handle = capture.acquire_device().await.unwrap();
        capture.begin_recording(&handle).await.unwrap();
        let clip = capture.end_recording().await.unwrap();
        assert!(!clip.is_empty());
        assert_eq!(clip.sample_rate(), SYNTHETIC_SAMPLE_RATE);
    }

    #[tokio::test]
    async fn end_without_begin_fails() {
        let capture = NoopCapture::new();
        let err = capture.end_recording().await.unwrap_err();
        assert!(matches!(err, RecordingError::NotRecording));
    }

    #[tokio::test]
    async fn double_begin_fails() {
        let capture = NoopCapture::new();
        let handle = capture.acquire_device().await.unwrap();
        capture.begin_recording(&handle).await.unwrap();
        let err = capture.begin_recording(&handle).await.unwrap_err();
        assert!(matches!(err, RecordingError::StartFailed(_)));
    }

    #[tokio::test]
    async fn release_clears_recording_flag() {
        let capture = NoopCapture::new();
        let handle = capture.acquire_device().await.unwrap();
        capture.begin_recording(&handle).await.unwrap();
        capture.release_device(handle).await;
        let err = capture.end_recording().await.unwrap_err();
        assert!(matches!(err, RecordingError::NotRecording));
    }
}
