//! Cross-platform media capture using cpal (input) and rodio (cues)
//!
//! Records mono 16-bit PCM at the device sample rate. The cpal stream is
//! not Send, so it lives on a dedicated capture thread controlled through
//! an atomic flag.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tokio::time::sleep;

use crate::application::ports::{
    DeviceAccessError, DeviceHandle, MediaCapture, PlaybackError, RecordingError,
};
use crate::domain::audio::AudioClip;
use crate::domain::prompt::AudioRef;

/// Media capture adapter backed by real audio hardware.
pub struct CpalCapture {
    /// Recorded audio samples (mono, i16, at device sample rate)
    audio_buffer: Arc<StdMutex<Vec<i16>>>,
    /// Device sample rate observed by the capture thread
    device_sample_rate: Arc<AtomicU32>,
    /// Recording state flag shared with the capture thread
    is_recording: Arc<AtomicBool>,
    /// Monotonic handle ids
    next_handle: AtomicU64,
}

impl CpalCapture {
    pub fn new() -> Self {
        Self {
            audio_buffer: Arc::new(StdMutex::new(Vec::new())),
            device_sample_rate: Arc::new(AtomicU32::new(0)),
            is_recording: Arc::new(AtomicBool::new(false)),
            next_handle: AtomicU64::new(1),
        }
    }

    fn default_input_exists() -> bool {
        cpal::default_host().default_input_device().is_some()
    }

    /// Mix interleaved multi-channel samples down to mono
    fn mixdown(samples: &[i16], channels: u16) -> Vec<i16> {
        if channels <= 1 {
            return samples.to_vec();
        }
        samples
            .chunks(channels as usize)
            .map(|chunk| {
                let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }
}

impl Default for CpalCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a tone with a short fade-in for a softer cue
fn gentle_tone(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30);
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

/// Play the prompt cue synchronously (called from spawn_blocking).
/// Every catalog locator currently maps to the same ascending chime.
fn play_cue_sync(_locator: &str) -> Result<(), PlaybackError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    const AMP: f32 = 0.3;
    // Ascending chime: C5 -> E5 -> G5
    sink.append(gentle_tone(523.0, 120, AMP));
    sink.append(gentle_tone(659.0, 120, AMP));
    sink.append(gentle_tone(784.0, 180, AMP));

    sink.sleep_until_end();
    Ok(())
}

#[async_trait]
impl MediaCapture for CpalCapture {
    async fn acquire_device(&self) -> Result<DeviceHandle, DeviceAccessError> {
        let available = tokio::task::spawn_blocking(Self::default_input_exists)
            .await
            .map_err(|e| DeviceAccessError::OpenFailed(format!("Task join error: {}", e)))?;

        if !available {
            return Err(DeviceAccessError::NoDevice);
        }

        Ok(DeviceHandle::new(
            self.next_handle.fetch_add(1, Ordering::SeqCst),
        ))
    }

    async fn play_clip(&self, audio: &AudioRef) -> Result<(), PlaybackError> {
        let locator = audio.as_str();
        tokio::task::spawn_blocking(move || play_cue_sync(locator))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }

    async fn begin_recording(&self, _device: &DeviceHandle) -> Result<(), RecordingError> {
        if self.is_recording.load(Ordering::SeqCst) {
            return Err(RecordingError::StartFailed(
                "Recording already in progress".to_string(),
            ));
        }

        {
            let mut buffer = self.audio_buffer.lock().unwrap();
            buffer.clear();
        }

        self.is_recording.store(true, Ordering::SeqCst);

        let audio_buffer = Arc::clone(&self.audio_buffer);
        let device_sample_rate = Arc::clone(&self.device_sample_rate);
        let is_recording = Arc::clone(&self.is_recording);

        // The stream must stay on one thread; the flag stops the loop.
        std::thread::spawn(move || {
            let Some(device) = cpal::default_host().default_input_device() else {
                is_recording.store(false, Ordering::SeqCst);
                return;
            };

            let config = match device.default_input_config() {
                Ok(c) => c,
                Err(_) => {
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let sample_format = config.sample_format();
            let stream_config: cpal::StreamConfig = config.into();
            let sample_rate = stream_config.sample_rate.0;
            let channels = stream_config.channels;
            device_sample_rate.store(sample_rate, Ordering::SeqCst);

            let buffer_clone = Arc::clone(&audio_buffer);
            let recording_clone = Arc::clone(&is_recording);

            let stream_result = match sample_format {
                cpal::SampleFormat::I16 => device.build_input_stream(
                    &stream_config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        if recording_clone.load(Ordering::SeqCst) {
                            let mono = CpalCapture::mixdown(data, channels);
                            if let Ok(mut buffer) = buffer_clone.lock() {
                                buffer.extend_from_slice(&mono);
                            }
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                ),

                cpal::SampleFormat::F32 => {
                    let buffer_clone = Arc::clone(&audio_buffer);
                    let recording_clone = Arc::clone(&is_recording);

                    device.build_input_stream(
                        &stream_config,
                        move |data: &[f32], _: &cpal::InputCallbackInfo| {
                            if recording_clone.load(Ordering::SeqCst) {
                                let i16_data: Vec<i16> =
                                    data.iter().map(|&s| (s * 32767.0) as i16).collect();
                                let mono = CpalCapture::mixdown(&i16_data, channels);
                                if let Ok(mut buffer) = buffer_clone.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        |err| eprintln!("Audio stream error: {}", err),
                        None,
                    )
                }

                _ => {
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let stream = match stream_result {
                Ok(s) => s,
                Err(_) => {
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            if stream.play().is_err() {
                is_recording.store(false, Ordering::SeqCst);
                return;
            }

            while is_recording.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(100));
            }

            drop(stream);
        });

        // Give the capture thread a moment to start
        sleep(Duration::from_millis(50)).await;

        if !self.is_recording.load(Ordering::SeqCst) {
            return Err(RecordingError::StartFailed(
                "Failed to start capture stream".to_string(),
            ));
        }

        Ok(())
    }

    async fn end_recording(&self) -> Result<AudioClip, RecordingError> {
        if !self.is_recording.load(Ordering::SeqCst) {
            return Err(RecordingError::NotRecording);
        }

        self.is_recording.store(false, Ordering::SeqCst);

        // Let the capture thread drain and drop its stream
        sleep(Duration::from_millis(100)).await;

        let samples = {
            let mut buffer = self.audio_buffer.lock().unwrap();
            std::mem::take(&mut *buffer)
        };

        if samples.is_empty() {
            return Err(RecordingError::EmptyCapture);
        }

        let sample_rate = self.device_sample_rate.load(Ordering::SeqCst);
        if sample_rate == 0 {
            return Err(RecordingError::RecordingFailed(
                "Sample rate not set".to_string(),
            ));
        }

        Ok(AudioClip::new(samples, sample_rate))
    }

    async fn release_device(&self, _device: DeviceHandle) {
        self.is_recording.store(false, Ordering::SeqCst);
        let mut buffer = self.audio_buffer.lock().unwrap();
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixdown_single_channel() {
        let mono = vec![100i16, 200, 300];
        assert_eq!(CpalCapture::mixdown(&mono, 1), mono);
    }

    #[test]
    fn mixdown_two_channels_averages_pairs() {
        let stereo = vec![100i16, 200, 300, 400];
        assert_eq!(CpalCapture::mixdown(&stereo, 2), vec![150, 350]);
    }

    #[tokio::test]
    async fn end_recording_without_begin_fails() {
        let capture = CpalCapture::new();
        let err = capture.end_recording().await.unwrap_err();
        assert!(matches!(err, RecordingError::NotRecording));
    }

    #[tokio::test]
    #[ignore = "requires audio hardware"]
    async fn acquire_and_release() {
        let capture = CpalCapture::new();
        let handle = capture.acquire_device().await.unwrap();
        capture.release_device(handle).await;
    }
}
