//! Captured audio clip value object

/// Value object holding one captured response: mono 16-bit PCM samples at
/// the device sample rate. Transcription consumes it directly; clips are
/// never persisted, so no container encoding is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioClip {
    /// Create a clip from mono PCM samples
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The raw mono samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Device sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// True when no samples were captured
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the sample data in bytes
    pub fn size_bytes(&self) -> usize {
        self.samples.len() * std::mem::size_of::<i16>()
    }

    /// Clip length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Human-readable size, for status lines
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
