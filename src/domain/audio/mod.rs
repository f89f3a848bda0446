//! Captured audio domain module

mod clip;

pub use clip::AudioClip;
