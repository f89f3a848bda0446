//! Media capture adapters

mod cpal_capture;
mod noop;

pub use cpal_capture::CpalCapture;
pub use noop::NoopCapture;
