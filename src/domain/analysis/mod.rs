//! Analysis engine: pure fold + report synthesis

mod fold;
mod synthesis;

pub use fold::fold;
pub use synthesis::{render_report, synthesize};
