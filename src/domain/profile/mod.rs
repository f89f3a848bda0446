//! Profile accumulator domain module

mod keys;
#[allow(clippy::module_inception)]
mod profile;

pub use keys::{TraitKey, ValueKey, ALL_TRAITS, ALL_VALUES};
pub use profile::{Metrics, Profile, SCORE_CEILING};
