//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod analysis;
pub mod audio;
pub mod config;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod session;

// Re-export common types
pub use audio::AudioClip;
pub use config::AppConfig;
pub use error::*;
pub use profile::{Metrics, Profile, TraitKey, ValueKey};
pub use prompt::{DomainTag, Prompt, PROMPTS};
pub use session::{InvalidStateTransition, Session, SessionPhase};
