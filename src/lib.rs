//! DNA - Deep Narrative Analysis session engine
//!
//! This crate drives a voice-guided psychological profiling session: it
//! plays a fixed catalog of prompts, records the spoken responses,
//! transcribes them, and folds each transcript into a deterministic
//! narrative profile that is rendered as a final text report.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Prompt catalog, profile model, fold and synthesis logic,
//!   and the session state machine
//! - **Application**: The session controller use case and port interfaces
//!   (traits)
//! - **Infrastructure**: Adapter implementations (cpal capture, template
//!   transcription, file export, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and the
//!   interactive session runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
