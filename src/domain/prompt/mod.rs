//! Prompt catalog domain module

mod catalog;
mod domain_tag;

pub use catalog::{prompt_at, prompt_count, AudioRef, Prompt, PROMPTS};
pub use domain_tag::{DomainTag, ALL_DOMAINS};
