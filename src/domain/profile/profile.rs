//! Profile accumulator value object

use std::collections::BTreeMap;

use crate::domain::prompt::{DomainTag, ALL_DOMAINS};

use super::keys::{TraitKey, ValueKey, ALL_TRAITS, ALL_VALUES};

/// Maximum score for any trait or value
pub const SCORE_CEILING: u8 = 100;

/// Narrative metric counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Crude metaphor-heuristic hits
    pub metaphor_count: u32,
    /// Contrastive-conjunction hits
    pub contradiction_count: u32,
    /// Accumulated response-length depth units
    pub depth_score: u32,
}

/// Accumulated trait/value/metric state derived from all answered prompts.
///
/// The analysis engine never mutates a profile in place: `fold` takes a
/// profile by reference and returns a new value, so callers are free to keep
/// old profiles around for history. Scores only ever increase, clamped at
/// [`SCORE_CEILING`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Big Five scores in [0, 100]
    pub trait_scores: BTreeMap<TraitKey, u8>,
    /// Schwartz value scores in [0, 100]
    pub value_scores: BTreeMap<ValueKey, u8>,
    /// Responses seen per prompt domain
    pub domain_coverage: BTreeMap<DomainTag, u32>,
    /// Narrative metric counters
    pub metrics: Metrics,
    /// One entry per answered prompt, in answer order, prefixed with the
    /// domain label: `"[Valores] <response>"`
    pub fragments: Vec<String>,
}

impl Profile {
    /// Create an empty profile: every known key present and zeroed,
    /// no fragments.
    pub fn empty() -> Self {
        Self {
            trait_scores: ALL_TRAITS.iter().map(|k| (*k, 0)).collect(),
            value_scores: ALL_VALUES.iter().map(|k| (*k, 0)).collect(),
            domain_coverage: ALL_DOMAINS.iter().map(|d| (*d, 0)).collect(),
            metrics: Metrics::default(),
            fragments: Vec::new(),
        }
    }

    /// Total number of answered prompts
    pub fn responses(&self) -> u32 {
        self.domain_coverage.values().sum()
    }

    /// Score for a trait, treating an absent key as 0
    pub fn trait_score(&self, key: TraitKey) -> u8 {
        self.trait_scores.get(&key).copied().unwrap_or(0)
    }

    /// Score for a value, treating an absent key as 0
    pub fn value_score(&self, key: ValueKey) -> u8 {
        self.value_scores.get(&key).copied().unwrap_or(0)
    }

    /// Highest-scoring trait; ties go to the first key in enumeration
    /// order. `None` only when the score map is completely empty.
    pub fn dominant_trait(&self) -> Option<(TraitKey, u8)> {
        let mut best: Option<(TraitKey, u8)> = None;
        for (key, score) in &self.trait_scores {
            match best {
                Some((_, s)) if *score <= s => {}
                _ => best = Some((*key, *score)),
            }
        }
        best
    }

    /// Highest-scoring value, same tie-break policy as [`dominant_trait`].
    ///
    /// [`dominant_trait`]: Profile::dominant_trait
    pub fn dominant_value(&self) -> Option<(ValueKey, u8)> {
        let mut best: Option<(ValueKey, u8)> = None;
        for (key, score) in &self.value_scores {
            match best {
                Some((_, s)) if *score <= s => {}
                _ => best = Some((*key, *score)),
            }
        }
        best
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty()
    }
}
