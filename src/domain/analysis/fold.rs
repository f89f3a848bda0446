//! Fold operation: merge one transcribed response into a profile

use crate::domain::profile::{Profile, TraitKey, ValueKey, SCORE_CEILING};
use crate::domain::prompt::Prompt;

/// Score step applied when a trait keyword set matches
const TRAIT_STEP: u8 = 10;

/// Score step applied when a value keyword set matches
const VALUE_STEP: u8 = 8;

/// Keyword sets per Big Five trait. A single exact token match anywhere in
/// the response bumps the trait once.
const TRAIT_KEYWORDS: &[(TraitKey, &[&str])] = &[
    (TraitKey::Abertura, &["criativo", "inovador", "original"]),
    (
        TraitKey::Conscienciosidade,
        &["responsável", "organizado", "disciplinado"],
    ),
    (TraitKey::Extroversao, &["social", "grupos", "pessoas"]),
    (TraitKey::Amabilidade, &["ajudar", "cuidar", "gentil"]),
    (
        TraitKey::Neuroticismo,
        &["ansioso", "preocupado", "estressado"],
    ),
];

/// Keyword sets for the four scored Schwartz values. The remaining values
/// stay at zero; only the report's full dump mentions them.
const VALUE_KEYWORDS: &[(ValueKey, &[&str])] = &[
    (ValueKey::Universalismo, &["justiça", "igualdade", "mundo"]),
    (ValueKey::Benevolencia, &["família", "amigos", "ajudar"]),
    (ValueKey::Realizacao, &["sucesso", "conquista", "objetivo"]),
    (
        ValueKey::Autodeterminacao,
        &["liberdade", "independência", "autonomia"],
    ),
];

/// Contrastive conjunctions counted as contradiction markers
const CONTRASTIVE_CONJUNCTIONS: &[&str] = &["mas", "porém", "entretanto"];

/// Characters of response text per depth unit
const DEPTH_UNIT_CHARS: usize = 100;

fn bump(score: u8, step: u8) -> u8 {
    score.saturating_add(step).min(SCORE_CEILING)
}

/// Fold one response into a profile, returning the updated profile.
///
/// Pure over its inputs: the given profile is untouched and identical
/// inputs always produce identical outputs. Total for any response string,
/// including empty ones; an absent score key is treated as 0 before the
/// increment.
pub fn fold(response: &str, profile: &Profile, prompt: &Prompt) -> Profile {
    let mut next = profile.clone();

    let lowered = response.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    for (key, words) in TRAIT_KEYWORDS {
        if tokens.iter().any(|t| words.contains(t)) {
            let entry = next.trait_scores.entry(*key).or_insert(0);
            *entry = bump(*entry, TRAIT_STEP);
        }
    }

    for (key, words) in VALUE_KEYWORDS {
        if tokens.iter().any(|t| words.contains(t)) {
            let entry = next.value_scores.entry(*key).or_insert(0);
            *entry = bump(*entry, VALUE_STEP);
        }
    }

    *next.domain_coverage.entry(prompt.domain()).or_insert(0) += 1;

    // Crude metaphor heuristic over the raw text, not the token stream
    if response.contains("como") && (response.contains("igual") || response.contains("parece")) {
        next.metrics.metaphor_count += 1;
    }

    if tokens
        .iter()
        .any(|t| CONTRASTIVE_CONJUNCTIONS.contains(t))
    {
        next.metrics.contradiction_count += 1;
    }

    next.metrics.depth_score += (response.chars().count() / DEPTH_UNIT_CHARS) as u32;

    next.fragments
        .push(format!("[{}] {}", prompt.domain().label(), response));

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::{prompt_at, DomainTag, PROMPTS};

    fn prompt_for(domain: DomainTag) -> &'static Prompt {
        PROMPTS.iter().find(|p| p.domain() == domain).unwrap()
    }

    #[test]
    fn input_profile_is_left_unmodified() {
        let before = Profile::empty();
        let snapshot = before.clone();
        let _ = fold("sou muito criativo", &before, prompt_at(0).unwrap());
        assert_eq!(before, snapshot);
    }

    #[test]
    fn fold_is_deterministic() {
        let profile = Profile::empty();
        let prompt = prompt_at(1).unwrap();
        let a = fold("família e amigos, mas sucesso", &profile, prompt);
        let b = fold("família e amigos, mas sucesso", &profile, prompt);
        assert_eq!(a, b);
    }

    #[test]
    fn trait_match_increments_by_step_once() {
        // Two matching tokens in the same set still bump only once
        let profile = Profile::empty();
        let next = fold(
            "sou muito responsável e organizado",
            &profile,
            prompt_at(0).unwrap(),
        );
        assert_eq!(next.trait_score(TraitKey::Conscienciosidade), 10);
    }

    #[test]
    fn multiple_categories_bump_in_one_call() {
        let profile = Profile::empty();
        let next = fold(
            "gosto de ajudar pessoas com justiça",
            &profile,
            prompt_at(0).unwrap(),
        );
        assert_eq!(next.trait_score(TraitKey::Amabilidade), 10);
        assert_eq!(next.trait_score(TraitKey::Extroversao), 10);
        assert_eq!(next.value_score(ValueKey::Universalismo), 8);
        assert_eq!(next.value_score(ValueKey::Benevolencia), 8);
    }

    #[test]
    fn scores_clamp_at_ceiling() {
        let mut profile = Profile::empty();
        profile.trait_scores.insert(TraitKey::Abertura, 95);
        profile.value_scores.insert(ValueKey::Realizacao, 99);
        let next = fold("criativo sucesso", &profile, prompt_at(0).unwrap());
        assert_eq!(next.trait_score(TraitKey::Abertura), 100);
        assert_eq!(next.value_score(ValueKey::Realizacao), 100);
    }

    #[test]
    fn scores_are_monotone() {
        let profile = Profile::empty();
        let next = fold(
            "criativo ajudar família liberdade",
            &profile,
            prompt_at(2).unwrap(),
        );
        for key in crate::domain::profile::ALL_TRAITS {
            assert!(next.trait_score(*key) >= profile.trait_score(*key));
        }
        for key in crate::domain::profile::ALL_VALUES {
            assert!(next.value_score(*key) >= profile.value_score(*key));
        }
    }

    #[test]
    fn coverage_increments_only_prompt_domain() {
        let profile = Profile::empty();
        let prompt = prompt_for(DomainTag::Motivacao);
        let next = fold("qualquer coisa", &profile, prompt);
        for (domain, count) in &next.domain_coverage {
            let expected = u32::from(*domain == DomainTag::Motivacao);
            assert_eq!(*count, expected);
        }
    }

    #[test]
    fn fragment_appended_with_domain_label() {
        let profile = Profile::empty();
        let prompt = prompt_for(DomainTag::ConflitosInternos);
        let next = fold("minha resposta", &profile, prompt);
        assert_eq!(next.fragments.len(), 1);
        assert_eq!(
            next.fragments.last().unwrap(),
            "[Conflitos Internos] minha resposta"
        );
    }

    #[test]
    fn empty_response_only_touches_coverage_and_fragments() {
        let profile = Profile::empty();
        let next = fold("", &profile, prompt_at(0).unwrap());
        assert_eq!(next.trait_scores, profile.trait_scores);
        assert_eq!(next.value_scores, profile.value_scores);
        assert_eq!(next.metrics, profile.metrics);
        assert_eq!(next.responses(), 1);
        assert_eq!(next.fragments, vec!["[Autenticidade] ".to_string()]);
    }

    #[test]
    fn depth_score_is_floor_of_length_over_hundred() {
        let profile = Profile::empty();
        let response = "a".repeat(250);
        let next = fold(&response, &profile, prompt_at(0).unwrap());
        assert_eq!(next.metrics.depth_score, 2);

        let short = fold("curto", &profile, prompt_at(0).unwrap());
        assert_eq!(short.metrics.depth_score, 0);
    }

    #[test]
    fn metaphor_heuristic_positive() {
        let profile = Profile::empty();
        let next = fold(
            "isso é como um espelho, parece real",
            &profile,
            prompt_at(0).unwrap(),
        );
        assert_eq!(next.metrics.metaphor_count, 1);
    }

    #[test]
    fn metaphor_heuristic_needs_both_halves() {
        let profile = Profile::empty();
        let next = fold("como vai você", &profile, prompt_at(0).unwrap());
        assert_eq!(next.metrics.metaphor_count, 0);
    }

    #[test]
    fn contrastive_conjunction_counts_contradiction() {
        let profile = Profile::empty();
        let next = fold("quero, mas não posso", &profile, prompt_at(0).unwrap());
        assert_eq!(next.metrics.contradiction_count, 1);
    }

    #[test]
    fn punctuation_attached_tokens_do_not_match() {
        // Exact token matching: "criativo," is not "criativo"
        let profile = Profile::empty();
        let next = fold("criativo, sempre", &profile, prompt_at(0).unwrap());
        assert_eq!(next.trait_score(TraitKey::Abertura), 0);
    }

    #[test]
    fn defensive_on_missing_keys() {
        use std::collections::BTreeMap;
        let bare = Profile {
            trait_scores: BTreeMap::new(),
            value_scores: BTreeMap::new(),
            domain_coverage: BTreeMap::new(),
            metrics: Default::default(),
            fragments: Vec::new(),
        };
        let next = fold("criativo sucesso", &bare, prompt_at(0).unwrap());
        assert_eq!(next.trait_score(TraitKey::Abertura), 10);
        assert_eq!(next.value_score(ValueKey::Realizacao), 8);
        assert_eq!(next.responses(), 1);
    }
}
