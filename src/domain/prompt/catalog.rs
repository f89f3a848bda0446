//! Prompt catalog - the fixed interview sequence

use super::domain_tag::DomainTag;

/// Opaque locator for a prompt's audio cue.
/// Interpreted by the media capture adapter, never by the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioRef(&'static str);

impl AudioRef {
    pub const fn new(locator: &'static str) -> Self {
        Self(locator)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One fixed interview prompt, tagged with its psychological domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    id: u32,
    text: &'static str,
    domain: DomainTag,
    audio: AudioRef,
}

impl Prompt {
    const fn new(id: u32, text: &'static str, domain: DomainTag, audio: AudioRef) -> Self {
        Self {
            id,
            text,
            domain,
            audio,
        }
    }

    /// Ordinal identifier, unique within the catalog
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The question presented to the user
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// The psychological domain this prompt probes
    pub const fn domain(&self) -> DomainTag {
        self.domain
    }

    /// Locator for the spoken audio cue
    pub const fn audio(&self) -> AudioRef {
        self.audio
    }
}

/// The complete interview sequence, in presentation order.
pub const PROMPTS: &[Prompt] = &[
    Prompt::new(
        1,
        "Descreva um momento da sua vida em que você se sentiu mais autêntico \
         e verdadeiro consigo mesmo.",
        DomainTag::Autenticidade,
        AudioRef::new("cue:chime"),
    ),
    Prompt::new(
        2,
        "Conte sobre uma decisão difícil que você tomou e como ela reflete \
         seus valores fundamentais.",
        DomainTag::Valores,
        AudioRef::new("cue:chime"),
    ),
    Prompt::new(
        3,
        "Qual é sua maior motivação na vida e como ela se manifesta em suas \
         ações diárias?",
        DomainTag::Motivacao,
        AudioRef::new("cue:chime"),
    ),
    Prompt::new(
        4,
        "Descreva um relacionamento que mudou fundamentalmente sua \
         perspectiva sobre si mesmo.",
        DomainTag::Relacionamentos,
        AudioRef::new("cue:chime"),
    ),
    Prompt::new(
        5,
        "Como você lida com conflitos internos entre o que quer fazer e o \
         que sente que deve fazer?",
        DomainTag::ConflitosInternos,
        AudioRef::new("cue:chime"),
    ),
];

/// Number of prompts in a full session
pub fn prompt_count() -> usize {
    PROMPTS.len()
}

/// Look up a prompt by its 0-based position in the sequence
pub fn prompt_at(index: usize) -> Option<&'static Prompt> {
    PROMPTS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_prompts() {
        assert_eq!(prompt_count(), 5);
    }

    #[test]
    fn ids_are_unique_ordinals() {
        for (i, prompt) in PROMPTS.iter().enumerate() {
            assert_eq!(prompt.id(), i as u32 + 1);
        }
    }

    #[test]
    fn each_domain_appears_once() {
        use crate::domain::prompt::ALL_DOMAINS;
        for domain in ALL_DOMAINS {
            let count = PROMPTS.iter().filter(|p| p.domain() == *domain).count();
            assert_eq!(count, 1, "domain {} should appear once", domain);
        }
    }

    #[test]
    fn prompt_at_bounds() {
        assert!(prompt_at(0).is_some());
        assert!(prompt_at(4).is_some());
        assert!(prompt_at(5).is_none());
    }

    #[test]
    fn texts_not_empty() {
        for prompt in PROMPTS {
            assert!(!prompt.text().is_empty());
            assert!(!prompt.audio().as_str().is_empty());
        }
    }
}
