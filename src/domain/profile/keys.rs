//! Fixed key sets for the trait and value score maps

use std::fmt;

/// Big Five trait keys, in canonical enumeration order.
/// Declaration order doubles as the dominant-trait tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitKey {
    Abertura,
    Conscienciosidade,
    Extroversao,
    Amabilidade,
    Neuroticismo,
}

/// All trait keys, in enumeration order
pub const ALL_TRAITS: &[TraitKey] = &[
    TraitKey::Abertura,
    TraitKey::Conscienciosidade,
    TraitKey::Extroversao,
    TraitKey::Amabilidade,
    TraitKey::Neuroticismo,
];

impl TraitKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abertura => "abertura",
            Self::Conscienciosidade => "conscienciosidade",
            Self::Extroversao => "extroversão",
            Self::Amabilidade => "amabilidade",
            Self::Neuroticismo => "neuroticismo",
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schwartz value keys, in canonical enumeration order.
/// Declaration order doubles as the dominant-value tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKey {
    Universalismo,
    Benevolencia,
    Tradicao,
    Conformidade,
    Seguranca,
    Poder,
    Realizacao,
    Hedonismo,
    Estimulacao,
    Autodeterminacao,
}

/// All value keys, in enumeration order
pub const ALL_VALUES: &[ValueKey] = &[
    ValueKey::Universalismo,
    ValueKey::Benevolencia,
    ValueKey::Tradicao,
    ValueKey::Conformidade,
    ValueKey::Seguranca,
    ValueKey::Poder,
    ValueKey::Realizacao,
    ValueKey::Hedonismo,
    ValueKey::Estimulacao,
    ValueKey::Autodeterminacao,
];

impl ValueKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Universalismo => "universalismo",
            Self::Benevolencia => "benevolência",
            Self::Tradicao => "tradição",
            Self::Conformidade => "conformidade",
            Self::Seguranca => "segurança",
            Self::Poder => "poder",
            Self::Realizacao => "realização",
            Self::Hedonismo => "hedonismo",
            Self::Estimulacao => "estimulação",
            Self::Autodeterminacao => "autodeterminação",
        }
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
