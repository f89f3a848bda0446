//! Psychological domain value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidDomainError;

/// All prompt domains, in canonical enumeration order
pub const ALL_DOMAINS: &[DomainTag] = &[
    DomainTag::Autenticidade,
    DomainTag::Valores,
    DomainTag::Motivacao,
    DomainTag::Relacionamentos,
    DomainTag::ConflitosInternos,
];

/// Domain tags for the prompt catalog.
///
/// Declaration order is the canonical enumeration order; coverage maps and
/// reports iterate domains in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DomainTag {
    Autenticidade,
    Valores,
    Motivacao,
    Relacionamentos,
    ConflitosInternos,
}

impl DomainTag {
    /// Get the human-readable label for this domain
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Autenticidade => "Autenticidade",
            Self::Valores => "Valores",
            Self::Motivacao => "Motivação",
            Self::Relacionamentos => "Relacionamentos",
            Self::ConflitosInternos => "Conflitos Internos",
        }
    }

    /// Get the string identifier for this domain
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Autenticidade => "autenticidade",
            Self::Valores => "valores",
            Self::Motivacao => "motivacao",
            Self::Relacionamentos => "relacionamentos",
            Self::ConflitosInternos => "conflitos_internos",
        }
    }
}

impl FromStr for DomainTag {
    type Err = InvalidDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "autenticidade" => Ok(Self::Autenticidade),
            "valores" => Ok(Self::Valores),
            "motivacao" => Ok(Self::Motivacao),
            "relacionamentos" => Ok(Self::Relacionamentos),
            "conflitos_internos" => Ok(Self::ConflitosInternos),
            _ => Err(InvalidDomainError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_domains() {
        assert_eq!(
            "autenticidade".parse::<DomainTag>().unwrap(),
            DomainTag::Autenticidade
        );
        assert_eq!("valores".parse::<DomainTag>().unwrap(), DomainTag::Valores);
        assert_eq!(
            "conflitos_internos".parse::<DomainTag>().unwrap(),
            DomainTag::ConflitosInternos
        );
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("VALORES".parse::<DomainTag>().unwrap(), DomainTag::Valores);
        assert_eq!(
            "  Motivacao ".parse::<DomainTag>().unwrap(),
            DomainTag::Motivacao
        );
    }

    #[test]
    fn parse_invalid() {
        assert!("invalid".parse::<DomainTag>().is_err());
        assert!("".parse::<DomainTag>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(DomainTag::Motivacao.to_string(), "Motivação");
        assert_eq!(
            DomainTag::ConflitosInternos.to_string(),
            "Conflitos Internos"
        );
    }

    #[test]
    fn all_domains_constant() {
        assert_eq!(ALL_DOMAINS.len(), 5);
    }

    #[test]
    fn enumeration_order_matches_ord() {
        let mut sorted = ALL_DOMAINS.to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), ALL_DOMAINS);
    }
}
