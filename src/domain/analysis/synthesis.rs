//! Final report synthesis

use chrono::{Local, NaiveDate};

use crate::domain::profile::{Profile, TraitKey};

/// Render the final report for today's date.
pub fn synthesize(profile: &Profile) -> String {
    render_report(profile, Local::now().date_naive())
}

/// Render the final report for an explicit date. Deterministic given the
/// profile and the date; never fails, even on a profile with zero
/// fragments (empty categories render as `N/A`).
pub fn render_report(profile: &Profile, date: NaiveDate) -> String {
    let (trait_name, trait_score) = profile
        .dominant_trait()
        .map(|(k, s)| (k.as_str(), s))
        .unwrap_or(("N/A", 0));
    let (value_name, value_score) = profile
        .dominant_value()
        .map(|(k, s)| (k.as_str(), s))
        .unwrap_or(("N/A", 0));

    format!(
        "\
=== RELATÓRIO DNA - DEEP NARRATIVE ANALYSIS ===
Data: {date}

RESUMO EXECUTIVO:
Análise completa baseada em {fragments} narrativas pessoais.

PERFIL DE PERSONALIDADE (Big Five):
- Traço Dominante: {trait_name} (Score: {trait_score})
- Abertura: {abertura}/100 | Conscienciosidade: {conscienciosidade}/100
- Extroversão: {extroversao}/100 | Amabilidade: {amabilidade}/100
- Neuroticismo: {neuroticismo}/100

SISTEMA DE VALORES (Schwartz):
- Valor Principal: {value_name} (Score: {value_score})

MÉTRICAS NARRATIVAS:
- Metáforas Detectadas: {metaphors} | Padrões Complexos: {contradictions} | Profundidade Narrativa: {depth}

INSIGHTS PRINCIPAIS:
Sua narrativa revela um perfil com predominância em {trait_name}. O valor \
predominante de {value_name} sugere motivações profundas que orientam suas \
decisões.

RECOMENDAÇÕES:
1. Desenvolver ainda mais as características de {trait_name}.
2. Explorar oportunidades alinhadas com {value_name}.
3. Considerar coaching para maximizar potencial identificado.

=== FIM DO RELATÓRIO ===",
        date = date.format("%d/%m/%Y"),
        fragments = profile.fragments.len(),
        abertura = profile.trait_score(TraitKey::Abertura),
        conscienciosidade = profile.trait_score(TraitKey::Conscienciosidade),
        extroversao = profile.trait_score(TraitKey::Extroversao),
        amabilidade = profile.trait_score(TraitKey::Amabilidade),
        neuroticismo = profile.trait_score(TraitKey::Neuroticismo),
        metaphors = profile.metrics.metaphor_count,
        contradictions = profile.metrics.contradiction_count,
        depth = profile.metrics.depth_score,
    )
}
