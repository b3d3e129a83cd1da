//! Fallback taxonomy: ordered text pattern → submodality rules.
//!
//! These patterns are intentionally heuristic. They only ever see text
//! that the structured classifiers upstream could not resolve, so the
//! vocabulary stays small and conservative. Extend deliberately, with
//! tests, and mind the ordering: earlier rules beat later ones on text
//! that mentions several modality cues.

use std::sync::OnceLock;

use crate::classifier::RuleSet;

/// Sentinel base modality meaning "uninformative base category".
/// Never propagated as a final answer.
pub const OTHER_DRUG: &str = "other_drug";

/// Ordered (pattern, submodality) table. Position encodes priority.
///
/// All patterns are compiled case-insensitively and match anywhere in
/// the input text.
pub const TEXT_PATTERN_TO_SUBMODALITY: &[(&str, &str)] = &[
    // Antibodies
    (r"\bmonoclonal\b", "monoclonal_antibody"),
    (r"\bmab\b", "monoclonal_antibody"),
    // Fusion proteins. The gap rule is loose on purpose: "fusion" and
    // "protein" far apart in a long description still count.
    (r"\bfusion protein\b", "fusion_protein"),
    (r"\bfusion\b.*\bprotein\b", "fusion_protein"),
    // Oligonucleotides. Permissive class catches truncated and compound
    // spellings seen in registry text; do not tighten.
    (r"o[n|l]ucleotide(s)?", "oligonucleotide"),
    // Vaccines
    (r"\bvaccin(e|es)\b", "vaccine"),
    // Gene therapy
    (r"\bgene therap(y|ies)\b", "gene_therapy"),
    (r"\bgene editing\b", "gene_therapy"),
    // Small-molecule hints (low specificity, keep last)
    (r"\binhibitor\b", "small_molecule"),
    (r"\bagonist\b", "small_molecule"),
    (r"\bantagonist\b", "small_molecule"),
    (r"\bmodulator\b", "small_molecule"),
    (r"\bblocker\b", "small_molecule"),
];

/// Shared rule set compiled from [`TEXT_PATTERN_TO_SUBMODALITY`].
///
/// Compiled once on first use and read-only afterwards, so concurrent
/// callers share it freely.
pub fn default_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::from_patterns(TEXT_PATTERN_TO_SUBMODALITY)
            .expect("default pattern table must compile")
    })
}
