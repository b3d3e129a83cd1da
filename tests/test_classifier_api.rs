//! Black-box tests over the public classification API.

use modality_fallback::{
    classify_submodality, default_rules, AssignmentSource, OTHER_DRUG,
};

#[test]
fn test_registry_style_descriptions() {
    let cases: &[(&str, &str, Option<&str>)] = &[
        (
            "Fully human monoclonal antibody against X",
            "biologic",
            Some("monoclonal_antibody"),
        ),
        (
            "Fusion protein IL-2 receptor blocker",
            "biologic",
            Some("fusion_protein"),
        ),
        (
            "Novel oligonucleotide antisense agent",
            "drug",
            Some("oligonucleotide"),
        ),
        ("COVID vaccine candidate", "drug", Some("vaccine")),
        (
            "Small molecule inhibitor of kinase",
            "drug",
            Some("small_molecule"),
        ),
        ("Gene therapy editing vector", "genetic", Some("gene_therapy")),
        // No match: the base modality propagates.
        ("Unmatched text", "biologic", Some("biologic")),
        ("", "small_molecule", None),
    ];

    for (text, base, expected) in cases {
        assert_eq!(
            classify_submodality(Some(text), base).as_deref(),
            *expected,
            "text: {text:?}, base: {base:?}"
        );
    }
}

#[test]
fn test_sentinel_base_never_propagates() {
    assert_eq!(classify_submodality(Some("Unmatched text"), OTHER_DRUG), None);
}

#[test]
fn test_assignment_serialises_for_audit() {
    let a = default_rules()
        .classify(Some("mRNA vaccine candidate"), OTHER_DRUG)
        .unwrap();
    assert_eq!(a.source, AssignmentSource::TextPattern);
    assert_eq!(a.source.as_str(), "text_pattern");

    let row = serde_json::to_value(&a).unwrap();
    assert_eq!(row["label"], "vaccine");
    assert_eq!(row["source"], "text_pattern");
    assert_eq!(row["pattern"], r"\bvaccin(e|es)\b");
}
