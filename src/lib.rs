//! Text-fallback drug modality classification.
//!
//! Infers a modality subcategory (monoclonal antibody, vaccine, gene
//! therapy, ...) from free-text intervention descriptions. This is the
//! last resort in the modality pipeline: it runs only after the
//! structured intervention-type and MeSH tree lookups upstream have
//! failed to classify, so the patterns trade precision for recall
//! deliberately.
//!
//! The taxonomy is an ordered list of case-insensitive patterns; the
//! first match wins, and position in the list is the priority contract.
//! When nothing matches, the caller's coarse `base_modality` passes
//! through, unless it is the uninformative `other_drug` sentinel.
//!
//! # Example
//!
//! ```rust
//! use modality_fallback::classify_submodality;
//!
//! let label = classify_submodality(Some("mRNA vaccine candidate"), "other_drug");
//! assert_eq!(label.as_deref(), Some("vaccine"));
//!
//! // No pattern hit: the informative base modality passes through.
//! let label = classify_submodality(Some("investigational biologic"), "biologic");
//! assert_eq!(label.as_deref(), Some("biologic"));
//! ```

mod classifier;
mod policy;

pub use classifier::{classify_submodality, AssignmentSource, RuleSet, SubmodalityAssignment};
pub use policy::{default_rules, OTHER_DRUG, TEXT_PATTERN_TO_SUBMODALITY};

pub type Result<T> = std::result::Result<T, PolicyError>;

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid rule pattern `{0}`: {1}")]
    InvalidPattern(String, #[source] regex::Error),
}
