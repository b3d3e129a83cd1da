//! Ordered first-match-wins rule evaluation.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::policy::{default_rules, OTHER_DRUG};
use crate::{PolicyError, Result};

/// Where a submodality assignment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    /// A pattern in the rule table matched the text.
    TextPattern,
    /// No pattern matched; the caller's base modality passed through.
    BaseModality,
}

impl AssignmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentSource::TextPattern => "text_pattern",
            AssignmentSource::BaseModality => "base_modality",
        }
    }
}

/// A resolved submodality, with the evidence behind the decision.
///
/// Captures *what* was assigned and *why*, without performing any
/// logging or side effects; audit writers downstream serialise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmodalityAssignment {
    /// Assigned label, e.g. "monoclonal_antibody".
    pub label: String,
    /// Where the decision came from.
    pub source: AssignmentSource,
    /// The matching pattern, when `source` is [`AssignmentSource::TextPattern`].
    pub pattern: Option<String>,
}

#[derive(Debug, Clone)]
struct TextRule {
    regex: Regex,
    label: String,
}

/// Ordered, immutable set of (pattern, label) rules.
///
/// Kept as a sequence, never a map: position is the priority contract,
/// and evaluation short-circuits on the first match.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<TextRule>,
}

impl RuleSet {
    /// Compile an ordered `(pattern, label)` table.
    ///
    /// Patterns are compiled case-insensitively and match anywhere in
    /// the input. Order is preserved as given.
    pub fn from_patterns(patterns: &[(&str, &str)]) -> Result<Self> {
        let mut rules = Vec::with_capacity(patterns.len());
        for (pattern, label) in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| PolicyError::InvalidPattern((*pattern).to_string(), e))?;
            rules.push(TextRule {
                regex,
                label: (*label).to_string(),
            });
        }
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a submodality for `text`, falling back to `base_modality`.
    ///
    /// - Absent or empty text yields `None`: uninformative input never
    ///   falls through to the base modality.
    /// - Otherwise the table is scanned in order and the first matching
    ///   rule's label wins.
    /// - If nothing matches and `base_modality` is non-empty and not the
    ///   [`OTHER_DRUG`] sentinel, it passes through verbatim.
    ///
    /// Pure and total: every input shape produces a defined outcome, and
    /// `None` means "insufficient information", not an error.
    pub fn classify(
        &self,
        text: Option<&str>,
        base_modality: &str,
    ) -> Option<SubmodalityAssignment> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => {
                trace!("empty text, no submodality assigned");
                return None;
            }
        };

        for rule in &self.rules {
            if rule.regex.is_match(text) {
                debug!(
                    "text pattern `{}` matched -> {}",
                    rule.regex.as_str(),
                    rule.label
                );
                return Some(SubmodalityAssignment {
                    label: rule.label.clone(),
                    source: AssignmentSource::TextPattern,
                    pattern: Some(rule.regex.as_str().to_string()),
                });
            }
        }

        if !base_modality.is_empty() && base_modality != OTHER_DRUG {
            debug!("no pattern matched, base modality `{base_modality}` passes through");
            return Some(SubmodalityAssignment {
                label: base_modality.to_string(),
                source: AssignmentSource::BaseModality,
                pattern: None,
            });
        }

        trace!("no pattern matched and base modality is uninformative");
        None
    }
}

/// Classify against the shared default rule table, returning just the
/// label.
///
/// Use [`RuleSet::classify`] on [`default_rules`] directly when the
/// assignment source is needed for audit.
pub fn classify_submodality(text: Option<&str>, base_modality: &str) -> Option<String> {
    default_rules()
        .classify(text, base_modality)
        .map(|a| a.label)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
