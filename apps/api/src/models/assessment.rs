use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::criterion::Criterion;

/// Qualification tier. Derived `Ord` gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationLevel {
    Low,
    Medium,
    High,
}

/// A sentence extracted from the CV, asserting relevance to one criterion.
///
/// `confidence` may exceed 1.0 after the section-relevance boost; the matcher
/// intentionally does not re-clamp it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub text: String,
    pub confidence: f64,
    pub source_section: Option<String>,
}

/// Verdict for a single criterion: ranked evidence plus generated description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionAssessment {
    pub criterion: Criterion,
    pub evidence: Vec<Evidence>,
    pub description: String,
    pub strength: QualificationLevel,
}

/// Complete assessment returned to the client.
///
/// Only criteria with at least one piece of surviving evidence appear in
/// `criteria_assessments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub criteria_assessments: BTreeMap<Criterion, CriterionAssessment>,
    pub overall_rating: QualificationLevel,
    pub summary: String,
    pub recommendation: String,
}
