/// Numeric knobs of the pipeline, built once at process start and shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct AssessmentRules {
    /// O-1A requires meeting at least 3 of the 8 criteria.
    pub minimum_criteria_met: usize,
    pub threshold_high: f64,
    pub threshold_medium: f64,
    pub threshold_low: f64,
    /// Confidence multiplier for evidence from a-priori relevant sections.
    pub relevance_boost: f64,
    /// Evidence at or below this confidence is discarded.
    pub confidence_floor: f64,
    /// Maximum evidence items kept per criterion.
    pub evidence_cap: usize,
}

impl Default for AssessmentRules {
    fn default() -> Self {
        AssessmentRules {
            minimum_criteria_met: 3,
            threshold_high: 0.85,
            threshold_medium: 0.70,
            threshold_low: 0.60,
            relevance_boost: 1.2,
            confidence_floor: 0.6,
            evidence_cap: 5,
        }
    }
}
