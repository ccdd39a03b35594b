//! The assessment pipeline: segment → detect → match → aggregate.
//!
//! Each request owns its working set end to end; the only shared state is
//! the read-only rule tables and the capability objects.

pub mod aggregator;
pub mod detector;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod rules;
pub mod segmenter;

use crate::errors::AppError;
use crate::models::Assessment;
use crate::nlp::NlpEngine;
use crate::pipeline::rules::AssessmentRules;

/// Runs the full pipeline over already-decoded plain text.
pub async fn assess_text(
    raw_text: &str,
    nlp: &NlpEngine,
    rules: &AssessmentRules,
) -> Result<Assessment, AppError> {
    let sections = segmenter::segment(raw_text);
    tracing::debug!(sections = sections.len(), "segmented CV");

    let analysis = detector::analyze(&sections, nlp).await?;
    let ranked = matcher::match_criteria(&analysis, rules);
    Ok(aggregator::generate_assessment(ranked, rules))
}
