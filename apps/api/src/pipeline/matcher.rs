//! Criterion matching: section-relevance boost, confidence floor, ranking,
//! and the per-criterion evidence cap.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Criterion, Evidence};
use crate::pipeline::detector::DocumentAnalysis;
use crate::pipeline::keywords::section_relevance;
use crate::pipeline::rules::AssessmentRules;

/// Collects detector matches into ranked evidence per criterion.
///
/// Evidence from a section listed in the relevance table gets its confidence
/// multiplied by the boost factor; the result is intentionally not re-clamped
/// at 1.0, so boosted evidence can outrank anything unboosted. Evidence at or
/// below the confidence floor is dropped. Each criterion keeps at most
/// `evidence_cap` entries, sorted by confidence descending with ties kept in
/// encounter order.
pub fn match_criteria(
    analysis: &DocumentAnalysis,
    rules: &AssessmentRules,
) -> BTreeMap<Criterion, Vec<Evidence>> {
    let mut by_criterion: BTreeMap<Criterion, Vec<Evidence>> = Criterion::ALL
        .iter()
        .map(|criterion| (*criterion, Vec::new()))
        .collect();

    for (section_name, section) in &analysis.sections {
        let boosted_criteria = section_relevance(section_name);

        for (criterion, matches) in &section.matches {
            let boost = if boosted_criteria.contains(criterion) {
                rules.relevance_boost
            } else {
                1.0
            };

            for sentence_match in matches {
                let confidence = sentence_match.confidence * boost;
                if confidence > rules.confidence_floor {
                    by_criterion.entry(*criterion).or_default().push(Evidence {
                        text: sentence_match.text.clone(),
                        confidence,
                        source_section: Some(sentence_match.source_section.clone()),
                    });
                }
            }
        }
    }

    for evidence in by_criterion.values_mut() {
        // sort_by is stable: equal confidences keep encounter order
        evidence.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        evidence.truncate(rules.evidence_cap);
    }

    by_criterion
}
