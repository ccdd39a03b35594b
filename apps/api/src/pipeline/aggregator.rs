//! Assessment aggregation: per-criterion strength, overall rating, and the
//! generated summary/recommendation narrative.

use std::collections::BTreeMap;

use crate::models::{Assessment, Criterion, CriterionAssessment, Evidence, QualificationLevel};
use crate::pipeline::rules::AssessmentRules;

/// Aggregates ranked evidence into the final assessment.
///
/// Criteria with no surviving evidence are omitted from the result map
/// entirely; they are not represented as LOW placeholders and never appear
/// in the narrative.
pub fn generate_assessment(
    evidence_by_criterion: BTreeMap<Criterion, Vec<Evidence>>,
    rules: &AssessmentRules,
) -> Assessment {
    let mut criteria_assessments = BTreeMap::new();
    for (criterion, evidence) in evidence_by_criterion {
        if !evidence.is_empty() {
            criteria_assessments.insert(criterion, assess_criterion(criterion, evidence, rules));
        }
    }

    let met = criteria_assessments
        .values()
        .filter(|a| a.strength >= QualificationLevel::Medium)
        .count();
    let strongly_met = criteria_assessments
        .values()
        .filter(|a| a.strength == QualificationLevel::High)
        .count();

    // Fixed decision table, including the asymmetric 1-strong + 4-met
    // shortcut to HIGH.
    let overall_rating = if strongly_met >= 3 || (strongly_met >= 1 && met >= 4) {
        QualificationLevel::High
    } else if met >= rules.minimum_criteria_met {
        QualificationLevel::Medium
    } else {
        QualificationLevel::Low
    };

    let summary = generate_summary(&criteria_assessments, met, strongly_met, rules);
    let recommendation = generate_recommendation(overall_rating, met);

    Assessment {
        criteria_assessments,
        overall_rating,
        summary,
        recommendation,
    }
}

fn assess_criterion(
    criterion: Criterion,
    evidence: Vec<Evidence>,
    rules: &AssessmentRules,
) -> CriterionAssessment {
    let count = evidence.len();
    let mean_confidence = evidence.iter().map(|e| e.confidence).sum::<f64>() / count as f64;

    let strength = if mean_confidence >= rules.threshold_high && count >= 3 {
        QualificationLevel::High
    } else if mean_confidence >= rules.threshold_medium
        || (mean_confidence >= rules.threshold_low && count >= 2)
    {
        QualificationLevel::Medium
    } else {
        QualificationLevel::Low
    };

    CriterionAssessment {
        criterion,
        description: criterion_description(criterion, strength, count),
        evidence,
        strength,
    }
}

fn criterion_description(
    criterion: Criterion,
    strength: QualificationLevel,
    evidence_count: usize,
) -> String {
    let name = criterion.title();
    match strength {
        QualificationLevel::High => {
            format!("Strong evidence of {name}. Found {evidence_count} compelling examples.")
        }
        QualificationLevel::Medium => {
            format!("Moderate evidence of {name}. Found {evidence_count} relevant examples.")
        }
        QualificationLevel::Low if evidence_count > 0 => {
            format!("Limited evidence of {name}. Found {evidence_count} potential examples.")
        }
        // Unreachable through the pipeline (empty lists are omitted upstream)
        // but the template stays total.
        QualificationLevel::Low => {
            format!("No significant evidence of {name} found in the provided CV.")
        }
    }
}

fn generate_summary(
    criteria_assessments: &BTreeMap<Criterion, CriterionAssessment>,
    met: usize,
    strongly_met: usize,
    rules: &AssessmentRules,
) -> String {
    if met < rules.minimum_criteria_met {
        return format!(
            "Based on the analysis of the provided CV, the applicant meets only {met} of the \
             required minimum of 3 O-1A criteria. Additional evidence would be needed to \
             strengthen the application."
        );
    }

    let mut summary = format!(
        "Based on the analysis of the provided CV, the applicant meets {met} of the 8 O-1A \
         criteria, with {strongly_met} met at a high level of evidence. "
    );

    let strong: Vec<&str> = criteria_assessments
        .values()
        .filter(|a| a.strength == QualificationLevel::High)
        .map(|a| a.criterion.title())
        .collect();
    if !strong.is_empty() {
        summary.push_str(&format!(
            "The strongest evidence is in the areas of {}. ",
            strong.join(", ")
        ));
    }

    // Only criteria actually present (with evidence) can be listed as weak;
    // criteria with zero evidence are absent from the map by construction.
    let weak: Vec<&str> = criteria_assessments
        .values()
        .filter(|a| a.strength == QualificationLevel::Low)
        .map(|a| a.criterion.title())
        .collect();
    if !weak.is_empty() {
        summary.push_str(&format!(
            "Areas with limited or no evidence include {}.",
            weak.join(", ")
        ));
    }

    summary
}

fn generate_recommendation(overall_rating: QualificationLevel, met: usize) -> String {
    match overall_rating {
        QualificationLevel::High => "The applicant shows strong qualifications for an O-1A visa. \
             With compelling evidence across multiple criteria, this application has a high \
             chance of success. It is recommended to proceed with the application, focusing on \
             highlighting the strongest evidence areas."
            .to_string(),
        QualificationLevel::Medium => "The applicant meets the minimum requirements for an O-1A \
             visa. While the evidence is sufficient, strengthening the application with \
             additional documentation in key areas would improve the chances of approval. \
             Consider gathering more evidence particularly for criteria currently assessed at \
             medium strength."
            .to_string(),
        QualificationLevel::Low if met > 0 => format!(
            "The applicant currently meets only {met} of the required minimum of 3 O-1A \
             criteria. It is recommended to gather substantial additional evidence before \
             proceeding with an application. Consider focusing on achievements, recognition, \
             and contributions that align with the O-1A criteria."
        ),
        QualificationLevel::Low => "Based on the provided CV, there is insufficient evidence to \
             support an O-1A visa application at this time. The applicant should focus on \
             building a stronger profile with nationally or internationally recognized \
             achievements before considering an O-1A application."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(confidences: &[f64]) -> Vec<Evidence> {
        confidences
            .iter()
            .enumerate()
            .map(|(i, c)| Evidence {
                text: format!("evidence {i}"),
                confidence: *c,
                source_section: None,
            })
            .collect()
    }

    fn ranked(entries: Vec<(Criterion, Vec<f64>)>) -> BTreeMap<Criterion, Vec<Evidence>> {
        let mut map: BTreeMap<Criterion, Vec<Evidence>> =
            Criterion::ALL.iter().map(|c| (*c, Vec::new())).collect();
        for (criterion, confidences) in entries {
            map.insert(criterion, evidence(&confidences));
        }
        map
    }

    fn rules() -> AssessmentRules {
        AssessmentRules::default()
    }

    // ── per-criterion strength ──────────────────────────────────────────

    #[test]
    fn test_high_strength_needs_mean_and_count() {
        let assessment = assess_criterion(Criterion::Awards, evidence(&[0.9, 0.9, 0.9]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::High);
    }

    #[test]
    fn test_high_mean_with_two_items_is_only_medium() {
        let assessment = assess_criterion(Criterion::Awards, evidence(&[0.95, 0.95]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::Medium);
    }

    #[test]
    fn test_medium_by_mean_alone() {
        let assessment = assess_criterion(Criterion::Press, evidence(&[0.75]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::Medium);
    }

    #[test]
    fn test_medium_by_low_mean_with_two_items() {
        let assessment = assess_criterion(Criterion::Press, evidence(&[0.62, 0.65]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::Medium);
    }

    #[test]
    fn test_low_with_single_weak_item() {
        let assessment = assess_criterion(Criterion::Press, evidence(&[0.65]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::Low);
    }

    #[test]
    fn test_mean_above_one_allowed_after_boost() {
        let assessment =
            assess_criterion(Criterion::Awards, evidence(&[1.1, 1.05, 1.15]), &rules());
        assert_eq!(assessment.strength, QualificationLevel::High);
    }

    // ── descriptions ────────────────────────────────────────────────────

    #[test]
    fn test_description_templates() {
        assert_eq!(
            criterion_description(Criterion::Awards, QualificationLevel::High, 3),
            "Strong evidence of Awards. Found 3 compelling examples."
        );
        assert_eq!(
            criterion_description(
                Criterion::OriginalContribution,
                QualificationLevel::Medium,
                2
            ),
            "Moderate evidence of Original Contribution. Found 2 relevant examples."
        );
        assert_eq!(
            criterion_description(Criterion::Press, QualificationLevel::Low, 1),
            "Limited evidence of Press. Found 1 potential examples."
        );
        assert_eq!(
            criterion_description(Criterion::Press, QualificationLevel::Low, 0),
            "No significant evidence of Press found in the provided CV."
        );
    }

    // ── overall rating decision table ───────────────────────────────────

    #[test]
    fn test_three_medium_criteria_rate_medium() {
        // met=3, stronglyMet=0 → MEDIUM
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.75]),
                (Criterion::Press, vec![0.75]),
                (Criterion::Judging, vec![0.75]),
            ]),
            &rules(),
        );
        assert_eq!(assessment.overall_rating, QualificationLevel::Medium);
    }

    #[test]
    fn test_one_strong_and_four_met_rates_high() {
        // met=4 (incl. the high one), stronglyMet=1 → HIGH
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.9, 0.9, 0.9]),
                (Criterion::Press, vec![0.75]),
                (Criterion::Judging, vec![0.75]),
                (Criterion::Membership, vec![0.75]),
            ]),
            &rules(),
        );
        assert_eq!(assessment.overall_rating, QualificationLevel::High);
    }

    #[test]
    fn test_two_strong_criteria_alone_rate_low() {
        // met=2, stronglyMet=2 → fails the minimum of 3 → LOW
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.9, 0.9, 0.9]),
                (Criterion::Press, vec![0.9, 0.9, 0.9]),
            ]),
            &rules(),
        );
        assert_eq!(assessment.overall_rating, QualificationLevel::Low);
    }

    #[test]
    fn test_three_strong_criteria_rate_high() {
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.9, 0.9, 0.9]),
                (Criterion::Press, vec![0.9, 0.9, 0.9]),
                (Criterion::ScholarlyArticles, vec![0.9, 0.9, 0.9]),
            ]),
            &rules(),
        );
        assert_eq!(assessment.overall_rating, QualificationLevel::High);
    }

    #[test]
    fn test_one_strong_and_three_met_rates_medium() {
        // met=3, stronglyMet=1 → the HIGH shortcut needs met≥4 → MEDIUM
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.9, 0.9, 0.9]),
                (Criterion::Press, vec![0.75]),
                (Criterion::Judging, vec![0.75]),
            ]),
            &rules(),
        );
        assert_eq!(assessment.overall_rating, QualificationLevel::Medium);
    }

    // ── map contents ────────────────────────────────────────────────────

    #[test]
    fn test_empty_evidence_criteria_omitted_from_map() {
        let assessment =
            generate_assessment(ranked(vec![(Criterion::Awards, vec![0.75])]), &rules());
        assert_eq!(assessment.criteria_assessments.len(), 1);
        assert!(assessment
            .criteria_assessments
            .contains_key(&Criterion::Awards));
    }

    #[test]
    fn test_no_evidence_anywhere_yields_empty_map_and_low() {
        let assessment = generate_assessment(ranked(vec![]), &rules());
        assert!(assessment.criteria_assessments.is_empty());
        assert_eq!(assessment.overall_rating, QualificationLevel::Low);
    }

    // ── narrative ───────────────────────────────────────────────────────

    #[test]
    fn test_summary_below_minimum() {
        let assessment =
            generate_assessment(ranked(vec![(Criterion::Awards, vec![0.75])]), &rules());
        assert_eq!(
            assessment.summary,
            "Based on the analysis of the provided CV, the applicant meets only 1 of the \
             required minimum of 3 O-1A criteria. Additional evidence would be needed to \
             strengthen the application."
        );
    }

    #[test]
    fn test_summary_reports_counts_and_strong_areas() {
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.9, 0.9, 0.9]),
                (Criterion::Press, vec![0.75]),
                (Criterion::Judging, vec![0.75]),
            ]),
            &rules(),
        );
        assert!(assessment
            .summary
            .contains("meets 3 of the 8 O-1A criteria, with 1 met at a high level of evidence."));
        assert!(assessment
            .summary
            .contains("The strongest evidence is in the areas of Awards."));
        assert!(!assessment.summary.contains("limited or no evidence"));
    }

    #[test]
    fn test_summary_lists_present_weak_criteria_only() {
        let assessment = generate_assessment(
            ranked(vec![
                (Criterion::Awards, vec![0.75]),
                (Criterion::Press, vec![0.75]),
                (Criterion::Judging, vec![0.75]),
                (Criterion::HighRemuneration, vec![0.65]),
            ]),
            &rules(),
        );
        assert!(assessment
            .summary
            .contains("Areas with limited or no evidence include High Remuneration."));
        // absent criteria (no evidence at all) are never mentioned
        assert!(!assessment.summary.contains("Membership"));
    }

    #[test]
    fn test_recommendation_high() {
        let recommendation = generate_recommendation(QualificationLevel::High, 5);
        assert!(recommendation.starts_with(
            "The applicant shows strong qualifications for an O-1A visa."
        ));
    }

    #[test]
    fn test_recommendation_medium() {
        let recommendation = generate_recommendation(QualificationLevel::Medium, 3);
        assert!(recommendation
            .starts_with("The applicant meets the minimum requirements for an O-1A visa."));
    }

    #[test]
    fn test_recommendation_low_with_partial_evidence() {
        let recommendation = generate_recommendation(QualificationLevel::Low, 2);
        assert!(recommendation.starts_with(
            "The applicant currently meets only 2 of the required minimum of 3 O-1A criteria."
        ));
    }

    #[test]
    fn test_recommendation_low_with_no_criteria_met() {
        let recommendation = generate_recommendation(QualificationLevel::Low, 0);
        assert_eq!(
            recommendation,
            "Based on the provided CV, there is insufficient evidence to support an O-1A visa \
             application at this time. The applicant should focus on building a stronger \
             profile with nationally or internationally recognized achievements before \
             considering an O-1A application."
        );
    }
}
