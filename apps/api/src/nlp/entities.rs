use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::pipeline::keywords::PRESTIGE_MARKERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    #[serde(rename = "ORG")]
    Organization,
    #[serde(rename = "PERSON")]
    Person,
}

/// A named entity with character offsets into the section text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// An organization entity annotated with a prestige flag. Not consumed by
/// the scoring pipeline yet; carried in the detector output for downstream
/// consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub name: String,
    pub is_prestigious: bool,
    pub confidence: f64,
}

/// Entity-recognition capability. The default below is a capitalization
/// heuristic; a model-backed recognizer implements the same contract.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, AppError>;
}

/// Rule-based recognizer: runs of two or more capitalized tokens form a
/// candidate entity. Candidates containing an organization marker word are
/// labeled ORG, the rest PERSON.
pub struct HeuristicEntityRecognizer;

const ORG_MARKERS: &[&str] = &[
    "university",
    "institute",
    "institution",
    "college",
    "laboratory",
    "labs",
    "lab",
    "inc",
    "corp",
    "corporation",
    "company",
    "technologies",
    "association",
    "society",
    "journal",
    "foundation",
    "academy",
    "committee",
    "council",
];

#[async_trait]
impl EntityRecognizer for HeuristicEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, AppError> {
        Ok(scan_entities(text))
    }
}

/// Classifies organization entities against the prestige-adjective lexicon,
/// consulting the sentence context the entity appeared in.
pub fn classify_organizations(entities: &[Entity], section_text: &str) -> Vec<OrganizationProfile> {
    let context_lower = section_text.to_lowercase();
    entities
        .iter()
        .filter(|e| e.label == EntityLabel::Organization)
        .map(|e| {
            let name_lower = e.text.to_lowercase();
            let is_prestigious = PRESTIGE_MARKERS
                .iter()
                .any(|marker| name_lower.contains(marker) || context_lower.contains(marker));
            OrganizationProfile {
                name: e.text.clone(),
                is_prestigious,
                confidence: if is_prestigious { 0.8 } else { 0.5 },
            }
        })
        .collect()
}

fn scan_entities(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut run: Vec<(usize, &str)> = Vec::new();
    // A capitalized token right after a sentence boundary is ambiguous
    // (verb vs. name), so runs break there.
    let mut after_boundary = true;

    for (offset, token) in tokenize_with_offsets(text) {
        if is_capitalized(token) && !after_boundary {
            run.push((offset, token));
        } else {
            flush_run(&mut entities, &run, text);
            run.clear();
        }
        after_boundary = token.ends_with(['.', '!', '?', ':', ';']);
    }
    flush_run(&mut entities, &run, text);
    entities
}

fn flush_run(entities: &mut Vec<Entity>, run: &[(usize, &str)], text: &str) {
    if run.len() < 2 {
        return;
    }
    let start = run[0].0;
    let end = run[run.len() - 1].0 + run[run.len() - 1].1.len();
    let span = &text[start..end];
    let span_lower = span.to_lowercase();
    let label = if ORG_MARKERS
        .iter()
        .any(|m| span_lower.split_whitespace().any(|w| w.trim_matches('.') == *m))
    {
        EntityLabel::Organization
    } else {
        EntityLabel::Person
    };
    entities.push(Entity {
        text: span.to_string(),
        label,
        start,
        end,
    });
}

fn tokenize_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_whitespace()
        .map(move |token| (token.as_ptr() as usize - text.as_ptr() as usize, token))
}

fn is_capitalized(token: &str) -> bool {
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && trimmed.chars().any(|c| c.is_lowercase()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_organization_by_marker_word() {
        let entities = scan_entities("Graduated from Stanford University in 2015.");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Stanford University");
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_recognizes_person_without_marker() {
        let entities = scan_entities("Collaborated with Jane Smith on the project.");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Jane Smith");
        assert_eq!(entities[0].label, EntityLabel::Person);
    }

    #[test]
    fn test_single_capitalized_word_not_an_entity() {
        let entities = scan_entities("Worked in Berlin on several projects.");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_offsets_point_into_source_text() {
        let text = "Joined Acme Corp last year.";
        let entities = scan_entities(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(&text[entities[0].start..entities[0].end], "Acme Corp");
    }

    #[test]
    fn test_prestige_classification_from_context() {
        let text = "Senior engineer at the renowned Acme Corp.";
        let entities = scan_entities(text);
        let orgs = classify_organizations(&entities, text);
        assert_eq!(orgs.len(), 1);
        assert!(orgs[0].is_prestigious);
        assert!((orgs[0].confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plain_org_is_not_prestigious() {
        let text = "Worked at Acme Corp for two years.";
        let entities = scan_entities(text);
        let orgs = classify_organizations(&entities, text);
        assert_eq!(orgs.len(), 1);
        assert!(!orgs[0].is_prestigious);
        assert!((orgs[0].confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_persons_are_not_classified_as_organizations() {
        let text = "Mentored by John Doe throughout.";
        let entities = scan_entities(text);
        let orgs = classify_organizations(&entities, text);
        assert!(orgs.is_empty());
    }
}
