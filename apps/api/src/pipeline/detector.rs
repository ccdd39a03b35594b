//! Evidence detection: per section, per criterion, find sentences lexically
//! associated with the criterion and score them via the confidence capability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Criterion;
use crate::nlp::entities::{classify_organizations, OrganizationProfile};
use crate::nlp::{Entity, NlpEngine};
use crate::pipeline::keywords::{contains_term, criterion_keywords};
use crate::pipeline::segmenter::Sections;

/// A sentence that matched a criterion's keyword set, with its raw
/// (pre-boost) confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceMatch {
    pub text: String,
    pub confidence: f64,
    pub source_section: String,
}

/// Detector output for one section. Entities and organization profiles are
/// not consumed by the scoring stages yet; they are part of the contract for
/// downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub entities: Vec<Entity>,
    pub organizations: Vec<OrganizationProfile>,
    pub matches: BTreeMap<Criterion, Vec<SentenceMatch>>,
}

/// Full detector output, in document section order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub sections: Vec<(String, SectionAnalysis)>,
}

/// Analyzes every section: sentence split, entity recognition, and keyword
/// matching against all eight criteria. A sentence can appear under several
/// criteria if it matches several keyword sets.
pub async fn analyze(sections: &Sections, nlp: &NlpEngine) -> Result<DocumentAnalysis, AppError> {
    let mut analyzed = Vec::with_capacity(sections.len());

    for (name, lines) in sections.iter() {
        let section_text = lines.join("\n");

        let entities = nlp.recognizer.recognize(&section_text).await?;
        let organizations = classify_organizations(&entities, &section_text);
        let sentences = nlp.tokenizer.split(&section_text).await?;

        let mut matches: BTreeMap<Criterion, Vec<SentenceMatch>> = BTreeMap::new();
        for criterion in Criterion::ALL {
            let keywords = criterion_keywords(criterion);
            let mut criterion_matches = Vec::new();
            for sentence in &sentences {
                let lower = sentence.to_lowercase();
                if keywords.iter().any(|term| contains_term(&lower, term)) {
                    let confidence = nlp.scorer.score(sentence, criterion).await?;
                    criterion_matches.push(SentenceMatch {
                        text: sentence.clone(),
                        confidence,
                        source_section: name.to_string(),
                    });
                }
            }
            matches.insert(criterion, criterion_matches);
        }

        analyzed.push((
            name.to_string(),
            SectionAnalysis {
                entities,
                organizations,
                matches,
            },
        ));
    }

    Ok(DocumentAnalysis { sections: analyzed })
}
