//! Text-understanding capabilities behind trait seams.
//!
//! The pipeline only requires three contracts: sentence boundaries, named
//! entities, and a confidence for (sentence, criterion). The rule-based
//! defaults here are pure and deterministic; a learned backend can be swapped
//! in without touching the pipeline stages.

pub mod entities;
pub mod scoring;
pub mod tokenizer;

use std::sync::Arc;

pub use entities::{Entity, EntityLabel, EntityRecognizer, HeuristicEntityRecognizer};
pub use scoring::{ConfidenceScorer, KeywordDensityScorer};
pub use tokenizer::{RuleSentenceTokenizer, SentenceTokenizer};

/// Bundle of the three capability objects, cloned cheaply into each request.
#[derive(Clone)]
pub struct NlpEngine {
    pub tokenizer: Arc<dyn SentenceTokenizer>,
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub scorer: Arc<dyn ConfidenceScorer>,
}

impl NlpEngine {
    /// Default deterministic stack: rule-based tokenizer and recognizer,
    /// keyword-density scorer with jitter disabled.
    pub fn rule_based() -> Self {
        NlpEngine {
            tokenizer: Arc::new(RuleSentenceTokenizer),
            recognizer: Arc::new(HeuristicEntityRecognizer),
            scorer: Arc::new(KeywordDensityScorer::deterministic()),
        }
    }
}
