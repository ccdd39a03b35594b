use std::sync::Arc;

use crate::config::Config;
use crate::decode::DocumentDecoder;
use crate::nlp::NlpEngine;
use crate::pipeline::rules::AssessmentRules;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup, so concurrent requests share
/// it without locks.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Thresholds, boost factor, and caps. Built once, never mutated.
    pub rules: Arc<AssessmentRules>,
    /// Document decoding collaborator. Default: pdf-extract backed.
    pub decoder: Arc<dyn DocumentDecoder>,
    /// Text-understanding capabilities (tokenizer, recognizer, scorer).
    pub nlp: NlpEngine,
}
