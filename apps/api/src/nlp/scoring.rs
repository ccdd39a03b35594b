use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Criterion;
use crate::pipeline::keywords::count_matches;

/// Confidence capability: given a sentence and a criterion, return a
/// confidence in [0, 1]. How the number is produced is pluggable; the
/// pipeline treats this as a potentially blocking external call.
#[async_trait]
pub trait ConfidenceScorer: Send + Sync {
    async fn score(&self, sentence: &str, criterion: Criterion) -> Result<f64, AppError>;
}

const BASE_CONFIDENCE: f64 = 0.5;
const KEYWORD_BONUS: f64 = 0.1;
const KEYWORD_BONUS_CAP: f64 = 0.4;
const JITTER_RANGE: f64 = 0.1;

/// Default rule-based scorer: base 0.5 plus a keyword-density bonus of
/// 0.1 per matched keyword (capped at 0.4), capped at 1.0 overall.
///
/// The upstream implementation added random noise here as a stand-in for a
/// learned classifier. That made verdicts non-reproducible, so jitter is off
/// by default and only available through a seeded generator.
pub struct KeywordDensityScorer {
    jitter_rng: Option<Mutex<fastrand::Rng>>,
}

impl KeywordDensityScorer {
    pub fn deterministic() -> Self {
        KeywordDensityScorer { jitter_rng: None }
    }

    /// Enables the [0, 0.1) tie-breaking perturbation, driven by a seeded
    /// generator so runs remain reproducible.
    pub fn with_jitter(seed: u64) -> Self {
        KeywordDensityScorer {
            jitter_rng: Some(Mutex::new(fastrand::Rng::with_seed(seed))),
        }
    }

    fn next_jitter(&self) -> f64 {
        match &self.jitter_rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                rng.f64() * JITTER_RANGE
            }
            None => 0.0,
        }
    }
}

#[async_trait]
impl ConfidenceScorer for KeywordDensityScorer {
    async fn score(&self, sentence: &str, criterion: Criterion) -> Result<f64, AppError> {
        let matched = count_matches(&sentence.to_lowercase(), criterion);
        let bonus = (matched as f64 * KEYWORD_BONUS).min(KEYWORD_BONUS_CAP);
        let confidence = BASE_CONFIDENCE + bonus + self.next_jitter();
        Ok(confidence.min(1.0))
    }
}
