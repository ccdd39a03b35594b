use async_trait::async_trait;

use crate::errors::AppError;

/// Sentence-boundary capability. May be backed by blocking or remote
/// tokenizers, hence async and fallible.
#[async_trait]
pub trait SentenceTokenizer: Send + Sync {
    async fn split(&self, text: &str) -> Result<Vec<String>, AppError>;
}

/// Default tokenizer: splits on `.`, `!`, `?` followed by whitespace or end
/// of input. Good enough for CV prose; abbreviation handling belongs to a
/// smarter backend.
pub struct RuleSentenceTokenizer;

#[async_trait]
impl SentenceTokenizer for RuleSentenceTokenizer {
    async fn split(&self, text: &str) -> Result<Vec<String>, AppError> {
        Ok(split_sentences(text))
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_boundary {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
