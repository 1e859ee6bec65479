//! Token-overlap F1 scorer.

use std::collections::HashMap;

use super::AnswerScorer;

/// Unigram-overlap F1 over lowercased alphanumeric tokens.
///
/// Precision is the fraction of candidate tokens matched in the reference,
/// recall the fraction of reference tokens matched in the candidate (both as
/// multisets), and the score their harmonic mean. Identical texts score
/// `1.0`; disjoint texts score `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlapScorer;

impl TokenOverlapScorer {
    pub fn new() -> Self {
        Self
    }
}

fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl AnswerScorer for TokenOverlapScorer {
    fn score(&self, candidate: &str, reference: &str) -> f64 {
        let candidate_tokens = tokens(candidate);
        let reference_tokens = tokens(reference);

        if candidate_tokens.is_empty() || reference_tokens.is_empty() {
            return 0.0;
        }

        let mut reference_counts: HashMap<&str, usize> = HashMap::new();
        for token in &reference_tokens {
            *reference_counts.entry(token.as_str()).or_default() += 1;
        }

        let mut overlap = 0usize;
        for token in &candidate_tokens {
            if let Some(remaining) = reference_counts.get_mut(token.as_str()) {
                if *remaining > 0 {
                    *remaining -= 1;
                    overlap += 1;
                }
            }
        }

        if overlap == 0 {
            return 0.0;
        }

        let precision = overlap as f64 / candidate_tokens.len() as f64;
        let recall = overlap as f64 / reference_tokens.len() as f64;

        (2.0 * precision * recall / (precision + recall)).clamp(0.0, 1.0)
    }
}
