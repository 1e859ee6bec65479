use super::lexical::TokenOverlapScorer;
use super::AnswerScorer;

#[test]
fn test_identical_texts_score_one() {
    let scorer = TokenOverlapScorer::new();
    let score = scorer.score("Paris is the capital", "Paris is the capital");
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn test_disjoint_texts_score_zero() {
    let scorer = TokenOverlapScorer::new();
    assert_eq!(scorer.score("entirely unrelated words", "quantum flux manifold"), 0.0);
}

#[test]
fn test_empty_candidate_scores_zero() {
    let scorer = TokenOverlapScorer::new();
    assert_eq!(scorer.score("", "Paris"), 0.0);
}

#[test]
fn test_empty_reference_scores_zero() {
    let scorer = TokenOverlapScorer::new();
    assert_eq!(scorer.score("Paris", ""), 0.0);
}

#[test]
fn test_punctuation_only_counts_as_empty() {
    let scorer = TokenOverlapScorer::new();
    assert_eq!(scorer.score("?!...", "Paris"), 0.0);
}

#[test]
fn test_score_is_case_insensitive() {
    let scorer = TokenOverlapScorer::new();
    let score = scorer.score("PARIS", "paris");
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn test_partial_overlap_is_strictly_between_bounds() {
    let scorer = TokenOverlapScorer::new();
    let score = scorer.score("Paris France", "Paris Germany");
    assert!(score > 0.0 && score < 1.0);
}

#[test]
fn test_score_is_deterministic() {
    let scorer = TokenOverlapScorer::new();
    let a = scorer.score("the quick brown fox", "a quick brown dog");
    let b = scorer.score("the quick brown fox", "a quick brown dog");
    assert_eq!(a, b);
}

#[test]
fn test_score_stays_in_unit_interval() {
    let scorer = TokenOverlapScorer::new();
    let cases = [
        ("word", "word word word word"),
        ("word word word word", "word"),
        ("a b c d e f", "f e d c b a"),
        ("répétition café", "repetition cafe"),
    ];
    for (candidate, reference) in cases {
        let score = scorer.score(candidate, reference);
        assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn test_repeated_tokens_match_as_multiset() {
    let scorer = TokenOverlapScorer::new();
    // Only one of the three "yes" tokens finds a partner in the reference.
    let score = scorer.score("yes yes yes", "yes no");
    let expected = 2.0 * (1.0 / 3.0) * (1.0 / 2.0) / ((1.0 / 3.0) + (1.0 / 2.0));
    assert!((score - expected).abs() < 1e-9);
}
