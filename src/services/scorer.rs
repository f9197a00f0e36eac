// Match Scorer
// Similarity and confidence for a located snippet. The provider percentage
// reflects how much of the source page matched; word count independently
// measures how reliable the localization is, so both signals are surfaced.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Confidence, MatchScore, ScoreThresholds};

fn word_regex() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("static word regex"))
}

/// Count word tokens (ASCII alphanumeric runs) in `text`.
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    word_regex().find_iter(text).count()
}

/// Score a snippet with the default 20/50-word, 40/70/90-similarity bins.
pub fn score_match(snippet: &str, percent_matched: Option<f64>) -> MatchScore {
    score_match_with_thresholds(snippet, percent_matched, &ScoreThresholds::default())
}

/// Score a snippet against explicit thresholds.
///
/// `similarity` is the provider percentage when supplied and finite
/// (non-finite coerces to 0); otherwise it's derived from word count.
/// Confidence always comes from word count alone.
pub fn score_match_with_thresholds(
    snippet: &str,
    percent_matched: Option<f64>,
    thresholds: &ScoreThresholds,
) -> MatchScore {
    let words = count_words(snippet);

    let similarity = match percent_matched {
        Some(p) if p.is_finite() => p,
        Some(_) => 0.0,
        None => {
            if words > thresholds.medium_max_words {
                thresholds.high_similarity
            } else if words > thresholds.low_max_words {
                thresholds.medium_similarity
            } else {
                thresholds.low_similarity
            }
        }
    };

    let confidence = if words > thresholds.medium_max_words {
        Confidence::High
    } else if words > thresholds.low_max_words {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    MatchScore {
        similarity,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("hyphen-ated, punct! 3x"), 4);
    }

    #[test]
    fn test_heuristic_similarity_bins() {
        assert_eq!(score_match(&words(10), None).similarity, 40.0);
        assert_eq!(score_match(&words(35), None).similarity, 70.0);
        assert_eq!(score_match(&words(60), None).similarity, 90.0);
    }

    #[test]
    fn test_confidence_boundaries_are_strict() {
        assert_eq!(score_match(&words(20), None).confidence, Confidence::Low);
        assert_eq!(score_match(&words(21), None).confidence, Confidence::Medium);
        assert_eq!(score_match(&words(50), None).confidence, Confidence::Medium);
        assert_eq!(score_match(&words(51), None).confidence, Confidence::High);
    }

    #[test]
    fn test_provider_percent_passthrough() {
        let s = score_match(&words(5), Some(87.5));
        assert_eq!(s.similarity, 87.5);
        // Confidence still comes from word count, not the percentage.
        assert_eq!(s.confidence, Confidence::Low);
    }

    #[test]
    fn test_non_finite_percent_coerces_to_zero() {
        assert_eq!(score_match(&words(5), Some(f64::NAN)).similarity, 0.0);
        assert_eq!(score_match(&words(5), Some(f64::INFINITY)).similarity, 0.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = ScoreThresholds {
            low_max_words: 2,
            medium_max_words: 4,
            low_similarity: 10.0,
            medium_similarity: 50.0,
            high_similarity: 99.0,
        };
        let s = score_match_with_thresholds(&words(5), None, &t);
        assert_eq!(s.similarity, 99.0);
        assert_eq!(s.confidence, Confidence::High);
    }
}
