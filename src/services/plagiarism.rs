// Plagiarism Match Pipeline
// Orchestrates normalizer + locator + scorer over provider matches and
// produces located, de-duplicated highlights with scan metadata

use std::collections::HashSet;
use tracing::{debug, info};

use crate::models::{
    LocatedMatch, PlagiarismReport, ProviderMatch, ScanSummary, ScoreThresholds,
};
use crate::services::locator::locate;
use crate::services::normalizer::normalize;
use crate::services::scorer::{count_words, score_match_with_thresholds};

/// Resolve provider matches against the document with default thresholds.
pub fn resolve_matches(original_text: &str, matches: &[ProviderMatch]) -> PlagiarismReport {
    resolve_matches_with_thresholds(original_text, matches, &ScoreThresholds::default())
}

/// Resolve provider matches against the document.
///
/// The document is normalized once; matches are processed in input order.
/// Unlocatable snippets are dropped silently (a missing highlight is safer
/// than a wrong one), as is any match resolving to an already-emitted span.
pub fn resolve_matches_with_thresholds(
    original_text: &str,
    matches: &[ProviderMatch],
    thresholds: &ScoreThresholds,
) -> PlagiarismReport {
    let normalized = normalize(original_text);
    let mut located = Vec::with_capacity(matches.len());
    let mut seen_spans: HashSet<(usize, usize)> = HashSet::new();

    for (index, m) in matches.iter().enumerate() {
        let span = match locate(original_text, &normalized, &m.snippet_text) {
            Some(span) => span,
            None => {
                debug!("[PLAGIARISM] match {} not locatable, dropped", index);
                continue;
            }
        };
        if !seen_spans.insert((span.start, span.end)) {
            debug!(
                "[PLAGIARISM] match {} duplicates span {}-{}, dropped",
                index, span.start, span.end
            );
            continue;
        }

        let score = score_match_with_thresholds(&m.snippet_text, m.percent_matched, thresholds);
        located.push(LocatedMatch {
            start: span.start,
            end: span.end,
            similarity: score.similarity,
            confidence: score.confidence,
            source_url: m.source_url.clone(),
            view_url: m.view_url.clone(),
            matched_words: m.words_matched,
            source_words: m.source_word_count,
            match_percent: m.percent_matched,
        });
    }

    let query_words = count_words(original_text);
    let summary = ScanSummary {
        query_words,
        cost: scan_credits(query_words),
        count: located.len(),
    };

    info!(
        "[PLAGIARISM] resolved {}/{} matches, {} query words",
        summary.count,
        matches.len(),
        summary.query_words
    );

    PlagiarismReport {
        located_matches: located,
        summary,
        ts: chrono::Utc::now().to_rfc3339(),
    }
}

/// Scan-credit estimate: one credit per 500 document words, minimum one for
/// a non-empty document.
fn scan_credits(query_words: usize) -> f64 {
    if query_words == 0 {
        return 0.0;
    }
    (query_words as f64 / 500.0).ceil().max(1.0)
}

/// Fraction of the document's bytes covered by located spans, with overlaps
/// merged. Drives the highlight-density bar in the UI.
pub fn coverage_ratio(report: &PlagiarismReport, original_text: &str) -> f64 {
    if original_text.is_empty() || report.located_matches.is_empty() {
        return 0.0;
    }

    let mut spans: Vec<(usize, usize)> = report
        .located_matches
        .iter()
        .map(|m| (m.start, m.end.min(original_text.len())))
        .filter(|(s, e)| e > s)
        .collect();
    spans.sort_unstable();

    let mut covered = 0usize;
    let mut cursor = 0usize;
    for (start, end) in spans {
        let start = start.max(cursor);
        if end > start {
            covered += end - start;
            cursor = end;
        }
    }

    covered as f64 / original_text.len() as f64
}
