// AI-Sentence Locator & Classifier
// Positions provider-scored sentences with a forward cursor and bins
// sentence- and document-level probabilities into qualitative classes

use tracing::{info, warn};

use crate::models::{
    AiDetectionReport, DocumentClass, LocatedSentence, SentenceClass, SentenceProbability,
};

/// Place every provider sentence in the document.
///
/// A single forward cursor threads through the list: provider output is in
/// document order, which disambiguates repeated sentences. Sentences are
/// never dropped; one that can't be found is placed at the cursor so the
/// per-sentence trace stays complete. Emitted offsets are clamped to the
/// document length and position ends never decrease across the sequence.
pub fn resolve_sentences(
    original: &str,
    sentences: &[SentenceProbability],
) -> Vec<LocatedSentence> {
    let mut located = Vec::with_capacity(sentences.len());

    sentences.iter().fold(0usize, |cursor, sentence| {
        let (entry, next_cursor) = place_sentence(original, cursor, sentence);
        located.push(entry);
        next_cursor
    });

    located
}

/// Place one sentence at or after `cursor`, returning the entry and the
/// advanced cursor. An out-of-range cursor degrades to the fallback
/// placement; nothing here can panic.
fn place_sentence(
    original: &str,
    cursor: usize,
    sentence: &SentenceProbability,
) -> (LocatedSentence, usize) {
    let doc_len = original.len();
    let text = sentence.sentence_text.as_str();

    let found = original
        .get(cursor..)
        .and_then(|tail| tail.find(text))
        .map(|i| cursor + i);

    let (start, end) = match found {
        Some(start) => (start, start + text.len()),
        None => {
            warn!(
                "[AI_DETECT] sentence not found from byte {}, placed at cursor",
                cursor
            );
            (cursor, cursor + text.len())
        }
    };

    let position_start = start.min(doc_len);
    let position_end = end.min(doc_len).max(position_start);

    let score = scaled_score(sentence.generated_probability);
    let entry = LocatedSentence {
        text: text.to_string(),
        score,
        classification: classify_sentence(score),
        position_start,
        position_end,
    };

    (entry, position_end)
}

/// Scale a 0..1 probability to the 0-100 score the classifiers bin on.
pub fn scaled_score(probability: f64) -> f64 {
    if !probability.is_finite() {
        return 0.0;
    }
    (probability * 100.0).clamp(0.0, 100.0)
}

/// Sentence bins: <20 human, <50 likely_human, <80 likely_ai, else ai.
pub fn classify_sentence(score: f64) -> SentenceClass {
    if score < 20.0 {
        SentenceClass::Human
    } else if score < 50.0 {
        SentenceClass::LikelyHuman
    } else if score < 80.0 {
        SentenceClass::LikelyAi
    } else {
        SentenceClass::Ai
    }
}

/// Document bins: <30 human, <70 mixed, else ai.
pub fn classify_document(score: f64) -> DocumentClass {
    if score < 30.0 {
        DocumentClass::Human
    } else if score < 70.0 {
        DocumentClass::Mixed
    } else {
        DocumentClass::Ai
    }
}

/// Mean generated-probability over the sentence list; 0 when empty. Used
/// when the provider omits the document-level probability.
pub fn mean_generated_probability(sentences: &[SentenceProbability]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let sum: f64 = sentences
        .iter()
        .map(|s| {
            if s.generated_probability.is_finite() {
                s.generated_probability.clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .sum();
    sum / sentences.len() as f64
}

/// Full AI-detection pass: place and classify every sentence, then classify
/// the document from the provider's overall probability (or the sentence
/// mean when absent).
pub fn analyze_document(
    original: &str,
    sentences: &[SentenceProbability],
    overall_generated_probability: Option<f64>,
) -> AiDetectionReport {
    let located = resolve_sentences(original, sentences);
    let overall = overall_generated_probability
        .filter(|p| p.is_finite())
        .unwrap_or_else(|| mean_generated_probability(sentences));
    let overall_score = scaled_score(overall);
    let classification = classify_document(overall_score);

    info!(
        "[AI_DETECT] {} sentences placed, overall score {:.1} -> {}",
        located.len(),
        overall_score,
        classification.as_str()
    );

    AiDetectionReport {
        overall_score,
        classification,
        sentences: located,
    }
}
