// Veriloc Core Services
// Match localization and classification, leaves first:
// - normalizer: comparison form + position map back to original offsets
// - locator: three-tier snippet search (verbatim, normalized, space-free)
// - scorer: similarity/confidence from provider fields and word count
// - provider: wire-shape tolerance at the collaborator boundary
// - plagiarism: match pipeline over a similarity-provider result
// - ai_detection: sentence placement cursor + probability binning

pub mod ai_detection;
pub mod locator;
pub mod normalizer;
pub mod plagiarism;
pub mod provider;
pub mod scorer;

pub use ai_detection::{
    analyze_document, classify_document, classify_sentence, mean_generated_probability,
    resolve_sentences, scaled_score,
};
pub use locator::{locate, MIN_SNIPPET_CHARS};
pub use normalizer::{normalize, NormalizedText};
pub use plagiarism::{coverage_ratio, resolve_matches, resolve_matches_with_thresholds};
pub use provider::{
    canonicalize, decode_ai_input, decode_plagiarism_input, decode_plagiarism_input_strict,
    AiInput, PlagiarismInput,
};
pub use scorer::{count_words, score_match, score_match_with_thresholds};
