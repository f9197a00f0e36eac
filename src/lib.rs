// Veriloc
// Match-localization and classification engine for academic-integrity
// scanning: relocates provider-returned snippets/sentences inside the
// original document and assigns confidence/severity classifications.

pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScanError};
pub use models::{
    AiDetectionReport, Confidence, DocumentClass, LocatedMatch, LocatedSentence, MatchScore,
    PlagiarismReport, ProviderMatch, RawProviderMatch, ScanSummary, ScoreThresholds,
    SentenceClass, SentenceProbability, Span,
};
pub use services::{
    analyze_document, classify_document, classify_sentence, coverage_ratio,
    decode_ai_input, decode_plagiarism_input, locate, normalize, resolve_matches,
    resolve_sentences, score_match,
};

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_INIT: OnceLock<()> = OnceLock::new();

/// Initialize console logging for hosts (and tests) that don't install their
/// own subscriber. Safe to call more than once; respects `RUST_LOG`.
pub fn init_logging() {
    LOG_INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        // try_init: the enclosing service may already have a subscriber.
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init();
    });
}
