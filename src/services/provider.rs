// Provider Adapter
// Tolerates the providers' wire quirks (text vs textSnippet, viewurl casing)
// at the boundary so the core only ever sees canonical shapes

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::models::{ProviderMatch, RawProviderMatch, SentenceProbability};

/// Plagiarism-provider payload as received: the document plus raw matches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismInput {
    pub content_text: String,
    #[serde(default)]
    pub raw_matches: Vec<RawProviderMatch>,
}

/// AI-detection-provider payload as received.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInput {
    pub content_text: String,
    #[serde(default)]
    pub sentences: Vec<SentenceProbability>,
    #[serde(default)]
    pub overall_generated_probability: Option<f64>,
}

/// Pick the snippet field (`text` first, then `textSnippet`; first non-empty
/// wins) and produce the canonical match. `None` when neither is usable.
pub fn canonicalize(raw: &RawProviderMatch) -> Option<ProviderMatch> {
    let snippet = [raw.text.as_deref(), raw.text_snippet.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())?;

    Some(ProviderMatch {
        snippet_text: snippet.to_string(),
        source_url: raw.url.clone(),
        percent_matched: raw.percent_matched,
        words_matched: raw.words_matched,
        source_word_count: raw.url_words,
        view_url: raw.view_url.clone(),
    })
}

/// Decode a plagiarism payload leniently: matches with no snippet text are
/// skipped, mirroring the pipeline's drop-don't-fail policy.
pub fn decode_plagiarism_input(payload: &str) -> Result<(String, Vec<ProviderMatch>)> {
    let input: PlagiarismInput = serde_json::from_str(payload)?;
    let mut matches = Vec::with_capacity(input.raw_matches.len());
    for (index, raw) in input.raw_matches.iter().enumerate() {
        match canonicalize(raw) {
            Some(m) => matches.push(m),
            None => debug!("[PROVIDER] raw match {} has no snippet text, skipped", index),
        }
    }
    Ok((input.content_text, matches))
}

/// Strict variant for callers that want snippet-less matches surfaced as a
/// contract violation instead of silently skipped.
pub fn decode_plagiarism_input_strict(payload: &str) -> Result<(String, Vec<ProviderMatch>)> {
    let input: PlagiarismInput = serde_json::from_str(payload)?;
    let mut matches = Vec::with_capacity(input.raw_matches.len());
    for (index, raw) in input.raw_matches.iter().enumerate() {
        match canonicalize(raw) {
            Some(m) => matches.push(m),
            None => return Err(ScanError::MissingSnippet { index }),
        }
    }
    Ok((input.content_text, matches))
}

/// Decode an AI-detection payload.
pub fn decode_ai_input(payload: &str) -> Result<AiInput> {
    Ok(serde_json::from_str(payload)?)
}
