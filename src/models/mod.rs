// Veriloc Data Models
// Canonical scan inputs/outputs plus the provider wire shapes

use serde::{Deserialize, Serialize};

// ============ Spans ============

/// A resolved character range in the original document.
/// Offsets are UTF-8 byte offsets (0-based, end-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

// ============ Plagiarism Provider Input ============

/// One similarity match exactly as the provider sends it. Every field except
/// the source URL may be absent; snippet text arrives under either `text` or
/// `textSnippet` depending on the provider endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderMatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_snippet: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub percent_matched: Option<f64>,
    #[serde(default)]
    pub words_matched: Option<i32>,
    #[serde(default)]
    pub url_words: Option<i32>,
    #[serde(default, alias = "viewurl")]
    pub view_url: Option<String>,
}

/// Canonical form of a provider match after the adapter has picked the
/// snippet field. This is the only shape the core pipeline sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMatch {
    pub snippet_text: String,
    pub source_url: String,
    #[serde(default)]
    pub percent_matched: Option<f64>,
    #[serde(default)]
    pub words_matched: Option<i32>,
    #[serde(default)]
    pub source_word_count: Option<i32>,
    #[serde(default)]
    pub view_url: Option<String>,
}

// ============ Located Matches ============

/// Localization reliability derived from snippet word count:
/// >50 words -> high, 21-50 -> medium, <=20 -> low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub similarity: f64,
    pub confidence: Confidence,
}

/// A provider match successfully relocated inside the original document.
/// Invariant: `0 <= start < end <= len(document)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedMatch {
    pub start: usize,
    pub end: usize,
    /// 0-100; provider page-match percentage when supplied, otherwise a
    /// snippet-length heuristic.
    pub similarity: f64,
    pub confidence: Confidence,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_words: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_words: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percent: Option<f64>,
}

// ============ Scan Report ============

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub query_words: usize,
    /// Scan-credit estimate: one credit per 500 document words, minimum one
    /// for a non-empty document.
    pub cost: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    pub located_matches: Vec<LocatedMatch>,
    pub summary: ScanSummary,
    pub ts: String,
}

// ============ AI Detection ============

/// One provider-scored sentence: text plus generated-probability in 0..1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceProbability {
    #[serde(alias = "text")]
    pub sentence_text: String,
    #[serde(default)]
    pub generated_probability: f64,
}

/// Per-sentence bins on the 0-100 scale:
/// <20 human, <50 likely_human, <80 likely_ai, else ai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceClass {
    Human,
    LikelyHuman,
    LikelyAi,
    Ai,
}

impl SentenceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceClass::Human => "human",
            SentenceClass::LikelyHuman => "likely_human",
            SentenceClass::LikelyAi => "likely_ai",
            SentenceClass::Ai => "ai",
        }
    }
}

/// Document bins on the 0-100 scale: <30 human, <70 mixed, else ai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClass {
    Human,
    Mixed,
    Ai,
}

impl DocumentClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentClass::Human => "human",
            DocumentClass::Mixed => "mixed",
            DocumentClass::Ai => "ai",
        }
    }
}

/// A sentence placed in the document. Unlike plagiarism matches, sentences
/// are never dropped: an unlocatable sentence is placed at the running
/// cursor so the per-sentence trace stays complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedSentence {
    pub text: String,
    pub score: f64,
    pub classification: SentenceClass,
    pub position_start: usize,
    pub position_end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDetectionReport {
    pub overall_score: f64,
    pub classification: DocumentClass,
    pub sentences: Vec<LocatedSentence>,
}

// ============ Scoring Thresholds ============

/// Word-count boundaries and heuristic similarities for the match scorer.
/// Defaults reproduce the documented 20/50 and 40/70/90 bins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreThresholds {
    #[serde(default = "default_low_max_words")]
    pub low_max_words: usize,
    #[serde(default = "default_medium_max_words")]
    pub medium_max_words: usize,
    #[serde(default = "default_low_similarity")]
    pub low_similarity: f64,
    #[serde(default = "default_medium_similarity")]
    pub medium_similarity: f64,
    #[serde(default = "default_high_similarity")]
    pub high_similarity: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            low_max_words: 20,
            medium_max_words: 50,
            low_similarity: 40.0,
            medium_similarity: 70.0,
            high_similarity: 90.0,
        }
    }
}

// ============ Default Value Functions ============

fn default_low_max_words() -> usize { 20 }
fn default_medium_max_words() -> usize { 50 }
fn default_low_similarity() -> f64 { 40.0 }
fn default_medium_similarity() -> f64 { 70.0 }
fn default_high_similarity() -> f64 { 90.0 }
