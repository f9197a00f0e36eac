// Text Normalizer
// Canonicalizes a document for comparison while keeping a map back to the
// original byte offsets

/// Normalized comparison form of a document: lowercase ASCII alphanumerics
/// and single collapsing spaces. `position_map[i]` is the UTF-8 byte offset
/// in the original text of the character behind normalized byte `i`; the
/// normalized text is pure ASCII, so bytes and characters coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub position_map: Vec<usize>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalize `input` into its comparison form.
///
/// ASCII alphanumerics are lowercased and kept; any whitespace run collapses
/// to one space (mapped to the run's first character); everything else is
/// dropped with no representation in the output. Deterministic, no failure
/// modes, and a fixed point on its own output.
pub fn normalize(input: &str) -> NormalizedText {
    let mut text = String::with_capacity(input.len());
    let mut position_map = Vec::with_capacity(input.len());

    for (offset, ch) in input.char_indices() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            text.push(lower);
            position_map.push(offset);
        } else if ch.is_whitespace() {
            if !text.ends_with(' ') {
                text.push(' ');
                position_map.push(offset);
            }
        }
    }

    NormalizedText { text, position_map }
}
