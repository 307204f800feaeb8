use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    pub text: String,
    pub truncated: bool,
}

/// Bound `value` to at most `max_chars` Unicode scalar values.
///
/// No word or sentence boundary awareness, and no grapheme awareness either:
/// a combining sequence may be cut between its scalar values. That is an
/// intentional simplification, not a defect.
pub fn truncate_text(value: &str, max_chars: usize) -> Truncation {
    match value.char_indices().nth(max_chars) {
        None => Truncation {
            text: value.to_string(),
            truncated: false,
        },
        Some((boundary, _)) => Truncation {
            text: value[..boundary].to_string(),
            truncated: true,
        },
    }
}
