//! Text segmentation for bounded-length synthesis requests
//!
//! The remote backends only accept short text, so arbitrary input has to be
//! cut into chunks before synthesis. Splitting happens at linguistically
//! sensible boundaries: sentence punctuation first, single spaces for
//! sentences that are still too long, then greedy re-merging so chunks pack
//! as close to the limit as possible. Concatenating the output in order
//! always reproduces the input exactly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum chunk length in bytes accepted by the synthesis backends.
///
/// They might change this in the future.
pub const TEXT_LEN_LIMIT: usize = 200;

/// Shortest run ending at sentence punctuation, else the remaining run.
/// The `s` flag keeps newlines inside matches so no characters are dropped.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s).*?[.!?:;]|.+").expect("sentence boundary regex is valid"));

/// Shortest run ending at a space, else the remaining run.
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s).*? |.+").expect("word boundary regex is valid"));

/// Split `text` into chunks of at most `max_len` bytes.
///
/// Three passes:
/// 1. Cut at sentence punctuation (`. ! ? : ;`).
/// 2. Re-cut any oversize piece at spaces.
/// 3. Greedily merge consecutive pieces back together while the running
///    chunk stays within `max_len`.
///
/// A single word longer than `max_len` with no internal space is passed
/// through oversize rather than truncated; callers treat that as accepted
/// behavior, not an error. `max_len` must be positive (caller contract).
///
/// The function is total: any input, including the empty string, produces at
/// least one chunk, and the chunks concatenated in order equal the input.
pub fn segment(text: &str, max_len: usize) -> Vec<String> {
    let mut pieces: Vec<&str> = Vec::new();
    for sentence in SENTENCE_BOUNDARY.find_iter(text) {
        let sentence = sentence.as_str();
        if sentence.len() > max_len {
            pieces.extend(WORD_BOUNDARY.find_iter(sentence).map(|m| m.as_str()));
        } else {
            pieces.push(sentence);
        }
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for piece in pieces {
        if current.len() + piece.len() <= max_len {
            current.push_str(piece);
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(piece);
        }
    }

    // The trailing chunk is always emitted, even when empty.
    chunks.push(current);
    chunks
}
