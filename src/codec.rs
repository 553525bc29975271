//! Character codecs for SQL string literals.
//!
//! A [`Codec`] turns a per-character escaping policy into whole-string
//! transforms. Dialects only decide how a single character is encoded and how
//! a single escape is read back; the driver loops here handle immunity,
//! concatenation and pass-through of malformed escapes.

mod immune;
mod mysql;
mod pushback;

pub use immune::ImmuneSet;
pub use mysql::{Mode, SqlStringCodec};
pub use pushback::PushbackCursor;

use crate::constants::DEFAULT_LOG_TRUNCATE;
use tracing::trace;

/// Per-character escaping policy plus the string-level drivers built on it.
pub trait Codec {
    /// Encode a single character that is not in `immune`.
    ///
    /// Implementations still honour `immune` so the hook is safe to call
    /// directly.
    fn encode_character(&self, immune: &ImmuneSet, c: char) -> String;

    /// Try to decode one escape at the cursor.
    ///
    /// Returns `None` when no escape starts here; in that case the cursor must
    /// be left exactly where it was.
    fn decode_character(&self, cursor: &mut PushbackCursor<'_>) -> Option<char>;

    /// Maximum number of input characters echoed into log events.
    fn log_truncate(&self) -> usize {
        DEFAULT_LOG_TRUNCATE
    }

    /// Encode every character of `input` not in `immune`.
    fn encode(&self, immune: &ImmuneSet, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);
        for c in input.chars() {
            if immune.contains(c) {
                out.push(c);
            } else {
                out.push_str(&self.encode_character(immune, c));
            }
        }
        out
    }

    /// Decode `input`, passing through any character that does not start a
    /// valid escape.
    fn decode(&self, input: &str) -> String {
        let mut cursor = PushbackCursor::new(input);
        let mut out = String::with_capacity(input.len());
        let mut passed_through = 0usize;

        while cursor.has_next() {
            if let Some(c) = self.decode_character(&mut cursor) {
                out.push(c);
                continue;
            }
            match cursor.next() {
                Some(c) => {
                    out.push(c);
                    passed_through += 1;
                }
                None => break,
            }
        }

        trace!(
            passed_through,
            input = %truncate_for_log(input, self.log_truncate()),
            "Decoded SQL string"
        );
        out
    }
}

/// Truncate a string for logging purposes, respecting character boundaries.
pub(crate) fn truncate_for_log(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
