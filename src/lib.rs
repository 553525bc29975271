//! # SQL String Codec
//!
//! Escaping and unescaping of untrusted input embedded in SQL string literals.
//!
//! This crate provides:
//! - **Codecs**: a [`Codec`] driver trait with a MySQL-family implementation
//!   supporting backslash escaping and ANSI quote doubling
//! - **Pushback cursor**: a scanner with mark/reset for speculative decoding
//! - **Configuration**: dialect and immune characters loaded from the environment
//!
//! ## Architecture
//!
//! Encoding walks the input one character at a time and lets the dialect
//! escape each character. Decoding wraps the input in a [`PushbackCursor`];
//! the dialect tries to read one escape, and on failure the cursor is rewound
//! and the next raw character is passed through unchanged. Decoding therefore
//! never fails on malformed input.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;

pub use codec::{Codec, ImmuneSet, Mode, PushbackCursor, SqlStringCodec};
pub use config::CodecConfig;
pub use error::CodecError;

/// Escape `input` for a SQL string literal in the given dialect.
///
/// ```
/// use sql_string_codec::{encode_for_sql, Mode};
///
/// assert_eq!(encode_for_sql(Mode::Ansi, "it's"), "it''s");
/// ```
pub fn encode_for_sql(mode: Mode, input: &str) -> String {
    SqlStringCodec::new(mode).encode(&ImmuneSet::empty(), input)
}

/// Reverse [`encode_for_sql`].
pub fn decode_from_sql(mode: Mode, input: &str) -> String {
    SqlStringCodec::new(mode).decode(input)
}
