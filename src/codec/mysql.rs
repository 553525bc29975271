//! MySQL-family string literal codec.
//!
//! Two dialects are supported:
//! - [`Mode::Mysql`]: backslash escaping, as in MySQL's default SQL mode
//! - [`Mode::Ansi`]: quote doubling, as in ANSI SQL (and MySQL with `ANSI_QUOTES`)

use super::{Codec, ImmuneSet, PushbackCursor};
use crate::constants::{BACKSLASH, DEFAULT_LOG_TRUNCATE, MYSQL_ESCAPES, SINGLE_QUOTE};
use crate::error::CodecError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Raw character to the character following the backslash in its escape.
static ENCODE_TABLE: Lazy<HashMap<char, char>> =
    Lazy::new(|| MYSQL_ESCAPES.iter().copied().collect());

/// Character following a backslash to the raw character it stands for.
static DECODE_TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    MYSQL_ESCAPES
        .iter()
        .map(|&(raw, escaped)| (escaped, raw))
        .collect()
});

/// SQL string escaping dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Backslash escaping: `'` becomes `\'`, NUL becomes `\0`, and every
    /// character without a dedicated escape is prefixed with `\`.
    #[default]
    Mysql,

    /// Quote doubling: `'` becomes `''`, everything else passes through.
    Ansi,
}

impl Mode {
    /// Legacy numeric value of this mode.
    pub fn value(self) -> i64 {
        match self {
            Mode::Mysql => 0,
            Mode::Ansi => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Mysql => "mysql",
            Mode::Ansi => "ansi",
        }
    }
}

impl TryFrom<i64> for Mode {
    type Error = CodecError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Mysql),
            1 => Ok(Mode::Ansi),
            other => Err(CodecError::unknown_mode(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "backslash" | "0" => Ok(Mode::Mysql),
            "ansi" | "quote" | "1" => Ok(Mode::Ansi),
            _ => Err(CodecError::unknown_mode(s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codec for MySQL string literals.
///
/// The mode is fixed at construction, so a built codec can never be in an
/// invalid state and all operations are total.
///
/// # Examples
///
/// ```
/// use sql_string_codec::codec::{Codec, ImmuneSet, Mode, SqlStringCodec};
///
/// let ansi = SqlStringCodec::new(Mode::Ansi);
/// assert_eq!(ansi.encode(&ImmuneSet::empty(), "O'Brien"), "O''Brien");
/// assert_eq!(ansi.decode("O''Brien"), "O'Brien");
///
/// let mysql = SqlStringCodec::new(Mode::Mysql);
/// assert_eq!(mysql.encode(&ImmuneSet::from_chars("abc"), "a'b"), "a\\'b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlStringCodec {
    mode: Mode,
    log_truncate: usize,
}

impl SqlStringCodec {
    /// Create a codec for the given dialect.
    pub fn new(mode: Mode) -> Self {
        debug!(mode = %mode, "Created SQL string codec");
        Self {
            mode,
            log_truncate: DEFAULT_LOG_TRUNCATE,
        }
    }

    /// Create a codec from a legacy numeric mode (0 = MySQL, 1 = ANSI).
    pub fn try_from_mode_value(value: i64) -> Result<Self, CodecError> {
        Ok(Self::new(Mode::try_from(value)?))
    }

    /// Set how many input characters are echoed into log events.
    pub fn with_log_truncate(mut self, max_chars: usize) -> Self {
        self.log_truncate = max_chars;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn encode_mysql(c: char) -> String {
        let escaped = ENCODE_TABLE.get(&c).copied().unwrap_or(c);
        let mut out = String::with_capacity(1 + escaped.len_utf8());
        out.push(BACKSLASH);
        out.push(escaped);
        out
    }

    fn encode_ansi(c: char) -> String {
        if c == SINGLE_QUOTE {
            "''".to_string()
        } else {
            c.to_string()
        }
    }

    /// `\x` decodes to the table entry for `x`, or to `x` itself.
    fn decode_mysql(cursor: &mut PushbackCursor<'_>) -> Option<char> {
        cursor.mark();

        if cursor.next() != Some(BACKSLASH) {
            cursor.reset();
            return None;
        }

        let Some(second) = cursor.next() else {
            cursor.reset();
            return None;
        };

        Some(DECODE_TABLE.get(&second).copied().unwrap_or(second))
    }

    /// `''` decodes to `'`; anything else is not an escape.
    fn decode_ansi(cursor: &mut PushbackCursor<'_>) -> Option<char> {
        cursor.mark();

        if cursor.next() != Some(SINGLE_QUOTE) || cursor.next() != Some(SINGLE_QUOTE) {
            cursor.reset();
            return None;
        }

        Some(SINGLE_QUOTE)
    }
}

impl Default for SqlStringCodec {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Codec for SqlStringCodec {
    fn encode_character(&self, immune: &ImmuneSet, c: char) -> String {
        if immune.contains(c) {
            return c.to_string();
        }

        match self.mode {
            Mode::Mysql => Self::encode_mysql(c),
            Mode::Ansi => Self::encode_ansi(c),
        }
    }

    fn decode_character(&self, cursor: &mut PushbackCursor<'_>) -> Option<char> {
        match self.mode {
            Mode::Mysql => Self::decode_mysql(cursor),
            Mode::Ansi => Self::decode_ansi(cursor),
        }
    }

    fn log_truncate(&self) -> usize {
        self.log_truncate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql() -> SqlStringCodec {
        SqlStringCodec::new(Mode::Mysql)
    }

    fn ansi() -> SqlStringCodec {
        SqlStringCodec::new(Mode::Ansi)
    }

    fn none() -> ImmuneSet {
        ImmuneSet::empty()
    }

    #[test]
    fn test_mysql_table_escapes() {
        let codec = mysql();
        assert_eq!(codec.encode_character(&none(), '\0'), "\\0");
        assert_eq!(codec.encode_character(&none(), '\u{08}'), "\\b");
        assert_eq!(codec.encode_character(&none(), '\t'), "\\t");
        assert_eq!(codec.encode_character(&none(), '\n'), "\\n");
        assert_eq!(codec.encode_character(&none(), '\r'), "\\r");
        assert_eq!(codec.encode_character(&none(), '\u{1A}'), "\\Z");
        assert_eq!(codec.encode_character(&none(), '"'), "\\\"");
        assert_eq!(codec.encode_character(&none(), '%'), "\\%");
        assert_eq!(codec.encode_character(&none(), '\''), "\\'");
        assert_eq!(codec.encode_character(&none(), '\\'), "\\\\");
        assert_eq!(codec.encode_character(&none(), '_'), "\\_");
    }

    #[test]
    fn test_mysql_fallback_prefixes_everything_else() {
        let codec = mysql();
        assert_eq!(codec.encode_character(&none(), 'A'), "\\A");
        assert_eq!(codec.encode_character(&none(), '7'), "\\7");
        assert_eq!(codec.encode_character(&none(), ' '), "\\ ");
        assert_eq!(codec.encode_character(&none(), 'ß'), "\\ß");
    }

    #[test]
    fn test_immune_characters_are_untouched() {
        let immune = ImmuneSet::from_chars("'A");
        for codec in [mysql(), ansi()] {
            assert_eq!(codec.encode_character(&immune, '\''), "'");
            assert_eq!(codec.encode_character(&immune, 'A'), "A");
        }
    }

    #[test]
    fn test_ansi_only_doubles_quotes() {
        let codec = ansi();
        assert_eq!(codec.encode_character(&none(), '\''), "''");
        assert_eq!(codec.encode_character(&none(), '"'), "\"");
        assert_eq!(codec.encode_character(&none(), '\\'), "\\");
        assert_eq!(codec.encode_character(&none(), '\0'), "\0");
    }

    #[test]
    fn test_mysql_decode_character_consumes_escape() {
        let mut cursor = PushbackCursor::new("\\nX");
        assert_eq!(mysql().decode_character(&mut cursor), Some('\n'));
        assert_eq!(cursor.remainder(), "X");

        let mut cursor = PushbackCursor::new("\\q");
        assert_eq!(mysql().decode_character(&mut cursor), Some('q'));
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_mysql_decode_character_rolls_back() {
        let codec = mysql();

        let mut cursor = PushbackCursor::new("ab");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.next(), Some('a'));

        let mut cursor = PushbackCursor::new("\\");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = PushbackCursor::new("");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_ansi_decode_character_rolls_back() {
        let codec = ansi();

        let mut cursor = PushbackCursor::new("'B");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.next(), Some('\''));

        let mut cursor = PushbackCursor::new("'");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.position(), 0);

        let mut cursor = PushbackCursor::new("x''");
        assert_eq!(codec.decode_character(&mut cursor), None);
        assert_eq!(cursor.next(), Some('x'));
    }

    #[test]
    fn test_ansi_decode_character_consumes_pair() {
        let mut cursor = PushbackCursor::new("'''");
        assert_eq!(ansi().decode_character(&mut cursor), Some('\''));
        assert_eq!(cursor.remainder(), "'");
    }

    #[test]
    fn test_mysql_decode_strings() {
        let codec = mysql();
        assert_eq!(codec.decode("\\0"), "\0");
        assert_eq!(codec.decode("\\A\\B"), "AB");
        assert_eq!(codec.decode("It\\'s"), "It's");
        assert_eq!(codec.decode("\\\\\\\\"), "\\\\");
        assert_eq!(codec.decode("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_ansi_decode_strings() {
        let codec = ansi();
        assert_eq!(codec.decode("O''Brien"), "O'Brien");
        assert_eq!(codec.decode("O'Brien"), "O'Brien");
        assert_eq!(codec.decode("''''"), "''");
        assert_eq!(codec.decode("'''"), "''");
    }

    #[test]
    fn test_mode_from_value() {
        assert_eq!(Mode::try_from(0_i64).unwrap(), Mode::Mysql);
        assert_eq!(Mode::try_from(1_i64).unwrap(), Mode::Ansi);
        assert!(matches!(
            Mode::try_from(2_i64),
            Err(CodecError::UnknownMode { .. })
        ));
        assert!(SqlStringCodec::try_from_mode_value(-1).is_err());
        assert_eq!(
            SqlStringCodec::try_from_mode_value(1).unwrap().mode(),
            Mode::Ansi
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("MySQL".parse::<Mode>().unwrap(), Mode::Mysql);
        assert_eq!(" ansi ".parse::<Mode>().unwrap(), Mode::Ansi);
        assert_eq!("quote".parse::<Mode>().unwrap(), Mode::Ansi);
        assert_eq!("0".parse::<Mode>().unwrap(), Mode::Mysql);
        assert!("oracle".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_round_trips_through_display() {
        for mode in [Mode::Mysql, Mode::Ansi] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
            assert_eq!(Mode::try_from(mode.value()).unwrap(), mode);
        }
    }

    #[test]
    fn test_codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqlStringCodec>();
    }
}
