//! Centralized constants for the SQL string codec.
//!
//! This module contains the escape table and the default values used by the
//! configuration layer, making them easy to find, understand, and modify.

// =============================================================================
// Escape Characters
// =============================================================================

/// Escape prefix used by the MySQL dialect.
pub const BACKSLASH: char = '\\';

/// String literal delimiter, doubled by the ANSI dialect.
pub const SINGLE_QUOTE: char = '\'';

// =============================================================================
// MySQL Escape Table
// =============================================================================

/// Characters with a dedicated MySQL escape sequence.
///
/// Each entry pairs the raw character with the character that follows the
/// backslash in its escape. Every other character is escaped by prefixing it
/// with a backslash.
pub const MYSQL_ESCAPES: [(char, char); 11] = [
    ('\u{00}', '0'),  // NUL
    ('\u{08}', 'b'),  // backspace
    ('\u{09}', 't'),  // tab
    ('\u{0A}', 'n'),  // line feed
    ('\u{0D}', 'r'),  // carriage return
    ('\u{1A}', 'Z'),  // Ctrl-Z
    ('\u{22}', '"'),  // double quote
    ('\u{25}', '%'),  // percent
    ('\u{27}', '\''), // single quote
    ('\u{5C}', '\\'), // backslash
    ('\u{5F}', '_'),  // underscore
];

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Environment variable selecting the codec mode.
pub const ENV_MODE: &str = "SQL_CODEC_MODE";

/// Environment variable listing immune characters.
pub const ENV_IMMUNE: &str = "SQL_CODEC_IMMUNE";

/// Environment variable bounding how much input is echoed into log events.
pub const ENV_LOG_TRUNCATE: &str = "SQL_CODEC_LOG_TRUNCATE";

/// Default number of input characters included in log events.
pub const DEFAULT_LOG_TRUNCATE: usize = 64;
