//! Configuration management for the SQL string codec.
//!
//! Configuration is loaded from environment variables following the 12-factor app pattern.

use crate::codec::{ImmuneSet, Mode, SqlStringCodec};
use crate::constants::{DEFAULT_LOG_TRUNCATE, ENV_IMMUNE, ENV_LOG_TRUNCATE, ENV_MODE};
use crate::error::CodecError;
use serde::{Deserialize, Serialize};

/// Codec configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Escaping dialect
    pub mode: Mode,

    /// Characters never escaped
    pub immune: ImmuneSet,

    /// Maximum input characters echoed into log events
    pub log_truncate: usize,
}

impl CodecConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// ## Optional
    /// - `SQL_CODEC_MODE`: Escaping dialect (`mysql`, `backslash`, `0`, `ansi`, `quote`, `1`; default: mysql)
    /// - `SQL_CODEC_IMMUNE`: Characters that are never escaped (default: none)
    /// - `SQL_CODEC_LOG_TRUNCATE`: Input characters included in log events (default: 64)
    pub fn from_env() -> Result<Self, CodecError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CodecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(ENV_MODE) {
            Some(value) => value.parse::<Mode>().map_err(|_| {
                CodecError::config(format!(
                    "{ENV_MODE} must be one of mysql, backslash, ansi, quote, 0 or 1 (got '{value}')"
                ))
            })?,
            None => Mode::default(),
        };

        let immune = lookup(ENV_IMMUNE)
            .map(|chars| ImmuneSet::from_chars(&chars))
            .unwrap_or_default();

        let log_truncate = match lookup(ENV_LOG_TRUNCATE) {
            Some(value) => value.trim().parse().map_err(|_| {
                CodecError::config(format!(
                    "{ENV_LOG_TRUNCATE} must be a non-negative integer (got '{value}')"
                ))
            })?,
            None => DEFAULT_LOG_TRUNCATE,
        };

        Ok(Self {
            mode,
            immune,
            log_truncate,
        })
    }

    /// Build the codec this configuration describes.
    pub fn build_codec(&self) -> SqlStringCodec {
        SqlStringCodec::new(self.mode).with_log_truncate(self.log_truncate)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            immune: ImmuneSet::empty(),
            log_truncate: DEFAULT_LOG_TRUNCATE,
        }
    }
}
