//! Structured logging initialisation via `tracing`.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`] — human-readable lines (development).
//! - [`LogFormat::Json`] — newline-delimited JSON (log aggregation).
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable. When `RUST_LOG` is not set, the caller-supplied
//! `level` string is used (e.g. `"info"`, `"warn,ballot_ledger=debug"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log format {0:?}, expected \"human\" or \"json\"")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
        })
    }
}

/// Initialise the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Human => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tfmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tfmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

/// Initialise a human-readable subscriber filtered only by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for format in [LogFormat::Human, LogFormat::Json] {
            assert_eq!(format.to_string().parse::<LogFormat>(), Ok(format));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), "\"json\"");
        let parsed: LogFormat = serde_json::from_str("\"human\"").unwrap();
        assert_eq!(parsed, LogFormat::Human);
    }

    #[test]
    fn default_is_human() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }
}
