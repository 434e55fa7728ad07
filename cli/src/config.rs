//! Session files: ballot construction input plus an ordered operation list, in TOML.

use std::fmt;
use std::path::Path;

use ballot_types::VoterAddress;
use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// One ledger operation as submitted by a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    GrantRight {
        caller: VoterAddress,
        voter: VoterAddress,
    },
    Delegate {
        caller: VoterAddress,
        to: VoterAddress,
    },
    Vote {
        caller: VoterAddress,
        proposal: usize,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrantRight { caller, voter } => write!(f, "grant_right {caller} -> {voter}"),
            Self::Delegate { caller, to } => write!(f, "delegate {caller} -> {to}"),
            Self::Vote { caller, proposal } => write!(f, "vote {caller} for #{proposal}"),
        }
    }
}

/// A complete session: who chairs, what is on the ballot, and what happens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The authority allowed to grant voting rights.
    pub chairperson: VoterAddress,

    /// Proposal labels in ordinal order (each at most 32 bytes).
    pub proposals: Vec<String>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Stop at the first rejected operation instead of logging and continuing.
    #[serde(default)]
    pub fail_fast: bool,

    /// Operations applied in order.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl SessionConfig {
    /// Load a session from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse a session from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Checks that do not need a ledger: a non-empty ballot with labels that fit.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.proposals.is_empty() {
            return Err(CliError::Config("at least one proposal is required".into()));
        }
        for (index, label) in self.proposals.iter().enumerate() {
            ballot_types::ProposalName::new(label)
                .map_err(|e| CliError::Config(format!("proposal #{index}: {e}")))?;
        }
        Ok(())
    }

    /// An example session exercising every operation kind.
    pub fn template() -> Self {
        let chair = VoterAddress::from_low_u64_be(0xc0);
        let alice = VoterAddress::from_low_u64_be(0xa1);
        let bob = VoterAddress::from_low_u64_be(0xb0);
        Self {
            chairperson: chair,
            proposals: vec!["Proposal 1".into(), "Proposal 2".into(), "Proposal 3".into()],
            log_format: LogFormat::Human,
            log_level: default_log_level(),
            fail_fast: false,
            operations: vec![
                Operation::GrantRight {
                    caller: chair,
                    voter: alice,
                },
                Operation::GrantRight {
                    caller: chair,
                    voter: bob,
                },
                Operation::Delegate {
                    caller: bob,
                    to: alice,
                },
                Operation::Vote {
                    caller: alice,
                    proposal: 1,
                },
                Operation::Vote {
                    caller: chair,
                    proposal: 0,
                },
            ],
        }
    }
}
