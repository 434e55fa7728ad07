//! Proposals and their tallies.

use ballot_types::ProposalName;
use serde::{Deserialize, Serialize};

/// A proposal fixed at ledger construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub name: ProposalName,
    /// Accumulated weight; only ever increases.
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(name: ProposalName) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }
}
