//! Voter records.

use ballot_types::VoterAddress;
use serde::{Deserialize, Serialize};

/// Per-principal voting record.
///
/// Unknown principals are represented by `Voter::default()`: no weight,
/// not voted, no delegate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Voting power, accumulated from a grant and incoming delegations.
    pub weight: u64,
    /// Whether this voter's weight has been fixed into a proposal tally.
    pub voted: bool,
    /// Immediate delegate, if this voter delegated.
    pub delegate: Option<VoterAddress>,
    /// Proposal ordinal the weight was counted for.
    pub vote: Option<usize>,
}

/// Where a voter sits in the rights/vote lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoterStatus {
    /// No weight; cannot vote or delegate.
    Unregistered,
    /// Holds weight and may still vote or delegate.
    Enfranchised,
    /// Handed weight to a delegate who has not voted yet.
    Delegated,
    /// Weight counted for a proposal. Terminal.
    Committed,
}

impl Voter {
    /// The chairperson's record at construction.
    pub(crate) fn chairperson() -> Self {
        Self {
            weight: 1,
            ..Self::default()
        }
    }

    pub fn status(&self) -> VoterStatus {
        if self.voted {
            VoterStatus::Committed
        } else if self.delegate.is_some() {
            VoterStatus::Delegated
        } else if self.weight > 0 {
            VoterStatus::Enfranchised
        } else {
            VoterStatus::Unregistered
        }
    }

    /// Whether the voter has spent its vote, directly or by delegating.
    pub fn has_acted(&self) -> bool {
        self.voted || self.delegate.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.weight > 0
    }
}
