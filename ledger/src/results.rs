//! Serializable tally reports.

use ballot_types::VoterAddress;
use serde::{Deserialize, Serialize};

use crate::ledger::BallotLedger;

/// One proposal's standing in a [`BallotResults`] report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalTally {
    pub index: usize,
    pub name: String,
    pub vote_count: u64,
}

/// Point-in-time summary of a ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotResults {
    pub chairperson: VoterAddress,
    pub proposals: Vec<ProposalTally>,
    pub winning_proposal: usize,
    pub winner_name: String,
    pub total_votes: u64,
    /// Voters whose weight has been counted into a tally.
    pub voted: usize,
    /// Voters known to the registry.
    pub registered: usize,
}

impl BallotResults {
    pub fn from_ledger(ledger: &BallotLedger) -> Self {
        let proposals = ledger
            .proposals()
            .iter()
            .enumerate()
            .map(|(index, p)| ProposalTally {
                index,
                name: p.name.to_string_lossy(),
                vote_count: p.vote_count,
            })
            .collect();
        Self {
            chairperson: *ledger.chairperson(),
            proposals,
            winning_proposal: ledger.winning_proposal(),
            winner_name: ledger.winner_name().to_string_lossy(),
            total_votes: ledger.total_votes(),
            voted: ledger.voters().filter(|(_, v)| v.voted).count(),
            registered: ledger.voter_count(),
        }
    }
}
