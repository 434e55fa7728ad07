//! The ballot ledger state machine.
//!
//! Holds the chairperson, the voter registry, and the fixed proposal list.
//! Mutating operations validate every precondition before touching state,
//! so a rejected operation is a no-op.

use std::collections::HashMap;

use ballot_types::{ProposalName, VoterAddress};
use tracing::debug;

use crate::delegation::resolve_terminal;
use crate::error::BallotError;
use crate::event::{DelegationOutcome, EventBus, LedgerEvent};
use crate::proposal::Proposal;
use crate::results::BallotResults;
use crate::voter::Voter;

/// A single-chairperson weighted ballot.
#[derive(Debug)]
pub struct BallotLedger {
    chairperson: VoterAddress,
    voters: HashMap<VoterAddress, Voter>,
    proposals: Vec<Proposal>,
    events: EventBus,
}

impl BallotLedger {
    /// Open a ballot over `proposals`, with `chairperson` holding weight 1.
    pub fn new(
        chairperson: VoterAddress,
        proposals: Vec<ProposalName>,
    ) -> Result<Self, BallotError> {
        if proposals.is_empty() {
            return Err(BallotError::NoProposals);
        }
        let mut voters = HashMap::new();
        voters.insert(chairperson, Voter::chairperson());
        debug!(
            chairperson = %chairperson,
            proposals = proposals.len(),
            "ballot opened"
        );
        Ok(Self {
            chairperson,
            voters,
            proposals: proposals.into_iter().map(Proposal::new).collect(),
            events: EventBus::new(),
        })
    }

    /// Like [`BallotLedger::new`], validating UTF-8 labels into names first.
    pub fn from_names<S: AsRef<str>>(
        chairperson: VoterAddress,
        names: &[S],
    ) -> Result<Self, BallotError> {
        let names = names
            .iter()
            .map(|n| ProposalName::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(chairperson, names)
    }

    /// Register a listener for events emitted after successful mutations.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    // ── Operations ─────────────────────────────────────────────────────

    /// Give `voter` the right to vote (weight 1). Chairperson only.
    pub fn grant_right(
        &mut self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), BallotError> {
        if *caller != self.chairperson {
            return Err(BallotError::Unauthorized);
        }
        let current = self.voter(voter);
        if current.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if current.weight != 0 {
            return Err(BallotError::AlreadyHasRights);
        }

        self.voters.entry(*voter).or_default().weight = 1;

        debug!(voter = %voter, "right to vote granted");
        self.events.emit(&LedgerEvent::RightGranted { voter: *voter });
        Ok(())
    }

    /// Delegate the caller's whole weight to `to`.
    ///
    /// The chain starting at `to` is resolved first. If its terminal voter
    /// already voted, the caller's weight is added to that proposal and the
    /// caller counts as voted; otherwise the terminal voter's weight grows.
    pub fn delegate(
        &mut self,
        caller: &VoterAddress,
        to: &VoterAddress,
    ) -> Result<(), BallotError> {
        let sender = self.voter(caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.has_acted() {
            return Err(BallotError::AlreadyVoted);
        }
        if caller == to {
            return Err(BallotError::SelfDelegation);
        }

        let terminal = resolve_terminal(&self.voters, caller, to)?;
        let weight = sender.weight;
        let terminal_record = self.voter(&terminal);

        let outcome = match (terminal_record.voted, terminal_record.vote) {
            (true, Some(proposal)) => {
                self.proposals[proposal].vote_count += weight;
                let record = self.voters.entry(*caller).or_default();
                record.delegate = Some(*to);
                record.voted = true;
                record.vote = Some(proposal);
                DelegationOutcome::Counted { proposal }
            }
            _ => {
                let record = self.voters.entry(terminal).or_default();
                record.weight += weight;
                let delegate_weight = record.weight;
                self.voters.entry(*caller).or_default().delegate = Some(*to);
                DelegationOutcome::Accumulated { delegate_weight }
            }
        };

        debug!(
            from = %caller,
            to = %to,
            terminal = %terminal,
            weight,
            ?outcome,
            "vote delegated"
        );
        self.events.emit(&LedgerEvent::Delegated {
            from: *caller,
            to: *to,
            terminal,
            weight,
            outcome,
        });
        Ok(())
    }

    /// Vote for the proposal at ordinal `proposal` with the caller's whole weight.
    pub fn vote(&mut self, caller: &VoterAddress, proposal: usize) -> Result<(), BallotError> {
        let sender = self.voter(caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.has_acted() {
            return Err(BallotError::AlreadyVoted);
        }
        if proposal >= self.proposals.len() {
            return Err(BallotError::InvalidProposal {
                index: proposal,
                count: self.proposals.len(),
            });
        }

        let record = self.voters.entry(*caller).or_default();
        record.voted = true;
        record.vote = Some(proposal);
        let weight = record.weight;
        self.proposals[proposal].vote_count += weight;

        debug!(voter = %caller, proposal, weight, "vote cast");
        self.events.emit(&LedgerEvent::VoteCast {
            voter: *caller,
            proposal,
            weight,
        });
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Ordinal of the proposal with the strictly greatest tally.
    ///
    /// Ties go to the lowest ordinal; with no votes at all this is 0.
    pub fn winning_proposal(&self) -> usize {
        let mut winner = 0;
        let mut best = 0;
        for (index, proposal) in self.proposals.iter().enumerate() {
            if proposal.vote_count > best {
                best = proposal.vote_count;
                winner = index;
            }
        }
        winner
    }

    /// Name of [`BallotLedger::winning_proposal`].
    pub fn winner_name(&self) -> ProposalName {
        self.proposals[self.winning_proposal()].name
    }

    pub fn chairperson(&self) -> &VoterAddress {
        &self.chairperson
    }

    /// The record for `address`, or the empty record if it was never referenced.
    pub fn voter(&self, address: &VoterAddress) -> Voter {
        self.voters.get(address).copied().unwrap_or_default()
    }

    /// Whether `address` has a record in the registry.
    pub fn is_known(&self, address: &VoterAddress) -> bool {
        self.voters.contains_key(address)
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Iterate over every registered voter.
    pub fn voters(&self) -> impl Iterator<Item = (&VoterAddress, &Voter)> {
        self.voters.iter()
    }

    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// Sum of all proposal tallies.
    pub fn total_votes(&self) -> u64 {
        self.proposals.iter().map(|p| p.vote_count).sum()
    }

    /// Build a serializable report of the current tallies.
    pub fn results(&self) -> BallotResults {
        BallotResults::from_ledger(self)
    }
}
