//! A cloneable, serialized handle to one ledger.
//!
//! Each operation holds the lock for its whole duration, so grants,
//! delegations, and votes applied through any clone never interleave.

use std::sync::Arc;

use ballot_types::{ProposalName, VoterAddress};
use parking_lot::Mutex;

use crate::error::BallotError;
use crate::event::LedgerEvent;
use crate::ledger::BallotLedger;
use crate::results::BallotResults;
use crate::voter::Voter;

#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<Mutex<BallotLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: BallotLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn grant_right(
        &self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), BallotError> {
        self.inner.lock().grant_right(caller, voter)
    }

    pub fn delegate(&self, caller: &VoterAddress, to: &VoterAddress) -> Result<(), BallotError> {
        self.inner.lock().delegate(caller, to)
    }

    pub fn vote(&self, caller: &VoterAddress, proposal: usize) -> Result<(), BallotError> {
        self.inner.lock().vote(caller, proposal)
    }

    pub fn winning_proposal(&self) -> usize {
        self.inner.lock().winning_proposal()
    }

    pub fn winner_name(&self) -> ProposalName {
        self.inner.lock().winner_name()
    }

    pub fn voter(&self, address: &VoterAddress) -> Voter {
        self.inner.lock().voter(address)
    }

    pub fn results(&self) -> BallotResults {
        self.inner.lock().results()
    }

    pub fn subscribe(&self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.inner.lock().subscribe(listener);
    }

    /// Run a read-only closure against the ledger under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&BallotLedger) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<BallotLedger> for SharedLedger {
    fn from(ledger: BallotLedger) -> Self {
        Self::new(ledger)
    }
}
