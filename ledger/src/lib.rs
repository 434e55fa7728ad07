//! Weighted ballot ledger.
//!
//! A single chairperson grants voting rights over a fixed list of proposals.
//! Voters either vote directly or delegate their weight along a delegation
//! chain; the proposal with the strictly greatest weighted tally wins, ties
//! going to the earliest-declared proposal.
//!
//! The ledger is a plain state machine: every operation takes the caller's
//! identity explicitly and either commits fully or fails without mutation.

pub mod delegation;
pub mod error;
pub mod event;
pub mod ledger;
pub mod proposal;
pub mod results;
pub mod shared;
pub mod voter;

pub use delegation::resolve_terminal;
pub use error::BallotError;
pub use event::{DelegationOutcome, EventBus, LedgerEvent};
pub use ledger::BallotLedger;
pub use proposal::Proposal;
pub use results::{BallotResults, ProposalTally};
pub use shared::SharedLedger;
pub use voter::{Voter, VoterStatus};
