//! Replays a session against a fresh in-memory ledger.
//!
//! This is the submitter side: it hands each operation to the ledger with
//! the caller identity from the session file and records whether the ledger
//! accepted it. Rejections are ordinary outcomes, not failures of the run,
//! unless the session asks to stop at the first one.

use ballot_ledger::{BallotLedger, BallotResults};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Operation, SessionConfig};
use crate::error::CliError;

/// An operation the ledger refused.
#[derive(Clone, Debug, Serialize)]
pub struct Rejection {
    /// 1-based position in the session's operation list.
    pub step: usize,
    pub operation: Operation,
    pub reason: String,
}

/// Outcome of replaying a whole session.
#[derive(Clone, Debug, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    pub results: BallotResults,
}

fn apply(ledger: &mut BallotLedger, op: &Operation) -> Result<(), ballot_ledger::BallotError> {
    match op {
        Operation::GrantRight { caller, voter } => ledger.grant_right(caller, voter),
        Operation::Delegate { caller, to } => ledger.delegate(caller, to),
        Operation::Vote { caller, proposal } => ledger.vote(caller, *proposal),
    }
}

/// Open the ballot described by `config` and apply its operations in order.
pub fn replay(config: &SessionConfig) -> Result<ReplayReport, CliError> {
    let mut ledger =
        BallotLedger::from_names(config.chairperson, &config.proposals).map_err(CliError::Open)?;
    info!(
        chairperson = %config.chairperson,
        proposals = config.proposals.len(),
        operations = config.operations.len(),
        "replaying session"
    );

    let mut applied = 0;
    let mut rejected = Vec::new();
    for (index, op) in config.operations.iter().enumerate() {
        let step = index + 1;
        match apply(&mut ledger, op) {
            Ok(()) => {
                applied += 1;
                info!(step, %op, "accepted");
            }
            Err(source) if config.fail_fast => {
                return Err(CliError::Rejected {
                    step,
                    operation: op.to_string(),
                    source,
                });
            }
            Err(e) => {
                warn!(step, %op, error = %e, "rejected");
                rejected.push(Rejection {
                    step,
                    operation: op.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let results = ledger.results();
    info!(
        winner = results.winning_proposal,
        name = %results.winner_name,
        total_votes = results.total_votes,
        "session complete"
    );
    Ok(ReplayReport {
        applied,
        rejected,
        results,
    })
}
