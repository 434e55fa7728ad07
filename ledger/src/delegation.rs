//! Delegation chain resolution.
//!
//! Delegation edges live in the voter map (`Voter::delegate`), keyed by
//! identity. Resolution is an iterative walk with a visited set and a hop
//! bound, so it terminates even if the map were ever to hold a cycle.

use std::collections::{HashMap, HashSet};

use ballot_types::VoterAddress;

use crate::error::BallotError;
use crate::voter::Voter;

/// Follow the delegation chain starting at `target` on behalf of `origin`.
///
/// Returns the terminal delegate: the first principal on the chain with no
/// delegate of its own (possibly `target` itself, possibly a principal with
/// no record yet). Fails with [`BallotError::DelegationLoop`] if the chain
/// leads back to `origin`, revisits a principal, or runs longer than the
/// number of known voters.
pub fn resolve_terminal(
    voters: &HashMap<VoterAddress, Voter>,
    origin: &VoterAddress,
    target: &VoterAddress,
) -> Result<VoterAddress, BallotError> {
    let mut current = *target;
    let mut visited = HashSet::new();
    // Every hop but the last leaves a voter with a record, so a sound chain
    // has at most `voters.len() + 1` nodes.
    for _ in 0..=voters.len() {
        if current == *origin || !visited.insert(current) {
            return Err(BallotError::DelegationLoop);
        }
        match voters.get(&current).and_then(|v| v.delegate) {
            Some(next) => current = next,
            None => return Ok(current),
        }
    }
    Err(BallotError::DelegationLoop)
}
