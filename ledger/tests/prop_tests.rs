use proptest::prelude::*;

use ballot_ledger::{BallotError, BallotLedger, VoterStatus};
use ballot_types::VoterAddress;

const PROPOSALS: usize = 3;
const PRINCIPALS: u64 = 8;

#[derive(Clone, Debug)]
enum Op {
    Grant { caller: u64, voter: u64 },
    Delegate { caller: u64, to: u64 },
    Vote { caller: u64, proposal: usize },
}

fn addr(n: u64) -> VoterAddress {
    VoterAddress::from_low_u64_be(n)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Principal 0 is the chairperson; grants are mostly issued by it so that
    // the interesting paths get weight to work with.
    prop_oneof![
        (prop_oneof![3 => Just(0u64), 1 => 0..PRINCIPALS], 0..PRINCIPALS)
            .prop_map(|(caller, voter)| Op::Grant { caller, voter }),
        (0..PRINCIPALS, 0..PRINCIPALS).prop_map(|(caller, to)| Op::Delegate { caller, to }),
        (0..PRINCIPALS, 0..PROPOSALS + 1)
            .prop_map(|(caller, proposal)| Op::Vote { caller, proposal }),
    ]
}

fn apply(ledger: &mut BallotLedger, op: &Op) -> Result<(), BallotError> {
    match *op {
        Op::Grant { caller, voter } => ledger.grant_right(&addr(caller), &addr(voter)),
        Op::Delegate { caller, to } => ledger.delegate(&addr(caller), &addr(to)),
        Op::Vote { caller, proposal } => ledger.vote(&addr(caller), proposal),
    }
}

fn new_ledger() -> BallotLedger {
    BallotLedger::from_names(addr(0), &["A", "B", "C"]).unwrap()
}

/// Snapshot of everything an operation could touch.
fn state(ledger: &BallotLedger) -> (Vec<u64>, Vec<(VoterAddress, ballot_ledger::Voter)>) {
    let tallies = ledger.proposals().iter().map(|p| p.vote_count).collect();
    let mut voters: Vec<_> = ledger.voters().map(|(a, v)| (*a, *v)).collect();
    voters.sort_by_key(|(a, _)| *a);
    (tallies, voters)
}

proptest! {
    /// Tallies always equal the weight of voters who have voted.
    #[test]
    fn tallies_match_voted_weight(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = new_ledger();
        for op in &ops {
            let _ = apply(&mut ledger, op);
            let voted_weight: u64 = ledger
                .voters()
                .filter(|(_, v)| v.voted)
                .map(|(_, v)| v.weight)
                .sum();
            prop_assert_eq!(ledger.total_votes(), voted_weight, "after {:?}", op);
        }
    }

    /// A rejected operation leaves the ledger exactly as it was.
    #[test]
    fn rejected_operations_do_not_mutate(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = new_ledger();
        for op in &ops {
            let before = state(&ledger);
            if apply(&mut ledger, op).is_err() {
                prop_assert_eq!(state(&ledger), before, "after rejected {:?}", op);
            }
        }
    }

    /// Committed voters stay committed with the same weight and choice, and
    /// tallies never decrease.
    #[test]
    fn commitments_are_permanent(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = new_ledger();
        for op in &ops {
            let (tallies_before, voters_before) = state(&ledger);
            let _ = apply(&mut ledger, op);
            let (tallies_after, _) = state(&ledger);
            for (before, after) in tallies_before.iter().zip(&tallies_after) {
                prop_assert!(after >= before);
            }
            for (address, before) in voters_before.iter().filter(|(_, v)| v.voted) {
                let after = ledger.voter(address);
                prop_assert_eq!(after.status(), VoterStatus::Committed);
                prop_assert_eq!(after.weight, before.weight);
                prop_assert_eq!(after.vote, before.vote);
            }
        }
    }

    /// Delegation edges never form a cycle.
    #[test]
    fn delegation_graph_stays_acyclic(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = new_ledger();
        for op in &ops {
            let _ = apply(&mut ledger, op);
        }
        let bound = ledger.voter_count() + 1;
        for (start, _) in ledger.voters() {
            let mut current = *start;
            let mut hops = 0;
            while let Some(next) = ledger.voter(&current).delegate {
                current = next;
                hops += 1;
                prop_assert!(hops <= bound, "cycle reachable from {}", start);
            }
        }
    }

    /// The winner holds the maximum tally and no earlier proposal ties it.
    #[test]
    fn winner_is_first_maximum(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ledger = new_ledger();
        for op in &ops {
            let _ = apply(&mut ledger, op);
        }
        let tallies: Vec<u64> = ledger.proposals().iter().map(|p| p.vote_count).collect();
        let winner = ledger.winning_proposal();
        let max = *tallies.iter().max().unwrap();
        prop_assert_eq!(tallies[winner], max);
        prop_assert!(tallies[..winner].iter().all(|t| *t < max));
        prop_assert_eq!(ledger.winner_name(), ledger.proposal(winner).unwrap().name);
    }
}
