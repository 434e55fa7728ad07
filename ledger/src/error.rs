use ballot_types::TypesError;
use thiserror::Error;

/// Rejections raised by ledger operations.
///
/// Every variant is a precondition violation; an operation that returns one
/// has left the ledger untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BallotError {
    #[error("only the chairperson can give right to vote")]
    Unauthorized,

    #[error("the voter already voted")]
    AlreadyVoted,

    #[error("the voter already has voting rights")]
    AlreadyHasRights,

    #[error("has no right to vote")]
    NoRight,

    #[error("self-delegation is disallowed")]
    SelfDelegation,

    #[error("found loop in delegation")]
    DelegationLoop,

    #[error("proposal {index} out of range ({count} proposals)")]
    InvalidProposal { index: usize, count: usize },

    #[error("a ballot needs at least one proposal")]
    NoProposals,

    #[error("invalid proposal name: {0}")]
    InvalidProposalName(#[from] TypesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_proposal_mentions_bounds() {
        let err = BallotError::InvalidProposal { index: 7, count: 3 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn name_error_converts() {
        let err: BallotError = TypesError::NameTooLong { len: 40, max: 32 }.into();
        assert!(matches!(err, BallotError::InvalidProposalName(_)));
        assert!(err.to_string().contains("40"));
    }
}
