use ballot_ledger::BallotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot open ballot: {0}")]
    Open(#[source] BallotError),

    #[error("operation #{step} ({operation}) rejected: {source}")]
    Rejected {
        step: usize,
        operation: String,
        #[source]
        source: BallotError,
    },
}
