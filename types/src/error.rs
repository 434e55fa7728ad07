//! Errors raised while constructing or parsing fundamental types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid voter address: {0}")]
    InvalidAddress(String),

    #[error("proposal name is {len} bytes, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },
}
