//! Fundamental types for the ballot ledger.
//!
//! This crate defines the value types shared across the workspace:
//! voter addresses (principal identities) and fixed-width proposal names.

pub mod address;
pub mod error;
pub mod proposal_name;

pub use address::VoterAddress;
pub use error::TypesError;
pub use proposal_name::ProposalName;
