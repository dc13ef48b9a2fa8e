//! Proposal ledger — stores proposals keyed by an id derived from the
//! proposer's identity.
//!
//! Proposals are kept in registration order (the tally depends on it) and
//! deduplicated three ways: by derived id, by description content, and by a
//! lifetime per-proposer set that survives runoff narrowing.

pub mod ledger;
pub mod proposal;

pub use ledger::ProposalLedger;
pub use proposal::Proposal;
