//! Workflow state machine — owns the election context and every guarded
//! entry point.
//!
//! All shared state (voter registry, proposal ledger, winners, phase) lives
//! in a single [`Election`] value; every mutation passes through its guarded
//! operations, which check all preconditions before touching anything. The
//! `&mut self` receivers give the strictly serialized execution model for
//! free: no interleaving, no partial application.
//!
//! Entering the final phase runs the tally, and an exact tie triggers the
//! runoff restart in [`runoff`] before the call returns.

pub mod events;
pub mod machine;
pub mod oracle;
pub mod runoff;

pub use events::EventLog;
pub use machine::Election;
pub use oracle::{AdminOracle, SingleAdmin};
