//! Identity registry — maps participant identifiers to voter records.
//!
//! Answers two questions for the rest of the workspace: "is this caller a
//! registered voter" and "has this voter voted." Voters are created only
//! during registration and never deleted; a runoff restart clears their
//! ballot fields but leaves registration intact.

pub mod registry;
pub mod voter;

pub use registry::VoterRegistry;
pub use voter::Voter;
