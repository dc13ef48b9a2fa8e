//! Fundamental types for the agora election engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: participant and proposal identifiers, the election phase enum
//! with its legal-transition table, emitted events, and the error taxonomy.

pub mod error;
pub mod event;
pub mod id;
pub mod phase;

pub use error::ElectionError;
pub use event::Event;
pub use id::{ParticipantId, ProposalId};
pub use phase::Phase;
