//! Error taxonomy shared across crates.

use crate::id::{ParticipantId, ProposalId};
use crate::phase::Phase;
use thiserror::Error;

/// Every failure an election operation can report.
///
/// All of these are synchronous, recoverable-by-caller rejections — never
/// process-fatal. Guards run before any mutation, so a returned error means
/// state is unchanged and a retry is always safe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElectionError {
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("operation not permitted during {phase}")]
    WrongPhase { phase: Phase },

    #[error("the election session is already over")]
    SessionOver,

    #[error("insufficient registered voters: {have} < {need}")]
    InsufficientVoters { have: usize, need: usize },

    #[error("insufficient proposals: {have} < {need}")]
    InsufficientProposals { have: usize, need: usize },

    #[error("no votes have been cast")]
    NoVotesCast,

    #[error("voter {0} is already registered")]
    AlreadyRegistered(ParticipantId),

    #[error("the administrator may not register as a voter")]
    SelfRegistrationForbidden,

    #[error("proposal description is empty")]
    EmptyProposal,

    #[error("participant {0} has already submitted a proposal")]
    DuplicateProposer(ParticipantId),

    #[error("an identical proposal description already exists")]
    DuplicateDescription,

    #[error("voter {0} has already voted this round")]
    AlreadyVoted(ParticipantId),

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("no winner yet: the tally is not final")]
    NoWinnerYet,
}
