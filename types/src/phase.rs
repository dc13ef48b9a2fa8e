//! Election lifecycle phases and the legal-transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six phases of an election, in lifecycle order.
///
/// The workflow crate exclusively owns and mutates the current phase; every
/// other crate only reads it to decide whether an action is permitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The administrator is registering eligible voters.
    RegisteringVoters,
    /// Registered voters (and the administrator) may submit proposals.
    ProposalsRegistrationStarted,
    /// Proposal submission is closed; voting has not opened yet.
    ProposalsRegistrationEnded,
    /// Registered voters may cast their single ballot.
    VotingSessionStarted,
    /// Voting is closed; the tally has not run yet.
    VotingSessionEnded,
    /// The tally has run. Terminal unless a tie forced a runoff rewind.
    VotesTallied,
}

impl Phase {
    /// All phases in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::RegisteringVoters,
        Self::ProposalsRegistrationStarted,
        Self::ProposalsRegistrationEnded,
        Self::VotingSessionStarted,
        Self::VotingSessionEnded,
        Self::VotesTallied,
    ];

    /// Where a runoff restart rewinds to. Proposal registration does not
    /// reopen, so the rewind lands after it, not inside it.
    pub const RUNOFF_REWIND_TARGET: Self = Self::ProposalsRegistrationEnded;

    /// The forward successor of this phase, or `None` at the end of the
    /// lifecycle.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::RegisteringVoters => Some(Self::ProposalsRegistrationStarted),
            Self::ProposalsRegistrationStarted => Some(Self::ProposalsRegistrationEnded),
            Self::ProposalsRegistrationEnded => Some(Self::VotingSessionStarted),
            Self::VotingSessionStarted => Some(Self::VotingSessionEnded),
            Self::VotingSessionEnded => Some(Self::VotesTallied),
            Self::VotesTallied => None,
        }
    }

    /// Whether this phase ends the lifecycle (absent a runoff rewind).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::VotesTallied)
    }

    /// Whether `self -> to` is a legal transition: the five forward edges
    /// plus the single backward edge used by the runoff restart.
    pub fn can_transition(&self, to: Self) -> bool {
        if self.next() == Some(to) {
            return true;
        }
        *self == Self::VotesTallied && to == Self::RUNOFF_REWIND_TARGET
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RegisteringVoters => "RegisteringVoters",
            Self::ProposalsRegistrationStarted => "ProposalsRegistrationStarted",
            Self::ProposalsRegistrationEnded => "ProposalsRegistrationEnded",
            Self::VotingSessionStarted => "VotingSessionStarted",
            Self::VotingSessionEnded => "VotingSessionEnded",
            Self::VotesTallied => "VotesTallied",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_covers_all_phases() {
        let mut phase = Phase::RegisteringVoters;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            seen.push(next);
            phase = next;
        }
        assert_eq!(seen, Phase::ALL);
    }

    #[test]
    fn only_votes_tallied_is_terminal() {
        for phase in Phase::ALL {
            assert_eq!(phase.is_terminal(), phase == Phase::VotesTallied);
        }
    }

    #[test]
    fn runoff_rewind_is_the_only_backward_edge() {
        assert!(Phase::VotesTallied.can_transition(Phase::ProposalsRegistrationEnded));
        assert!(!Phase::VotesTallied.can_transition(Phase::ProposalsRegistrationStarted));
        assert!(!Phase::VotingSessionEnded.can_transition(Phase::VotingSessionStarted));
        assert!(!Phase::VotingSessionStarted.can_transition(Phase::RegisteringVoters));
    }
}
