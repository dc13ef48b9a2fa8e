//! Voter records.

use agora_types::{ParticipantId, ProposalId};
use serde::{Deserialize, Serialize};

/// A registered voter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// The voter's unique identifier. Immutable once created.
    pub id: ParticipantId,
    /// Always true for records in the registry; kept explicit so a voter
    /// record can be handed out and inspected on its own.
    pub is_registered: bool,
    /// Whether this voter has cast a ballot in the current round.
    pub has_voted: bool,
    /// Which proposal the ballot went to. Ballots are not secret.
    pub voted_proposal: Option<ProposalId>,
}

impl Voter {
    /// A fresh record for a newly registered voter.
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            is_registered: true,
            has_voted: false,
            voted_proposal: None,
        }
    }

    /// Clear the ballot fields for a new voting round. Registration and
    /// identity persist unchanged.
    pub fn reset_ballot(&mut self) {
        self.has_voted = false;
        self.voted_proposal = None;
    }
}
