//! Proposal records.

use agora_types::ProposalId;
use serde::{Deserialize, Serialize};

/// A proposal on the ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Derived from the proposer's identifier — not sequential.
    pub id: ProposalId,
    /// What is being proposed. Never empty.
    pub description: String,
    /// Valid votes received this round. Reset to 0 only by a runoff restart.
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(id: ProposalId, description: String) -> Self {
        Self {
            id,
            description,
            vote_count: 0,
        }
    }
}
