//! Notification events emitted by election operations.

use crate::id::{ParticipantId, ProposalId};
use crate::phase::Phase;
use serde::{Deserialize, Serialize};

/// An observable, fire-and-forget notification.
///
/// Events are appended to the election's event log in emission order,
/// decoupled from the state mutation they accompany. Delivery to external
/// subscribers is outside this crate's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A voter was added to the registry.
    VoterRegistered { voter: ParticipantId },
    /// A proposal was added to the ledger.
    ProposalRegistered { proposal: ProposalId },
    /// A voter cast a ballot. Ballots are not secret.
    Voted {
        voter: ParticipantId,
        proposal: ProposalId,
    },
    /// The workflow moved between phases, forward or via the runoff rewind.
    WorkflowStatusChange { previous: Phase, new: Phase },
}
