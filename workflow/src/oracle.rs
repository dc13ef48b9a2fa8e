//! Authorization oracle — "is this caller the administrator?"
//!
//! Identity and authentication are outside the engine's scope; the workflow
//! only consults a boolean predicate. The registry answers the companion
//! question ("is this caller a registered voter") itself.

use agora_types::ParticipantId;

/// Answers whether a caller holds the administrator role.
pub trait AdminOracle: Send + Sync {
    fn is_admin(&self, caller: &ParticipantId) -> bool;
}

/// The standard single-organizer setup: exactly one administrator identity.
#[derive(Clone, Debug)]
pub struct SingleAdmin {
    admin: ParticipantId,
}

impl SingleAdmin {
    pub fn new(admin: ParticipantId) -> Self {
        Self { admin }
    }
}

impl AdminOracle for SingleAdmin {
    fn is_admin(&self, caller: &ParticipantId) -> bool {
        *caller == self.admin
    }
}
