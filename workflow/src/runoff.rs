//! Runoff restart — narrows a tied election and reopens voting.

use crate::machine::Election;
use agora_ledger::Proposal;
use agora_types::{Event, Phase, ProposalId};

impl Election {
    /// Restart the election as a runoff among `tied` co-leading proposals.
    ///
    /// Atomic from the caller's perspective: runs entirely inside the
    /// `advance` call that entered `VotesTallied`. Discarded proposals never
    /// return; voters keep their registration but lose their ballots; the
    /// phase rewinds along the single legal backward edge, skipping proposal
    /// registration, so the administrator's next `advance` reopens voting
    /// directly. Repeated ties restart again without bound.
    pub(crate) fn runoff_restart(&mut self, tied: Vec<Proposal>) {
        debug_assert!(tied.len() >= 2, "runoff requires at least two co-leaders");

        let keep: Vec<ProposalId> = tied.iter().map(|p| p.id).collect();
        tracing::info!(tied = keep.len(), "exact tie — restarting as a runoff");

        self.ledger.retain_only(&keep);
        self.winners.clear();
        self.ledger.reset_counts();
        self.registry.reset_ballots();

        let previous = self.phase;
        let target = Phase::RUNOFF_REWIND_TARGET;
        debug_assert!(previous.can_transition(target));
        self.phase = target;
        self.events.emit(Event::WorkflowStatusChange {
            previous,
            new: target,
        });
    }
}
