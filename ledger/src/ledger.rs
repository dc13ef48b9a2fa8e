//! The proposal ledger.

use crate::proposal::Proposal;
use agora_types::{ElectionError, ParticipantId, ProposalId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All proposals for one election, in registration order.
///
/// `proposers` is a lifetime set: it records every participant who ever
/// submitted a proposal and is never pruned, not even when a runoff discards
/// the proposal itself. One proposer contributes at most one proposal across
/// all rounds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalLedger {
    proposals: Vec<Proposal>,
    proposers: HashSet<ParticipantId>,
}

impl ProposalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a proposal for `proposer`, deriving its id.
    ///
    /// Checks run in order — empty description, duplicate proposer,
    /// duplicate description — and all precede any mutation.
    pub fn register(
        &mut self,
        proposer: &ParticipantId,
        description: String,
    ) -> Result<ProposalId, ElectionError> {
        if description.is_empty() {
            return Err(ElectionError::EmptyProposal);
        }
        if self.proposers.contains(proposer) {
            return Err(ElectionError::DuplicateProposer(proposer.clone()));
        }
        let id = ProposalId::derive(proposer);
        if self.proposals.iter().any(|p| p.id == id) {
            return Err(ElectionError::DuplicateProposer(proposer.clone()));
        }
        if self.proposals.iter().any(|p| p.description == description) {
            return Err(ElectionError::DuplicateDescription);
        }

        tracing::debug!(proposal = %id, proposer = %proposer, "proposal registered");
        self.proposers.insert(proposer.clone());
        self.proposals.push(Proposal::new(id, description));
        Ok(id)
    }

    /// Whether a proposal with this id exists.
    pub fn contains(&self, id: &ProposalId) -> bool {
        self.proposals.iter().any(|p| p.id == *id)
    }

    /// Look up a proposal.
    pub fn get(&self, id: &ProposalId) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == *id)
    }

    /// Count one valid vote for a proposal.
    pub fn record_vote(&mut self, id: &ProposalId) -> Result<(), ElectionError> {
        let proposal = self
            .proposals
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(ElectionError::ProposalNotFound(*id))?;
        proposal.vote_count += 1;
        Ok(())
    }

    /// All proposals, in registration order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Discard every proposal whose id is not in `keep`, preserving the
    /// relative order of the survivors. Discarded proposals never return;
    /// their proposers stay in the lifetime set.
    pub fn retain_only(&mut self, keep: &[ProposalId]) {
        let before = self.proposals.len();
        self.proposals.retain(|p| keep.contains(&p.id));
        tracing::debug!(
            kept = self.proposals.len(),
            discarded = before - self.proposals.len(),
            "ledger narrowed to tied proposals"
        );
    }

    /// Zero every surviving proposal's vote count for a new round.
    pub fn reset_counts(&mut self) {
        for proposal in &mut self.proposals {
            proposal.vote_count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ParticipantId {
        ParticipantId::new(s)
    }

    #[test]
    fn register_derives_id_from_proposer() {
        let mut ledger = ProposalLedger::new();
        let id = ledger.register(&pid("alice"), "Proposal A".into()).unwrap();

        assert_eq!(id, ProposalId::derive(&pid("alice")));
        let p = ledger.get(&id).unwrap();
        assert_eq!(p.description, "Proposal A");
        assert_eq!(p.vote_count, 0);
    }

    #[test]
    fn empty_description_rejected_before_mutation() {
        let mut ledger = ProposalLedger::new();
        let err = ledger.register(&pid("alice"), String::new()).unwrap_err();

        assert_eq!(err, ElectionError::EmptyProposal);
        assert!(ledger.is_empty());
        // A rejected submission must not consume the proposer's one slot.
        ledger.register(&pid("alice"), "Proposal A".into()).unwrap();
    }

    #[test]
    fn one_proposal_per_proposer() {
        let mut ledger = ProposalLedger::new();
        ledger.register(&pid("alice"), "Proposal A".into()).unwrap();

        let err = ledger
            .register(&pid("alice"), "Something else".into())
            .unwrap_err();
        assert_eq!(err, ElectionError::DuplicateProposer(pid("alice")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn duplicate_description_rejected() {
        let mut ledger = ProposalLedger::new();
        ledger.register(&pid("alice"), "Proposal A".into()).unwrap();

        let err = ledger
            .register(&pid("bob"), "Proposal A".into())
            .unwrap_err();
        assert_eq!(err, ElectionError::DuplicateDescription);
        // Bob's slot is also preserved on rejection.
        ledger.register(&pid("bob"), "Proposal B".into()).unwrap();
    }

    #[test]
    fn proposer_set_survives_narrowing() {
        let mut ledger = ProposalLedger::new();
        let a = ledger.register(&pid("alice"), "Proposal A".into()).unwrap();
        ledger.register(&pid("bob"), "Proposal B".into()).unwrap();

        ledger.retain_only(&[a]);
        assert_eq!(ledger.len(), 1);

        // Bob's proposal was discarded, but bob still cannot submit again.
        let err = ledger
            .register(&pid("bob"), "Proposal B2".into())
            .unwrap_err();
        assert_eq!(err, ElectionError::DuplicateProposer(pid("bob")));
    }

    #[test]
    fn record_vote_increments() {
        let mut ledger = ProposalLedger::new();
        let id = ledger.register(&pid("alice"), "Proposal A".into()).unwrap();

        ledger.record_vote(&id).unwrap();
        ledger.record_vote(&id).unwrap();
        assert_eq!(ledger.get(&id).unwrap().vote_count, 2);
    }

    #[test]
    fn record_vote_unknown_proposal() {
        let mut ledger = ProposalLedger::new();
        let missing = ProposalId::new([9; 32]);

        let err = ledger.record_vote(&missing).unwrap_err();
        assert_eq!(err, ElectionError::ProposalNotFound(missing));
    }

    #[test]
    fn retain_only_preserves_relative_order() {
        let mut ledger = ProposalLedger::new();
        let a = ledger.register(&pid("p1"), "A".into()).unwrap();
        let b = ledger.register(&pid("p2"), "B".into()).unwrap();
        let c = ledger.register(&pid("p3"), "C".into()).unwrap();

        ledger.retain_only(&[c, a]);

        let ids: Vec<_> = ledger.proposals().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!ledger.contains(&b));
    }

    #[test]
    fn reset_counts_zeroes_everything() {
        let mut ledger = ProposalLedger::new();
        let a = ledger.register(&pid("p1"), "A".into()).unwrap();
        ledger.record_vote(&a).unwrap();

        ledger.reset_counts();
        assert_eq!(ledger.get(&a).unwrap().vote_count, 0);
    }
}
