//! The voter registry.

use crate::voter::Voter;
use agora_types::{ElectionError, ParticipantId, ProposalId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All voter records for one election, keyed by participant id.
///
/// Records are only ever added, never removed. The registry does not know
/// who the administrator is; keeping the administrator's id out of here is
/// the workflow's guard.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoterRegistry {
    voters: HashMap<ParticipantId, Voter>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a voter record. Fails if the id is already registered.
    pub fn register(&mut self, id: ParticipantId) -> Result<(), ElectionError> {
        if self.voters.contains_key(&id) {
            return Err(ElectionError::AlreadyRegistered(id));
        }
        tracing::debug!(voter = %id, "voter registered");
        self.voters.insert(id.clone(), Voter::new(id));
        Ok(())
    }

    /// Whether this participant is a registered voter.
    pub fn is_registered(&self, id: &ParticipantId) -> bool {
        self.voters.contains_key(id)
    }

    /// Look up a voter record.
    pub fn get(&self, id: &ParticipantId) -> Option<&Voter> {
        self.voters.get(id)
    }

    /// Record that a voter cast a ballot for `proposal`.
    ///
    /// Fails with `Unauthorized` for unknown ids and `AlreadyVoted` for a
    /// second ballot in the same round.
    pub fn record_ballot(
        &mut self,
        id: &ParticipantId,
        proposal: ProposalId,
    ) -> Result<(), ElectionError> {
        let voter = self
            .voters
            .get_mut(id)
            .ok_or(ElectionError::Unauthorized)?;
        if voter.has_voted {
            return Err(ElectionError::AlreadyVoted(id.clone()));
        }
        voter.has_voted = true;
        voter.voted_proposal = Some(proposal);
        tracing::debug!(voter = %id, proposal = %proposal, "ballot recorded");
        Ok(())
    }

    /// Number of registered voters.
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Number of voters who have cast a ballot this round.
    pub fn ballots_cast(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted).count()
    }

    /// Clear every voter's ballot fields for a new round.
    pub fn reset_ballots(&mut self) {
        for voter in self.voters.values_mut() {
            voter.reset_ballot();
        }
        tracing::debug!(voters = self.len(), "ballots reset for new round");
    }

    /// Iterate over all voter records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Voter> {
        self.voters.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ParticipantId {
        ParticipantId::new(s)
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = VoterRegistry::new();
        reg.register(pid("v1")).unwrap();

        assert!(reg.is_registered(&pid("v1")));
        assert!(!reg.is_registered(&pid("v2")));
        let voter = reg.get(&pid("v1")).unwrap();
        assert!(voter.is_registered);
        assert!(!voter.has_voted);
        assert_eq!(voter.voted_proposal, None);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut reg = VoterRegistry::new();
        reg.register(pid("v1")).unwrap();

        let err = reg.register(pid("v1")).unwrap_err();
        assert_eq!(err, ElectionError::AlreadyRegistered(pid("v1")));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn ballot_recorded_once() {
        let mut reg = VoterRegistry::new();
        reg.register(pid("v1")).unwrap();
        let proposal = ProposalId::new([7; 32]);

        reg.record_ballot(&pid("v1"), proposal).unwrap();
        assert_eq!(reg.ballots_cast(), 1);
        assert_eq!(reg.get(&pid("v1")).unwrap().voted_proposal, Some(proposal));

        let err = reg.record_ballot(&pid("v1"), proposal).unwrap_err();
        assert_eq!(err, ElectionError::AlreadyVoted(pid("v1")));
    }

    #[test]
    fn ballot_from_unknown_voter_rejected() {
        let mut reg = VoterRegistry::new();
        let err = reg
            .record_ballot(&pid("ghost"), ProposalId::new([1; 32]))
            .unwrap_err();
        assert_eq!(err, ElectionError::Unauthorized);
    }

    #[test]
    fn reset_ballots_keeps_registration() {
        let mut reg = VoterRegistry::new();
        reg.register(pid("v1")).unwrap();
        reg.register(pid("v2")).unwrap();
        reg.record_ballot(&pid("v1"), ProposalId::new([1; 32])).unwrap();

        reg.reset_ballots();

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.ballots_cast(), 0);
        for voter in reg.iter() {
            assert!(voter.is_registered);
            assert!(!voter.has_voted);
            assert_eq!(voter.voted_proposal, None);
        }
    }
}
