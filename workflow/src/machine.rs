//! The election context and its guarded operations.

use crate::events::EventLog;
use crate::oracle::{AdminOracle, SingleAdmin};
use agora_ledger::{Proposal, ProposalLedger};
use agora_registry::VoterRegistry;
use agora_tally::{tally, TallyOutcome};
use agora_types::{ElectionError, Event, ParticipantId, Phase, ProposalId};

/// Registered voters needed before voter registration can close.
pub const MIN_VOTERS: usize = 2;
/// Proposals needed before proposal registration can close.
pub const MIN_PROPOSALS: usize = 2;
/// Ballots needed before a voting session can close.
pub const MIN_BALLOTS: usize = 1;

/// One election: phase cursor, voter registry, proposal ledger, winners and
/// event log, plus the authorization oracle consulted on every call.
///
/// The phase only ever moves forward through [`Phase`]'s lifecycle, except
/// for the single automatic rewind a runoff restart performs. Nothing here
/// exposes a backward move to callers.
pub struct Election {
    pub(crate) auth: Box<dyn AdminOracle>,
    pub(crate) phase: Phase,
    pub(crate) registry: VoterRegistry,
    pub(crate) ledger: ProposalLedger,
    pub(crate) winners: Vec<Proposal>,
    pub(crate) events: EventLog,
}

impl std::fmt::Debug for Election {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Election")
            .field("phase", &self.phase)
            .field("registry", &self.registry)
            .field("ledger", &self.ledger)
            .field("winners", &self.winners)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Election {
    /// A fresh election organized by a single administrator.
    pub fn new(admin: ParticipantId) -> Self {
        Self::with_oracle(Box::new(SingleAdmin::new(admin)))
    }

    /// A fresh election consulting a caller-supplied authorization oracle.
    pub fn with_oracle(auth: Box<dyn AdminOracle>) -> Self {
        Self {
            auth,
            phase: Phase::RegisteringVoters,
            registry: VoterRegistry::new(),
            ledger: ProposalLedger::new(),
            winners: Vec::new(),
            events: EventLog::new(),
        }
    }

    fn is_admin(&self, caller: &ParticipantId) -> bool {
        self.auth.is_admin(caller)
    }

    fn is_participant(&self, caller: &ParticipantId) -> bool {
        self.is_admin(caller) || self.registry.is_registered(caller)
    }

    fn require_phase(&self, expected: Phase) -> Result<(), ElectionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ElectionError::WrongPhase { phase: self.phase })
        }
    }

    /// Read the current phase. Administrator or registered voter only.
    pub fn current_phase(&self, caller: &ParticipantId) -> Result<Phase, ElectionError> {
        if !self.is_participant(caller) {
            return Err(ElectionError::Unauthorized);
        }
        Ok(self.phase)
    }

    /// Move the election to the next phase. Administrator only.
    ///
    /// Returns the forward transition `(previous, new)` that was performed.
    /// Entering `VotesTallied` runs the tally; an exact tie then triggers
    /// the runoff restart, whose rewind shows up as a further
    /// `WorkflowStatusChange` event rather than in the return value.
    pub fn advance(
        &mut self,
        caller: &ParticipantId,
    ) -> Result<(Phase, Phase), ElectionError> {
        if !self.is_admin(caller) {
            return Err(ElectionError::Unauthorized);
        }
        let next = self.phase.next().ok_or(ElectionError::SessionOver)?;

        // Quota guards on leaving the current phase.
        match self.phase {
            Phase::RegisteringVoters if self.registry.len() < MIN_VOTERS => {
                return Err(ElectionError::InsufficientVoters {
                    have: self.registry.len(),
                    need: MIN_VOTERS,
                });
            }
            Phase::ProposalsRegistrationStarted if self.ledger.len() < MIN_PROPOSALS => {
                return Err(ElectionError::InsufficientProposals {
                    have: self.ledger.len(),
                    need: MIN_PROPOSALS,
                });
            }
            Phase::VotingSessionStarted if self.registry.ballots_cast() < MIN_BALLOTS => {
                return Err(ElectionError::NoVotesCast);
            }
            _ => {}
        }

        let previous = self.phase;
        self.phase = next;
        tracing::info!(%previous, new = %next, "phase advanced");
        self.events.emit(Event::WorkflowStatusChange { previous, new: next });

        if next == Phase::VotesTallied {
            self.run_tally();
        }

        Ok((previous, next))
    }

    /// Entering-phase hook for `VotesTallied`.
    fn run_tally(&mut self) {
        match tally(self.ledger.proposals()) {
            TallyOutcome::Winner(winner) => {
                tracing::info!(proposal = %winner.id, votes = winner.vote_count, "winner determined");
                self.winners = vec![winner];
            }
            TallyOutcome::Tie(tied) => {
                self.runoff_restart(tied);
            }
            // The NoVotesCast guard on closing the voting session makes this
            // unreachable; an empty winners list still reads as NoWinnerYet.
            TallyOutcome::NoVotes => {
                self.winners.clear();
            }
        }
    }

    /// Register a voter. Administrator only, during `RegisteringVoters`.
    pub fn register_voter(
        &mut self,
        caller: &ParticipantId,
        id: ParticipantId,
    ) -> Result<(), ElectionError> {
        if !self.is_admin(caller) {
            return Err(ElectionError::Unauthorized);
        }
        self.require_phase(Phase::RegisteringVoters)?;
        if self.is_admin(&id) {
            return Err(ElectionError::SelfRegistrationForbidden);
        }
        self.registry.register(id.clone())?;
        self.events.emit(Event::VoterRegistered { voter: id });
        Ok(())
    }

    /// Submit a proposal. Administrator or registered voter, during
    /// `ProposalsRegistrationStarted`. Returns the derived proposal id.
    pub fn register_proposal(
        &mut self,
        caller: &ParticipantId,
        description: String,
    ) -> Result<ProposalId, ElectionError> {
        if !self.is_participant(caller) {
            return Err(ElectionError::Unauthorized);
        }
        self.require_phase(Phase::ProposalsRegistrationStarted)?;
        let id = self.ledger.register(caller, description)?;
        self.events.emit(Event::ProposalRegistered { proposal: id });
        Ok(id)
    }

    /// All proposals in registration order. Administrator or registered
    /// voter only.
    pub fn proposals(&self, caller: &ParticipantId) -> Result<&[Proposal], ElectionError> {
        if !self.is_participant(caller) {
            return Err(ElectionError::Unauthorized);
        }
        Ok(self.ledger.proposals())
    }

    /// Cast a ballot. Registered voters only, during `VotingSessionStarted`.
    ///
    /// Every check precedes both mutations, so a rejected ballot changes
    /// nothing.
    pub fn vote(
        &mut self,
        caller: &ParticipantId,
        proposal: ProposalId,
    ) -> Result<(), ElectionError> {
        let voter = self
            .registry
            .get(caller)
            .ok_or(ElectionError::Unauthorized)?;
        self.require_phase(Phase::VotingSessionStarted)?;
        if voter.has_voted {
            return Err(ElectionError::AlreadyVoted(caller.clone()));
        }
        if !self.ledger.contains(&proposal) {
            return Err(ElectionError::ProposalNotFound(proposal));
        }

        self.ledger.record_vote(&proposal)?;
        self.registry.record_ballot(caller, proposal)?;
        self.events.emit(Event::Voted {
            voter: caller.clone(),
            proposal,
        });
        Ok(())
    }

    /// The unique winning proposal, once the tally is final. Callable by
    /// anyone.
    pub fn winner(&self) -> Result<&Proposal, ElectionError> {
        match self.winners.as_slice() {
            [winner] => Ok(winner),
            _ => Err(ElectionError::NoWinnerYet),
        }
    }

    /// Every notification emitted so far, in emission order.
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }
}
