//! Tally engine — computes the one-or-many leading proposals of a round.
//!
//! Runs exactly once per voting round, invoked by the workflow when the
//! election enters its final phase. A single scan over the proposals in
//! registration order maintains a running leader set; ties are reported
//! rather than broken here — tie-breaking is the runoff's job.

use agora_ledger::Proposal;
use serde::{Deserialize, Serialize};

/// The outcome of tallying one voting round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyOutcome {
    /// No proposal received a vote. Unreachable through the workflow, which
    /// refuses to close a voting session with zero ballots.
    NoVotes,
    /// A strict unique leader.
    Winner(Proposal),
    /// Two or more proposals share the maximum vote count, in their
    /// original registration order.
    Tie(Vec<Proposal>),
}

impl TallyOutcome {
    /// The leader set, regardless of its size.
    pub fn leaders(&self) -> &[Proposal] {
        match self {
            Self::NoVotes => &[],
            Self::Winner(p) => std::slice::from_ref(p),
            Self::Tie(ps) => ps,
        }
    }
}

/// Scan `proposals` (registration order) and compute the leader set.
///
/// Proposals with zero votes are skipped. A proposal with a higher count
/// than the current leaders replaces the whole set; an equal count joins it;
/// a lower count is ignored. The set therefore preserves the original
/// relative order of the tied proposals.
pub fn tally(proposals: &[Proposal]) -> TallyOutcome {
    let mut leaders: Vec<&Proposal> = Vec::new();

    for proposal in proposals {
        if proposal.vote_count == 0 {
            continue;
        }
        match leaders.first() {
            None => leaders.push(proposal),
            Some(leader) => {
                if proposal.vote_count > leader.vote_count {
                    leaders.clear();
                    leaders.push(proposal);
                } else if proposal.vote_count == leader.vote_count {
                    leaders.push(proposal);
                }
            }
        }
    }

    let outcome = match leaders.len() {
        0 => TallyOutcome::NoVotes,
        1 => TallyOutcome::Winner(leaders[0].clone()),
        _ => TallyOutcome::Tie(leaders.into_iter().cloned().collect()),
    };
    tracing::info!(leaders = outcome.leaders().len(), "tally complete");
    outcome
}
