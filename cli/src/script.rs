//! TOML election scripts and their execution.

use agora_types::{ElectionError, ParticipantId, ProposalId};
use agora_workflow::Election;
use anyhow::{bail, Context};
use serde::Deserialize;

/// A scripted election: one administrator and an ordered list of steps.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// The administrator's identifier.
    pub admin: String,
    /// Steps executed in order against a fresh election.
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptStep {
    #[serde(flatten)]
    pub op: Op,
    /// When true, the step must fail; its error is logged and the run
    /// continues. A step that fails without this marker aborts the run.
    #[serde(default)]
    pub expect_err: bool,
}

/// One operation against the election.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Op {
    /// Administrator registers a voter.
    RegisterVoter { voter: String },
    /// Administrator advances to the next phase.
    Advance,
    /// A participant submits a proposal.
    Propose { by: String, description: String },
    /// A voter casts a ballot, naming the proposal by its description.
    Vote { by: String, proposal: String },
    /// Print the current phase, as seen by `by` (default: administrator).
    Phase { by: Option<String> },
    /// Print the proposal list, as seen by `by` (default: administrator).
    Proposals { by: Option<String> },
    /// Print the winning proposal.
    Winner,
}

impl Script {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("failed to parse election script")
    }
}

/// Run a script against a fresh election and return it for inspection.
pub fn run(script: &Script) -> anyhow::Result<Election> {
    let admin = ParticipantId::new(script.admin.clone());
    let mut election = Election::new(admin.clone());

    for (index, step) in script.steps.iter().enumerate() {
        let result = apply(&mut election, &admin, &step.op);
        match (result, step.expect_err) {
            (Ok(()), false) => {}
            (Ok(()), true) => {
                bail!("step {index} ({:?}) succeeded but was marked expect_err", step.op)
            }
            (Err(err), true) => {
                tracing::info!(step = index, %err, "step failed as expected");
            }
            (Err(err), false) => {
                return Err(err).with_context(|| format!("step {index} ({:?}) failed", step.op));
            }
        }
    }
    Ok(election)
}

fn apply(
    election: &mut Election,
    admin: &ParticipantId,
    op: &Op,
) -> Result<(), ElectionError> {
    match op {
        Op::RegisterVoter { voter } => {
            election.register_voter(admin, ParticipantId::new(voter.clone()))
        }
        Op::Advance => {
            let (previous, new) = election.advance(admin)?;
            println!("advanced: {previous} -> {new}");
            Ok(())
        }
        Op::Propose { by, description } => {
            let id =
                election.register_proposal(&ParticipantId::new(by.clone()), description.clone())?;
            println!("proposal registered: {id}");
            Ok(())
        }
        Op::Vote { by, proposal } => {
            let voter = ParticipantId::new(by.clone());
            let id = resolve_proposal(election, &voter, proposal)?;
            election.vote(&voter, id)
        }
        Op::Phase { by } => {
            let caller = by
                .as_ref()
                .map(|s| ParticipantId::new(s.clone()))
                .unwrap_or_else(|| admin.clone());
            println!("phase: {}", election.current_phase(&caller)?);
            Ok(())
        }
        Op::Proposals { by } => {
            let caller = by
                .as_ref()
                .map(|s| ParticipantId::new(s.clone()))
                .unwrap_or_else(|| admin.clone());
            for p in election.proposals(&caller)? {
                println!("{}  {:>4} votes  {}", p.id, p.vote_count, p.description);
            }
            Ok(())
        }
        Op::Winner => {
            let winner = election.winner()?;
            println!("winner: {} ({} votes)", winner.description, winner.vote_count);
            Ok(())
        }
    }
}

/// Look up a proposal id by description, through the caller's own view.
fn resolve_proposal(
    election: &Election,
    caller: &ParticipantId,
    description: &str,
) -> Result<ProposalId, ElectionError> {
    election
        .proposals(caller)?
        .iter()
        .find(|p| p.description == description)
        .map(|p| p.id)
        .ok_or(ElectionError::ProposalNotFound(ProposalId::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::Phase;

    const TIE_THEN_WINNER: &str = r#"
        admin = "admin"

        [[steps]]
        op = "register-voter"
        voter = "v1"

        [[steps]]
        op = "register-voter"
        voter = "v2"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "propose"
        by = "v1"
        description = "Proposal A"

        [[steps]]
        op = "propose"
        by = "v2"
        description = "Proposal B"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "vote"
        by = "v1"
        proposal = "Proposal A"

        [[steps]]
        op = "vote"
        by = "v2"
        proposal = "Proposal B"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "winner"
        expect_err = true

        [[steps]]
        op = "advance"

        [[steps]]
        op = "vote"
        by = "v1"
        proposal = "Proposal A"

        [[steps]]
        op = "vote"
        by = "v2"
        proposal = "Proposal A"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "advance"

        [[steps]]
        op = "winner"
    "#;

    #[test]
    fn parses_and_runs_a_tie_then_runoff_script() {
        let script = Script::parse(TIE_THEN_WINNER).unwrap();
        let election = run(&script).unwrap();

        let admin = ParticipantId::new("admin");
        assert_eq!(election.current_phase(&admin).unwrap(), Phase::VotesTallied);
        assert_eq!(election.winner().unwrap().description, "Proposal A");
    }

    #[test]
    fn unexpected_failure_aborts_with_step_context() {
        let script = Script::parse(
            r#"
            admin = "admin"

            [[steps]]
            op = "advance"
            "#,
        )
        .unwrap();

        let err = run(&script).unwrap_err();
        assert!(err.to_string().contains("step 0"));
    }

    #[test]
    fn expected_success_that_fails_the_marker_aborts() {
        let script = Script::parse(
            r#"
            admin = "admin"

            [[steps]]
            op = "register-voter"
            voter = "v1"
            expect_err = true
            "#,
        )
        .unwrap();

        assert!(run(&script).is_err());
    }

    #[test]
    fn rejects_malformed_script() {
        assert!(Script::parse("admin = 3").is_err());
    }
}
