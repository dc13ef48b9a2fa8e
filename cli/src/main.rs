//! agora — script-driven runner for phase-gated plurality elections.

mod script;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agora", about = "Phase-gated plurality election runner")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Ignored when RUST_LOG is set.
    #[arg(long, default_value = "info", env = "AGORA_LOG_LEVEL")]
    log_level: String,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Execute an election script.
    Run {
        /// Path to a TOML election script.
        #[arg(long, env = "AGORA_SCRIPT")]
        script: PathBuf,

        /// Write the emitted event log to this path as JSON.
        #[arg(long, env = "AGORA_EVENTS_OUT")]
        events_out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", &cli.log_level);
    }
    agora_utils::init_tracing();

    match cli.command {
        Command::Run { script, events_out } => {
            let raw = std::fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let parsed = script::Script::parse(&raw)?;

            let election = script::run(&parsed)?;
            tracing::info!(steps = parsed.steps.len(), "script complete");

            if let Some(path) = events_out {
                let json = serde_json::to_string_pretty(election.events())?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "event log written");
            }
        }
    }

    Ok(())
}
