//! Command-line interface for push-sync
//!
//! # Usage Examples
//!
//! ```bash
//! # Replay a feed through a mail session and print the tag stream
//! push-sync replay --events changes.jsonl
//!
//! # Contacts session, with debug logging of every decision
//! RUST_LOG=push_sync=debug push-sync replay --events changes.jsonl --class contacts
//!
//! # Session settings from a YAML file
//! push-sync replay --events changes.jsonl --config session.yaml
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use push_sync::{replay_file, SessionConfig};
use std::path::PathBuf;
use sync_core::EntityType;

#[derive(Parser)]
#[command(name = "push-sync")]
#[command(about = "Serialize synchronization changes onto an ActiveSync tag stream")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL change feed and print the resulting tag stream
    Replay {
        /// Path to the JSONL change feed
        #[arg(long)]
        events: PathBuf,

        /// Entity class of the session (email, calendar, contacts)
        #[arg(long, env = "PUSH_SYNC_CLASS")]
        class: Option<EntityType>,

        /// Session configuration file (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the rendered stream
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            events,
            class,
            config,
        } => {
            let mut session = match config {
                Some(path) => SessionConfig::from_file(&path)
                    .with_context(|| format!("Failed to load session config from {path:?}"))?,
                None => SessionConfig::default(),
            };
            if let Some(class) = class {
                session.class = class;
            }
            session.validate()?;

            let span = tracing::info_span!("session", name = %session.label());
            let _enter = span.enter();

            let (sink, stats) = replay_file(&events, session.class)
                .with_context(|| format!("Failed to replay change feed {events:?}"))?;

            print!("{}", sink.render());
            tracing::info!("Replay complete: {stats}");
        }
    }

    Ok(())
}
