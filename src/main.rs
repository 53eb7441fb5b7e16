use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use rapuma_settings::{Outcome, ProjectRegistry, RegistryConfig, Session, logging, session};
use tracing::info;

#[derive(Parser)]
#[command(name = "rapuma-settings")]
#[command(about = "Edit publishing project settings from a message script")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the settings template as JSON
    Template {
        /// Registry config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Replay a JSON array of form messages and print the final state
    Run {
        /// Path to the message script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Registry config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RegistryConfig> {
    match path {
        Some(path) => RegistryConfig::load(path),
        None => Ok(RegistryConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.verbose)?;

    match args.command {
        Command::Template { config } => {
            let config = load_config(config.as_deref())?;
            let template = config.settings_config()?;
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Command::Run { script, config } => {
            let config = load_config(config.as_deref())?;
            let messages = session::load_script(&script)?;
            info!(count = messages.len(), script = ?script, "replaying script");

            let mut session = Session::new(ProjectRegistry::with_config(&config)?);
            let outcomes = session.replay(messages);
            let not_found = outcomes
                .iter()
                .filter(|o| matches!(o, Outcome::NotFound))
                .count();
            if not_found > 0 {
                info!(not_found, "some edit_project messages matched nothing");
            }

            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        }
    }

    Ok(())
}
