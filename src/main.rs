// ABOUTME: Entry point for the dx CLI application.
// ABOUTME: Parses arguments, connects to the runtime and dispatches to command handlers.

mod cli;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use dx::commands::{self, connect_to_runtime};
use dx::config::{Config, LOG_VAR};
use dx::diagnostics::Diagnostics;
use dx::error::{EXIT_USAGE, Result};
use dx::render::{RenderConfig, Verbosity};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => usage_error(e),
    };

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Report a command-line problem and exit with the usage status.
fn usage_error(e: clap::Error) -> ! {
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        e.exit();
    }
    // Printing to stderr only fails when stderr is gone; nothing left to report to.
    let _ = e.print();
    if e.kind() == ErrorKind::InvalidSubcommand {
        let help = Cli::command().render_help();
        eprintln!("\n{help}");
    }
    std::process::exit(EXIT_USAGE);
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let runtime = connect_to_runtime(&config)?;
    tracing::debug!("querying {}", runtime.endpoint());
    let render = RenderConfig::for_stdout(Verbosity::from_count(cli.verbose));

    let output = match cli.command {
        Commands::Ps { all } => {
            let mut diagnostics = Diagnostics::default();
            let table = commands::list_containers(&runtime, all, &render, &mut diagnostics).await?;
            if let Some(summary) = diagnostics.summary() {
                tracing::warn!("{summary}");
            }
            table
        }
        Commands::Images { all } => commands::list_images(&runtime, all, &render).await?,
        Commands::Volumes => commands::list_volumes(&runtime, &render).await?,
        Commands::Examine { target } => {
            return commands::examine(&runtime, &target, &config).await;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(output.as_bytes()) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
