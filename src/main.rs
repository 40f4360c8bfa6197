//! Revertnet CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use revertnet::cli::{commands, Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Init { force } => commands::init::execute(*force, cli.json),
        Commands::Network { log } => commands::network::execute(log, cli.json),
        Commands::Abba { log, window_hours } => {
            commands::abba::execute(log, *window_hours, cli.json)
        }
        Commands::Gaps {
            log,
            window_hours,
            bins,
        } => commands::gaps::execute(log, *window_hours, *bins, cli.json),
        Commands::Analyze {
            log,
            window_hours,
            bins,
        } => commands::analyze::execute(log, *window_hours, *bins, cli.json),
    };

    if let Err(err) = result {
        revertnet::cli::handle_error(err, cli.json);
    }
}
