mod cli;
mod commands;
mod common;

use clap::Parser;
use servicectl_core::Action;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        cli::Command::Detect(args) => commands::detect::execute(args, config),
        cli::Command::Start(args) => commands::control::execute(Action::Start, args, config),
        cli::Command::Stop(args) => commands::control::execute(Action::Stop, args, config),
        cli::Command::Restart(args) => commands::control::execute(Action::Restart, args, config),
    }
}
