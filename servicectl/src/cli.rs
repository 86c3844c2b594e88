use clap::{Parser, Subcommand};
use servicectl_core::BackendKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "servicectl")]
#[command(about = "Start, stop and restart services through the host's service manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Probe configuration file (JSON)
    #[arg(long, global = true, env = "SERVICECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show which service manager is active
    Detect(DetectArgs),

    /// Start a service
    Start(ServiceArgs),

    /// Stop a service
    Stop(ServiceArgs),

    /// Restart a service
    Restart(ServiceArgs),
}

#[derive(Parser)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ServiceArgs {
    /// Service name as known to the service manager
    pub name: String,

    /// Use this service manager instead of detecting one (systemd, upstart, sysv)
    #[arg(long)]
    pub backend: Option<BackendKind>,
}
