use anyhow::{Context, Result};
use servicectl_core::{HostSystem, ProbeConfig, ServiceHandle};
use std::path::Path;
use tracing::debug;

use crate::cli::ServiceArgs;

/// Standard success indicator for all commands
pub const SUCCESS_ICON: &str = "✓";

pub fn load_probes(path: Option<&Path>) -> Result<ProbeConfig> {
    match path {
        Some(path) => {
            debug!("Loading probe config from {:?}", path);
            ProbeConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(ProbeConfig::default()),
    }
}

pub fn open_handle(args: &ServiceArgs, config: Option<&Path>) -> Result<ServiceHandle> {
    let probes = load_probes(config)?;

    let handle = match args.backend {
        Some(kind) => ServiceHandle::for_backend(kind, args.name.as_str(), HostSystem)?
            .with_restart_pause(probes.restart_pause()),
        None => ServiceHandle::with_config(args.name.as_str(), HostSystem, &probes)?,
    };

    debug!(
        "Controlling {} via {} ({})",
        handle.name(),
        handle.executable().display(),
        handle.kind()
    );
    Ok(handle)
}
