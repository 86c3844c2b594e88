use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::controller::{Action, Controller, Invocation};
use crate::{BackendKind, Error, ExecError, HostSystem, ProbeConfig, Result, System, detect};

/// A service bound to the control binary of the detected backend.
///
/// Every operation is a blocking subprocess call on the calling thread.
/// Handles share nothing, so independent handles can be used from separate
/// threads.
#[derive(Debug, Clone)]
pub struct ServiceHandle<S: System = HostSystem> {
    controller: Controller,
    system: S,
    restart_pause: Duration,
}

impl ServiceHandle<HostSystem> {
    /// Detect the service manager on this host and bind `name` to it.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_config(name, HostSystem, &ProbeConfig::default())
    }
}

impl<S: System> ServiceHandle<S> {
    pub fn with_system(name: impl Into<String>, system: S) -> Result<Self> {
        Self::with_config(name, system, &ProbeConfig::default())
    }

    pub fn with_config(name: impl Into<String>, system: S, probes: &ProbeConfig) -> Result<Self> {
        let name = name.into();
        validate_service_name(&name)?;

        let kind = detect(&system, probes)?;
        Ok(Self::bind(kind, name, system)?.with_restart_pause(probes.restart_pause()))
    }

    /// Skip detection and bind to `kind` directly.
    pub fn for_backend(kind: BackendKind, name: impl Into<String>, system: S) -> Result<Self> {
        let name = name.into();
        validate_service_name(&name)?;
        Self::bind(kind, name, system)
    }

    fn bind(kind: BackendKind, name: String, system: S) -> Result<Self> {
        let binary = kind.control_binary();
        let executable = system
            .resolve(binary)
            .map_err(|source| Error::ExecutableNotFound {
                backend: kind,
                binary,
                source,
            })?;
        debug!("Resolved {} to {}", binary, executable.display());

        Ok(Self {
            controller: Controller::bind(kind, executable, name),
            system,
            restart_pause: crate::config::DEFAULT_RESTART_PAUSE,
        })
    }

    pub fn with_restart_pause(mut self, pause: Duration) -> Self {
        self.restart_pause = pause;
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.controller.kind()
    }

    pub fn executable(&self) -> &Path {
        self.controller.executable()
    }

    pub fn name(&self) -> &str {
        self.controller.name()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn restart_pause(&self) -> Duration {
        self.restart_pause
    }

    pub fn perform(&self, action: Action) -> Result<()> {
        match action {
            Action::Start => self.start(),
            Action::Stop => self.stop(),
            Action::Restart => self.restart(),
        }
    }

    pub fn start(&self) -> Result<()> {
        self.run(self.controller.command(Action::Start))
    }

    pub fn stop(&self) -> Result<()> {
        self.run(self.controller.command(Action::Stop))
    }

    /// Uses the backend's native restart when it has one. Otherwise stops,
    /// pauses, then starts; upstart ignores a failed stop since the job may
    /// not be running, SysV returns it without attempting the start.
    pub fn restart(&self) -> Result<()> {
        if let Some(invocation) = self.controller.invocation(Action::Restart) {
            return self.run(invocation);
        }

        match self.stop() {
            Err(e) if self.kind() == BackendKind::Upstart => {
                debug!("Ignoring failed stop of {} before restart: {}", self.name(), e);
            }
            result => result?,
        }
        self.pause();
        self.start()
    }

    fn pause(&self) {
        if !self.restart_pause.is_zero() {
            std::thread::sleep(self.restart_pause);
        }
    }

    fn run(&self, invocation: Invocation) -> Result<()> {
        let args = invocation.arg_refs();
        debug!("Executing {} {}", invocation.program.display(), args.join(" "));

        let (code, output, source) = match self.system.run(&invocation.program, &args) {
            Ok(output) if output.success() => return Ok(()),
            Ok(output) => (output.code, output.output, None),
            Err(e) => (None, String::new(), Some(e)),
        };

        Err(ExecError {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            code,
            output,
            source,
        }
        .into())
    }
}

/// Reject names the control binaries would misread.
pub fn validate_service_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains('\0') || name.starts_with('-') {
        return Err(Error::InvalidServiceName(name.to_string()));
    }
    Ok(())
}
