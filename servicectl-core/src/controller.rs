use std::path::{Path, PathBuf};

use crate::BackendKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
        }
    }
}

/// Resolved control binary plus the service it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub executable: PathBuf,
    pub name: String,
}

/// A single subprocess call: program and argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controller {
    /// `systemctl <action> <name>`
    Systemd(Binding),
    /// `initctl <action> <name>`
    Upstart(Binding),
    /// `service <name> <action>`
    SysV(Binding),
}

impl Controller {
    pub fn bind(kind: BackendKind, executable: PathBuf, name: String) -> Self {
        let binding = Binding { executable, name };
        match kind {
            BackendKind::Systemd => Controller::Systemd(binding),
            BackendKind::Upstart => Controller::Upstart(binding),
            BackendKind::SysV => Controller::SysV(binding),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Controller::Systemd(_) => BackendKind::Systemd,
            Controller::Upstart(_) => BackendKind::Upstart,
            Controller::SysV(_) => BackendKind::SysV,
        }
    }

    pub fn binding(&self) -> &Binding {
        match self {
            Controller::Systemd(b) | Controller::Upstart(b) | Controller::SysV(b) => b,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.binding().executable
    }

    pub fn name(&self) -> &str {
        &self.binding().name
    }

    /// The native command for `action`, or `None` when the backend has no
    /// reliable subcommand for it and restart must be composed.
    pub fn invocation(&self, action: Action) -> Option<Invocation> {
        if action == Action::Restart && !self.kind().has_native_restart() {
            return None;
        }
        Some(self.command(action))
    }

    pub(crate) fn command(&self, action: Action) -> Invocation {
        let binding = self.binding();
        let verb = action.as_str().to_string();
        let name = binding.name.clone();

        let args = match self {
            Controller::SysV(_) => vec![name, verb],
            Controller::Systemd(_) | Controller::Upstart(_) => vec![verb, name],
        };

        Invocation {
            program: binding.executable.clone(),
            args,
        }
    }
}
