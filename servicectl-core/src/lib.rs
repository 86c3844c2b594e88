//! Detect the host's service manager (systemd, upstart or SysV init) and
//! start, stop or restart services through its control binary.

pub mod backend;
pub mod config;
pub mod controller;
pub mod detect;
pub mod error;
pub mod handle;
pub mod system;

pub use backend::BackendKind;
pub use config::ProbeConfig;
pub use controller::{Action, Binding, Controller, Invocation};
pub use detect::{detect, probe};
pub use error::{Error, ExecError, Result};
pub use handle::{ServiceHandle, validate_service_name};
pub use system::{HostSystem, RunOutput, System};

/// Detect the service manager on this host and bind `name` to it.
pub fn new(name: impl Into<String>) -> Result<ServiceHandle> {
    ServiceHandle::new(name)
}
