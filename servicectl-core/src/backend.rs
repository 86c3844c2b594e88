use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supervision system that owns services on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Systemd,
    Upstart,
    #[serde(rename = "sysv", alias = "sysvinit")]
    SysV,
}

impl BackendKind {
    /// Detection priority, highest first.
    pub const ALL: [BackendKind; 3] = [BackendKind::Systemd, BackendKind::Upstart, BackendKind::SysV];

    /// Control binary looked up on the search path for this backend.
    pub fn control_binary(self) -> &'static str {
        match self {
            BackendKind::Systemd => "systemctl",
            BackendKind::Upstart => "initctl",
            BackendKind::SysV => "service",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Systemd => "systemd",
            BackendKind::Upstart => "upstart",
            BackendKind::SysV => "sysv",
        }
    }

    /// Whether restart maps onto a single native subcommand.
    pub fn has_native_restart(self) -> bool {
        matches!(self, BackendKind::Systemd)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "systemd" => Ok(BackendKind::Systemd),
            "upstart" => Ok(BackendKind::Upstart),
            "sysv" | "sysvinit" => Ok(BackendKind::SysV),
            other => Err(crate::Error::Config(format!(
                "unknown service manager '{other}' (expected systemd, upstart or sysv)"
            ))),
        }
    }
}
