use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_RESTART_PAUSE: Duration = Duration::from_millis(50);

/// Filesystem locations inspected during detection, plus the pause used by
/// composite restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Directory systemd creates at boot.
    pub systemd_marker: PathBuf,
    pub upstart_bridge: PathBuf,
    /// Asked for `--version` when the udev bridge is absent.
    pub init_binary: PathBuf,
    pub upstart_signature: String,
    pub sysv_marker: PathBuf,
    pub restart_pause_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            systemd_marker: PathBuf::from("/run/systemd/system"),
            upstart_bridge: PathBuf::from("/sbin/upstart-udev-bridge"),
            init_binary: PathBuf::from("/sbin/init"),
            upstart_signature: "init (upstart".to_string(),
            sysv_marker: PathBuf::from("/usr/sbin/service"),
            restart_pause_ms: DEFAULT_RESTART_PAUSE.as_millis() as u64,
        }
    }
}

impl ProbeConfig {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(content: &str) -> crate::Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.upstart_signature.trim().is_empty() {
            return Err(crate::Error::Config(
                "upstart_signature cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn restart_pause(&self) -> Duration {
        Duration::from_millis(self.restart_pause_ms)
    }

    /// Marker paths in probe order, for diagnostics.
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        vec![
            self.systemd_marker.clone(),
            self.upstart_bridge.clone(),
            self.init_binary.clone(),
            self.sysv_marker.clone(),
        ]
    }
}
