use tracing::debug;

use crate::{BackendKind, Error, ProbeConfig, Result, System};

/// Work out which supervision system is active. First match wins, in the
/// order systemd, upstart, SysV.
pub fn detect<S: System>(system: &S, probes: &ProbeConfig) -> Result<BackendKind> {
    for kind in BackendKind::ALL {
        if probe(system, probes, kind) {
            debug!("Detected {} service manager", kind);
            return Ok(kind);
        }
    }

    Err(Error::Detection {
        probed: probes.probed_paths(),
    })
}

/// Whether the artifacts of a single backend are present.
pub fn probe<S: System>(system: &S, probes: &ProbeConfig, kind: BackendKind) -> bool {
    let found = match kind {
        BackendKind::Systemd => system.path_exists(&probes.systemd_marker),
        BackendKind::Upstart => {
            system.path_exists(&probes.upstart_bridge) || init_reports_upstart(system, probes)
        }
        BackendKind::SysV => system.path_exists(&probes.sysv_marker),
    };
    debug!("Probe for {}: {}", kind, if found { "present" } else { "absent" });
    found
}

fn init_reports_upstart<S: System>(system: &S, probes: &ProbeConfig) -> bool {
    if !system.path_exists(&probes.init_binary) {
        return false;
    }

    match system.run(&probes.init_binary, &["--version"]) {
        Ok(output) if output.success() => output.output.contains(&probes.upstart_signature),
        Ok(output) => {
            debug!(
                "{} --version exited with {:?}",
                probes.init_binary.display(),
                output.code
            );
            false
        }
        Err(e) => {
            debug!("Failed to run {} --version: {}", probes.init_binary.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RunOutput;
    use std::path::{Path, PathBuf};

    struct InitOnly {
        version: std::io::Result<RunOutput>,
    }

    impl System for InitOnly {
        fn path_exists(&self, path: &Path) -> bool {
            path == Path::new("/sbin/init")
        }

        fn resolve(&self, _binary: &str) -> std::result::Result<PathBuf, which::Error> {
            Err(which::Error::CannotFindBinaryPath)
        }

        fn run(&self, _program: &Path, _args: &[&str]) -> std::io::Result<RunOutput> {
            match &self.version {
                Ok(output) => Ok(output.clone()),
                Err(e) => Err(std::io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    fn version(code: i32, output: &str) -> InitOnly {
        InitOnly {
            version: Ok(RunOutput {
                code: Some(code),
                output: output.to_string(),
            }),
        }
    }

    #[test]
    fn test_upstart_from_init_version() {
        let system = version(0, "init (upstart 1.12.1)\n");
        assert_eq!(
            detect(&system, &ProbeConfig::default()).unwrap(),
            BackendKind::Upstart
        );
    }

    #[test]
    fn test_systemd_init_is_not_upstart() {
        let system = version(0, "systemd 249 (249.11-0ubuntu3)\n");
        assert!(!probe(&system, &ProbeConfig::default(), BackendKind::Upstart));
    }

    #[test]
    fn test_failed_version_probe_is_not_upstart() {
        let system = version(1, "init (upstart 1.5)\n");
        assert!(!probe(&system, &ProbeConfig::default(), BackendKind::Upstart));

        let system = InitOnly {
            version: Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
        };
        assert!(!probe(&system, &ProbeConfig::default(), BackendKind::Upstart));
    }

    #[test]
    fn test_nothing_present_fails_with_probed_paths() {
        let system = version(0, "");
        let probes = ProbeConfig {
            init_binary: PathBuf::from("/nonexistent/init"),
            ..Default::default()
        };

        match detect(&system, &probes) {
            Err(Error::Detection { probed }) => assert_eq!(probed, probes.probed_paths()),
            other => panic!("expected detection error, got {:?}", other),
        }
    }
}
