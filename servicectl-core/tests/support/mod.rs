#![allow(dead_code)]

use parking_lot::Mutex;
use servicectl_core::{RunOutput, System};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Call {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub at: Instant,
}

#[derive(Debug, Clone)]
enum Response {
    Exit(RunOutput),
    SpawnError(std::io::ErrorKind),
}

/// In-memory host: a set of existing paths, a search path, and canned
/// responses keyed by argument vector. Unknown invocations exit 0.
#[derive(Debug, Default)]
pub struct FakeSystem {
    paths: HashSet<PathBuf>,
    binaries: HashMap<String, PathBuf>,
    responses: HashMap<Vec<String>, Response>,
    probed: Mutex<Vec<PathBuf>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn systemd() -> Self {
        Self::new()
            .with_path("/run/systemd/system")
            .with_binary("systemctl", "/usr/bin/systemctl")
    }

    pub fn upstart() -> Self {
        Self::new()
            .with_path("/sbin/upstart-udev-bridge")
            .with_binary("initctl", "/sbin/initctl")
    }

    pub fn sysv() -> Self {
        Self::new()
            .with_path("/usr/sbin/service")
            .with_binary("service", "/usr/sbin/service")
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(path.into());
        self
    }

    pub fn with_binary(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.binaries.insert(name.to_string(), path.into());
        self
    }

    pub fn respond(mut self, args: &[&str], code: i32, output: &str) -> Self {
        self.responses.insert(
            to_owned(args),
            Response::Exit(RunOutput {
                code: Some(code),
                output: output.to_string(),
            }),
        );
        self
    }

    pub fn fail(self, args: &[&str], output: &str) -> Self {
        self.respond(args, 1, output)
    }

    pub fn fail_spawn(mut self, args: &[&str], kind: std::io::ErrorKind) -> Self {
        self.responses
            .insert(to_owned(args), Response::SpawnError(kind));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn argv(&self) -> Vec<Vec<String>> {
        self.calls.lock().iter().map(|c| c.args.clone()).collect()
    }

    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.lock().clone()
    }
}

impl System for FakeSystem {
    fn path_exists(&self, path: &Path) -> bool {
        self.probed.lock().push(path.to_path_buf());
        self.paths.contains(path)
    }

    fn resolve(&self, binary: &str) -> Result<PathBuf, which::Error> {
        self.binaries
            .get(binary)
            .cloned()
            .ok_or(which::Error::CannotFindBinaryPath)
    }

    fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput> {
        self.calls.lock().push(Call {
            program: program.to_path_buf(),
            args: to_owned(args),
            at: Instant::now(),
        });

        match self.responses.get(&to_owned(args)) {
            Some(Response::Exit(output)) => Ok(output.clone()),
            Some(Response::SpawnError(kind)) => Err(std::io::Error::from(*kind)),
            None => Ok(RunOutput {
                code: Some(0),
                ..Default::default()
            }),
        }
    }
}

fn to_owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

pub fn strings(args: &[&str]) -> Vec<String> {
    to_owned(args)
}
