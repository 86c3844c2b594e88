use std::path::PathBuf;
use thiserror::Error;

use crate::BackendKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No supported service manager detected (probed {})", display_paths(.probed))]
    Detection { probed: Vec<PathBuf> },

    #[error("{backend} detected but `{binary}` was not found on the search path: {source}")]
    ExecutableNotFound {
        backend: BackendKind,
        binary: &'static str,
        #[source]
        source: which::Error,
    },

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("Invalid service name: {0:?}")]
    InvalidServiceName(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// A control binary that could not be spawned or exited non-zero.
#[derive(Error, Debug)]
#[error("{} command failed{}{}", .program.display(), exit_suffix(.code), output_suffix(.output))]
pub struct ExecError {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub code: Option<i32>,
    /// stdout and stderr interleaved as written
    pub output: String,
    #[source]
    pub source: Option<std::io::Error>,
}

impl ExecError {
    pub fn is_spawn_failure(&self) -> bool {
        self.source.is_some()
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

fn output_suffix(output: &str) -> String {
    let output = output.trim();
    if output.is_empty() {
        String::new()
    } else {
        format!(": {output}")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
