use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::trace;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// stdout and stderr as one stream, in the order the child wrote them
    pub output: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Every call that leaves the process: filesystem probes, search-path
/// lookups and blocking subprocess execution.
pub trait System {
    fn path_exists(&self, path: &Path) -> bool;

    fn resolve(&self, binary: &str) -> Result<PathBuf, which::Error>;

    fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput>;
}

impl<T: System + ?Sized> System for &T {
    fn path_exists(&self, path: &Path) -> bool {
        (**self).path_exists(path)
    }

    fn resolve(&self, binary: &str) -> Result<PathBuf, which::Error> {
        (**self).resolve(binary)
    }

    fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput> {
        (**self).run(program, args)
    }
}

/// The machine this process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl System for HostSystem {
    fn path_exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn resolve(&self, binary: &str) -> Result<PathBuf, which::Error> {
        which::which(binary)
    }

    fn run(&self, program: &Path, args: &[&str]) -> std::io::Result<RunOutput> {
        trace!("Running {} {:?}", program.display(), args);

        let (mut reader, writer) = std::io::pipe()?;

        // The command holds the parent's copies of the write end; it must be
        // dropped before reading or EOF never arrives.
        let mut child = {
            let mut command = Command::new(program);
            command
                .args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            command.spawn()?
        };

        let mut buf = Vec::new();
        let read = reader.read_to_end(&mut buf);
        let status = child.wait()?;
        read?;

        Ok(RunOutput {
            code: status.code(),
            output: String::from_utf8_lossy(&buf).into_owned(),
        })
    }
}
