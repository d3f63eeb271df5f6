//! Child process management: locating binaries, compiling, running a solution
//! with redirected stdio.

use std::{
    env,
    ffi::{OsStr, OsString},
    fs::File,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
    time::{Duration, Instant},
};

use log::debug;
use tokio::process::Command;

use crate::error::{CphError, Result};

pub mod compiler;
pub mod interpreter;

/// Something that can be spawned: a binary plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Program {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Execution {
    pub status: ExitStatus,
    pub elapsed: Duration,
}

/// Run `program` with stdin read from `input` and stdout written to `output`
/// (truncated first). Stderr stays attached to the terminal.
pub async fn execute(
    program: &Program,
    input: &Path,
    output: &Path,
    limit: Option<Duration>,
) -> Result<Execution> {
    let stdin = File::open(input)?;
    let stdout = File::create(output)?;

    debug!("spawning {:?} {:?}", program.program, program.args);
    let start = Instant::now();
    let mut child = {
        let mut cmd = Command::new(&program.program);
        cmd.args(&program.args)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        // Dropping `cmd` closes our copies of the redirected files.
        cmd.spawn().map_err(|source| CphError::ExecutionFailed { source })?
    };

    let status = match limit {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(status) => status.map_err(|source| CphError::ExecutionFailed { source })?,
            Err(_) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                return Err(CphError::ExecutionTimedOut { limit });
            }
        },
        None => child
            .wait()
            .await
            .map_err(|source| CphError::ExecutionFailed { source })?,
    };
    let elapsed = start.elapsed();
    debug!("child exited with {status} after {elapsed:?}");

    Ok(Execution { status, elapsed })
}

/// First executable called `name` on PATH.
pub fn which(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    which_in(name, &paths)
}

pub fn which_in(name: &str, paths: &OsStr) -> Option<PathBuf> {
    let file = format!("{name}{}", env::consts::EXE_SUFFIX);
    env::split_paths(paths)
        .map(|dir| dir.join(&file))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
