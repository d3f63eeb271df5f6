//! Failure kinds for the `new` and `run` commands.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CphError {
    #[error("There is no template for language `{language}` (expected {})", .path.display())]
    TemplateMissing { language: String, path: PathBuf },

    /// A confirmation was declined.
    #[error("Aborted")]
    Aborted,

    #[error("There is no solution file {}", .path.display())]
    SolutionMissing { path: PathBuf },

    #[error("Unsupported language `{0}`")]
    UnsupportedLanguage(String),

    #[error("There is no input file for problem {problem} ({})", .path.display())]
    InputMissing { problem: String, path: PathBuf },

    #[error("Could not launch compiler `{compiler}`: {source}")]
    CompilerUnavailable {
        compiler: String,
        #[source]
        source: io::Error,
    },

    #[error("Compilation failed ({status})\n{diagnostics}")]
    CompilationFailed { status: ExitStatus, diagnostics: String },

    #[error("Error occurred while executing the solution: {source}")]
    ExecutionFailed {
        #[source]
        source: io::Error,
    },

    #[error("Execution timed out after {:.1} seconds", .limit.as_secs_f64())]
    ExecutionTimedOut { limit: Duration },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CphError>;
