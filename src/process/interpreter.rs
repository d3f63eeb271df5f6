//! Interpreter discovery for interpreted languages.

use std::ffi::OsString;
use std::path::PathBuf;

use super::{which, Program};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreter {
    pub binary: &'static str,
    /// Shown when this interpreter is the one picked.
    pub notice: &'static str,
}

impl Interpreter {
    pub fn program(&self, source: impl Into<OsString>) -> Program {
        Program::new(self.binary).arg(source)
    }
}

/// `primary` if `lookup` resolves it, else the first resolvable fallback.
/// When nothing resolves the last fallback is returned anyway so the spawn
/// error names it.
pub fn select<F>(primary: Interpreter, fallbacks: &[Interpreter], lookup: F) -> Interpreter
where
    F: Fn(&str) -> Option<PathBuf>,
{
    std::iter::once(&primary)
        .chain(fallbacks)
        .find(|candidate| lookup(candidate.binary).is_some())
        .or(fallbacks.last())
        .copied()
        .unwrap_or(primary)
}

pub fn select_on_path(primary: Interpreter, fallbacks: &[Interpreter]) -> Interpreter {
    select(primary, fallbacks, which)
}
