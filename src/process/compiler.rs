//! Ahead-of-time compilation of a solution into an executable next to it.

use std::{
    env,
    path::{Path, PathBuf},
    process::Stdio,
    time::{Duration, Instant},
};

use log::debug;
use tokio::process::Command;

use crate::error::{CphError, Result};

#[derive(Debug, Clone)]
pub struct Compilation {
    pub artifact: PathBuf,
    pub elapsed: Duration,
    /// Compiler output from a successful build (warnings).
    pub diagnostics: String,
}

/// `dir/A.cpp` becomes `dir/A`; a bare `A.cpp` becomes `./A` so it is never
/// looked up on PATH.
pub fn artifact_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    let mut name = stem;
    name.push(env::consts::EXE_SUFFIX);
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => Path::new(".").join(name),
    }
}

/// Invoke `compiler flags... source -o artifact`. A non-zero exit is a
/// [`CphError::CompilationFailed`] carrying the compiler's output.
pub async fn compile(compiler: &str, flags: &[&str], source: &Path) -> Result<Compilation> {
    let artifact = artifact_path(source);
    debug!("compiling {} -> {} with {compiler} {flags:?}", source.display(), artifact.display());

    let start = Instant::now();
    let output = Command::new(compiler)
        .args(flags)
        .arg(source)
        .arg("-o")
        .arg(&artifact)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| CphError::CompilerUnavailable {
            compiler: compiler.to_string(),
            source,
        })?;
    let elapsed = start.elapsed();

    let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
    diagnostics.push_str(&String::from_utf8_lossy(&output.stdout));
    let diagnostics = diagnostics.trim_end().to_string();

    if !output.status.success() {
        return Err(CphError::CompilationFailed { status: output.status, diagnostics });
    }
    Ok(Compilation { artifact, elapsed, diagnostics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::which;
    use std::fs;

    #[test]
    fn artifact_sits_next_to_source() {
        let suffix = env::consts::EXE_SUFFIX;
        assert_eq!(
            artifact_path(Path::new("contest/B.cpp")),
            PathBuf::from(format!("contest/B{suffix}"))
        );
        assert_eq!(artifact_path(Path::new("A.cpp")), PathBuf::from(format!("./A{suffix}")));
    }

    #[tokio::test]
    async fn broken_source_fails_with_diagnostics() {
        if which("g++").is_none() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A.cpp");
        fs::write(&source, "int main() { return undeclared; }\n").unwrap();

        let err = compile("g++", &["-std=c++11", "-O0", "-Wall"], &source)
            .await
            .unwrap_err();
        match err {
            CphError::CompilationFailed { status, diagnostics } => {
                assert!(!status.success());
                assert!(diagnostics.contains("undeclared"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!artifact_path(&source).exists());
    }

    #[tokio::test]
    async fn unknown_compiler_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("A.cpp");
        fs::write(&source, "int main() {}\n").unwrap();

        let err = compile("definitely-not-a-compiler", &[], &source).await.unwrap_err();
        assert!(matches!(err, CphError::CompilerUnavailable { .. }));
    }
}
