//! `run`: compile if needed, execute against the input file, show the
//! input next to the produced output.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};

use super::new::{scaffold, Scaffolded, INPUT_EXT, OUTPUT_EXT};
use crate::{
    comparison::ComparisonTable,
    config::Config,
    error::{CphError, Result},
    language::{Language, Strategy},
    printer,
    process::{self, compiler, interpreter, Program},
    prompt::Prompter,
};

#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub solution: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Seconds; `Some(0)` disables the configured limit.
    pub timeout: Option<u64>,
}

#[derive(Debug)]
pub enum RunOutcome {
    Compared(ComparisonTable),
    /// The solution did not exist and was created instead of run.
    Scaffolded(Scaffolded),
}

pub async fn run(cfg: &Config, req: RunRequest, prompter: &mut dyn Prompter) -> Result<RunOutcome> {
    let solution = match req.solution {
        Some(path) => path,
        None => PathBuf::from(prompter.ask("Solution file path")?),
    };
    if solution.as_os_str().is_empty() {
        return Err(CphError::SolutionMissing { path: solution });
    }

    let code = solution
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    let problem = solution
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!("solution {} (language `{code}`, problem `{problem}`)", solution.display());
    if code.is_empty() {
        return Err(CphError::UnsupportedLanguage(code));
    }

    if !solution.exists() {
        let question = "There is no solution for this problem. Do you want to create it instead?";
        if !prompter.confirm(question)? {
            return Err(CphError::SolutionMissing { path: solution });
        }
        let dir = solution.parent().unwrap_or_else(|| Path::new(""));
        let made = scaffold(cfg, dir, &code, &problem, prompter)?;
        return Ok(RunOutcome::Scaffolded(made));
    }

    let language: Language = code.parse()?;

    let input = match req.input {
        Some(path) => path,
        None => {
            printer::info(&format!(
                "No input file specified, using default input file {problem}.{INPUT_EXT}"
            ));
            solution.with_extension(INPUT_EXT)
        }
    };
    if !input.exists() {
        return Err(CphError::InputMissing { problem, path: input });
    }
    let output = match req.output {
        Some(path) => path,
        None => {
            printer::info(&format!(
                "No output file specified, using default output file {problem}.{OUTPUT_EXT}"
            ));
            solution.with_extension(OUTPUT_EXT)
        }
    };

    let program = prepare(cfg, language, &solution).await?;

    printer::info(&format!(
        "Executing the solution for problem {problem} in {}",
        language.display_name()
    ));
    let limit = match req.timeout {
        Some(0) => None,
        Some(secs) => Some(Duration::from_secs(secs)),
        None => cfg.timeout(),
    };
    let execution = process::execute(&program, &input, &output, limit).await?;
    printer::info(&format!(
        "Execution Time: {:.4} seconds",
        execution.elapsed.as_secs_f64()
    ));
    if !execution.status.success() {
        warn!("solution for {problem} exited with {}", execution.status);
        printer::warn(&format!("Solution exited with {}", execution.status));
    }

    let table = ComparisonTable::from_files(&input, &output)?;
    Ok(RunOutcome::Compared(table))
}

/// Build the program to execute: compile, or pick an interpreter.
async fn prepare(cfg: &Config, language: Language, solution: &Path) -> Result<Program> {
    match language.strategy() {
        Strategy::Compiled { flags } => {
            let built = compiler::compile(&cfg.compiler(), flags, solution).await?;
            printer::info(&format!(
                "Compilation Time: {:.4} seconds",
                built.elapsed.as_secs_f64()
            ));
            if !built.diagnostics.is_empty() {
                printer::warn(&built.diagnostics);
            }
            Ok(Program::new(built.artifact))
        }
        Strategy::Interpreted { primary, fallbacks } => {
            let picked = interpreter::select_on_path(primary, fallbacks);
            debug!("interpreter {}", picked.binary);
            printer::info(picked.notice);
            Ok(picked.program(solution.as_os_str()))
        }
    }
}
