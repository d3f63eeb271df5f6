//! `new`: solution boilerplate from a language template.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    config::Config,
    error::{CphError, Result},
    language::Language,
    printer,
    prompt::Prompter,
};

pub const INPUT_EXT: &str = "INP";
pub const OUTPUT_EXT: &str = "OUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub solution: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lint configuration written alongside, if any.
    pub lint: Option<PathBuf>,
}

/// Copy `template.{language}` into `dir/{problem}.{language}` and create empty
/// input/output files. Nothing is written when the template is missing or an
/// overwrite is declined.
pub fn scaffold(
    cfg: &Config,
    dir: &Path,
    language: &str,
    problem: &str,
    prompter: &mut dyn Prompter,
) -> Result<Scaffolded> {
    let template = cfg.template_path(language);
    if !template.is_file() {
        return Err(CphError::TemplateMissing {
            language: language.to_string(),
            path: template,
        });
    }
    let boilerplate = fs::read(&template)?;

    let solution = dir.join(format!("{problem}.{language}"));
    if solution.exists() {
        let question = format!("{} already exists. Overwrite it?", solution.display());
        if !prompter.confirm(&question)? {
            return Err(CphError::Aborted);
        }
    }

    let input = dir.join(format!("{problem}.{INPUT_EXT}"));
    let output = dir.join(format!("{problem}.{OUTPUT_EXT}"));
    File::create(&input)?;
    File::create(&output)?;
    debug!("copying {} -> {}", template.display(), solution.display());
    fs::write(&solution, boilerplate)?;

    printer::success(&format!(
        "Solution boilerplate created successfully for Problem {problem}"
    ));

    let lint = match language.parse::<Language>().ok().and_then(Language::lint_config) {
        Some((name, content)) => {
            let path = dir.join(name);
            if path.exists() {
                None
            } else {
                fs::write(&path, content)?;
                Some(path)
            }
        }
        None => None,
    };

    debug!(
        "created {}, {} and {}",
        solution.display(),
        input.display(),
        output.display()
    );
    if let Some(path) = &lint {
        debug!("wrote lint config {}", path.display());
    }
    Ok(Scaffolded { solution, input, output, lint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Scripted;
    use tempfile::TempDir;

    struct Fixture {
        templates: TempDir,
        work: TempDir,
        cfg: Config,
    }

    fn fixture() -> Fixture {
        let templates = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let cfg = Config::from_pairs([(
            "CPH_TEMPLATE_DIR",
            templates.path().to_string_lossy().into_owned(),
        )]);
        Fixture { templates, work, cfg }
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn missing_template_writes_nothing() {
        let fx = fixture();
        let mut prompter = Scripted::default();
        let err = scaffold(&fx.cfg, fx.work.path(), "cpp", "A", &mut prompter).unwrap_err();
        assert!(matches!(err, CphError::TemplateMissing { ref language, .. } if language == "cpp"));
        assert!(entries(fx.work.path()).is_empty());
    }

    #[test]
    fn creates_solution_and_empty_io_files() {
        let fx = fixture();
        let boilerplate = "#include <bits/stdc++.h>\nint main() {}\n";
        fs::write(fx.templates.path().join("template.cpp"), boilerplate).unwrap();

        let mut prompter = Scripted::default();
        let made = scaffold(&fx.cfg, fx.work.path(), "cpp", "B", &mut prompter).unwrap();

        assert_eq!(entries(fx.work.path()), ["B.INP", "B.OUT", "B.cpp"]);
        assert_eq!(fs::read_to_string(&made.solution).unwrap(), boilerplate);
        assert_eq!(fs::read(&made.input).unwrap(), b"");
        assert_eq!(fs::read(&made.output).unwrap(), b"");
        assert_eq!(made.lint, None);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn python_gets_lint_config_once() {
        let fx = fixture();
        fs::write(fx.templates.path().join("template.py"), "print(input())\n").unwrap();

        let mut prompter = Scripted::default();
        let made = scaffold(&fx.cfg, fx.work.path(), "py", "A", &mut prompter).unwrap();
        let lint = made.lint.expect("lint config written");
        assert_eq!(
            fs::read_to_string(&lint).unwrap(),
            "[lint]\nignore = [\"E731\", \"E741\"]\n"
        );

        fs::write(&lint, "# mine\n").unwrap();
        let made = scaffold(&fx.cfg, fx.work.path(), "py", "C", &mut prompter).unwrap();
        assert_eq!(made.lint, None);
        assert_eq!(fs::read_to_string(&lint).unwrap(), "# mine\n");
    }

    #[test]
    fn declined_overwrite_keeps_existing_solution() {
        let fx = fixture();
        fs::write(fx.templates.path().join("template.py"), "template\n").unwrap();
        let solution = fx.work.path().join("A.py");
        fs::write(&solution, "my work\n").unwrap();

        let mut prompter = Scripted::confirming(&[false]);
        let err = scaffold(&fx.cfg, fx.work.path(), "py", "A", &mut prompter).unwrap_err();
        assert!(matches!(err, CphError::Aborted));
        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(fs::read_to_string(&solution).unwrap(), "my work\n");
        assert_eq!(entries(fx.work.path()), ["A.py"]);
    }

    #[test]
    fn confirmed_overwrite_replaces_solution_and_truncates_io() {
        let fx = fixture();
        fs::write(fx.templates.path().join("template.py"), "template\n").unwrap();
        fs::write(fx.work.path().join("A.py"), "my work\n").unwrap();
        fs::write(fx.work.path().join("A.INP"), "1 2\n").unwrap();

        let mut prompter = Scripted::confirming(&[true]);
        let made = scaffold(&fx.cfg, fx.work.path(), "py", "A", &mut prompter).unwrap();
        assert_eq!(fs::read_to_string(&made.solution).unwrap(), "template\n");
        assert_eq!(fs::read(&made.input).unwrap(), b"");
    }

    #[test]
    fn io_file_failure_leaves_solution_unwritten() {
        let fx = fixture();
        fs::write(fx.templates.path().join("template.py"), "template\n").unwrap();
        fs::create_dir(fx.work.path().join("A.INP")).unwrap();

        let mut prompter = Scripted::default();
        let err = scaffold(&fx.cfg, fx.work.path(), "py", "A", &mut prompter).unwrap_err();
        assert!(matches!(err, CphError::Io(_)));
        assert!(!fx.work.path().join("A.py").exists());
        assert!(!fx.work.path().join("A.OUT").exists());
    }

    #[test]
    fn unknown_language_with_template_is_scaffolded() {
        let fx = fixture();
        fs::write(fx.templates.path().join("template.rs"), "fn main() {}\n").unwrap();

        let mut prompter = Scripted::default();
        let made = scaffold(&fx.cfg, fx.work.path(), "rs", "D", &mut prompter).unwrap();
        assert_eq!(made.solution, fx.work.path().join("D.rs"));
        assert_eq!(made.lint, None);
    }
}
