//! Supported languages and how each one is turned into a running program.

use std::str::FromStr;

use crate::error::CphError;
use crate::process::interpreter::Interpreter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Cpp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Run the source with `primary` if it is on PATH, else a fallback.
    Interpreted {
        primary: Interpreter,
        fallbacks: &'static [Interpreter],
    },
    /// Build an executable next to the source, then run it.
    Compiled { flags: &'static [&'static str] },
}

pub const DEFAULT_CODE: &str = "py";

const PYPY: Interpreter = Interpreter {
    binary: "pypy3",
    notice: "Using PyPy for execution",
};
const CPYTHON: Interpreter = Interpreter {
    binary: "python3",
    notice: "PyPy not found, using CPython for execution",
};

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Cpp => "cpp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Cpp => "C++",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Self::Python => Strategy::Interpreted { primary: PYPY, fallbacks: &[CPYTHON] },
            Self::Cpp => Strategy::Compiled { flags: &["-std=c++11", "-O0", "-Wall"] },
        }
    }

    /// Lint configuration dropped next to freshly scaffolded solutions.
    pub fn lint_config(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Python => Some((".ruff.toml", "[lint]\nignore = [\"E731\", \"E741\"]\n")),
            Self::Cpp => None,
        }
    }
}

impl FromStr for Language {
    type Err = CphError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "py" => Ok(Self::Python),
            "cpp" => Ok(Self::Cpp),
            other => Err(CphError::UnsupportedLanguage(other.to_string())),
        }
    }
}
