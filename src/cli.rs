use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::language::DEFAULT_CODE;

#[derive(Parser, Debug, Clone)]
#[command(name = "cph", about = "Competitive programming helper", version)]
pub struct Cli {
    /// More log output on stderr (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a solution from the language template plus empty input/output files.
    New {
        /// Language code (template extension).
        #[arg(short = 'l', long = "language", default_value = DEFAULT_CODE)]
        language: String,

        /// Problem name, used as the file stem.
        #[arg(short = 'p', long = "problem", default_value = "A")]
        problem: String,
    },

    /// Compile (if needed) and run a solution, then show input next to output.
    Run {
        /// Solution file path; asked for when omitted.
        #[arg(value_name = "SOLUTION")]
        solution: Option<PathBuf>,

        /// Input file (default: {stem}.INP next to the solution).
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Output file (default: {stem}.OUT next to the solution).
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Kill the solution after this many seconds; 0 disables the limit.
        #[arg(short = 't', long = "timeout", value_parser = clap::value_parser!(u64))]
        timeout: Option<u64>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn print_help() -> std::io::Result<()> {
        <Self as CommandFactory>::command().print_help()
    }
}
