mod cli;
mod comparison;
mod config;
mod error;
mod handlers;
mod language;
mod printer;
mod process;
mod prompt;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use cli::{Cli, Commands};
use config::Config;
use handlers::run::{RunOutcome, RunRequest};
use printer::TablePrinter;
use prompt::TerminalPrompter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // Load config
    let cfg = Config::load();
    init_logging(raise(cfg.log_level(), args.verbose));
    log::debug!("config from {}", cfg.config_path.display());

    let Some(command) = args.command else {
        Cli::print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut prompter = TerminalPrompter;
    let outcome = match command {
        Commands::New { language, problem } => {
            handlers::new::scaffold(&cfg, Path::new(""), &language, &problem, &mut prompter)
                .map(|made| printer::created(&made))
        }
        Commands::Run { solution, input, output, timeout } => {
            let req = RunRequest { solution, input, output, timeout };
            handlers::run::run(&cfg, req, &mut prompter).await.map(|outcome| match outcome {
                RunOutcome::Compared(table) => TablePrinter::default().print(&table),
                RunOutcome::Scaffolded(made) => printer::created(&made),
            })
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            printer::error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(level: LevelFilter) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Each `-v` raises the configured level by one step.
fn raise(level: LevelFilter, steps: u8) -> LevelFilter {
    let mut level = level;
    for _ in 0..steps {
        level = match level {
            LevelFilter::Off => LevelFilter::Error,
            LevelFilter::Error => LevelFilter::Warn,
            LevelFilter::Warn => LevelFilter::Info,
            LevelFilter::Info => LevelFilter::Debug,
            LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
        };
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level_and_saturates() {
        assert_eq!(raise(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(raise(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(raise(LevelFilter::Warn, 9), LevelFilter::Trace);
    }
}
