//! Interactive setup wizard for Ralph-Sessions.
//!
//! Prompts for a project directory and test command, then scaffolds
//! `.claude/agents/`, `state/`, `logs/`, `plans/` and `templates/` along
//! with the plan, conventions and launcher files. Existing files are never
//! overwritten.

use anyhow::{Context, Result};
use clap::Parser;
use ralph_sessions::io::config::resolve_config;
use ralph_sessions::io::prompt::TerminalPrompter;
use ralph_sessions::wizard::{WizardOutcome, run_wizard};
use ralph_sessions::{exit_codes, logging, output};

#[derive(Parser)]
#[command(
    name = "ralph-sessions",
    version,
    about = "Scaffold a Ralph-Sessions workspace in an existing project"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let config = resolve_config()?;
    let cwd = std::env::current_dir().context("read current directory")?;

    output::print_banner();
    let mut prompter = TerminalPrompter::new();
    match run_wizard(&mut prompter, &cwd, &config)? {
        WizardOutcome::Cancelled => output::print_cancelled(),
        WizardOutcome::MissingDirectory(path) => output::print_missing_directory(&path),
        WizardOutcome::Completed { report, .. } => {
            output::print_report(&report);
            output::print_summary(&report);
        }
    }
    Ok(())
}
