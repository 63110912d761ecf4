//! Orchestration for the interactive setup flow.
//!
//! Asks for the target directory and plan status, resolves the directory,
//! detects a test command for the user to confirm, then scaffolds.
//! Cancellation and a missing directory are ordinary outcomes, not errors.

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::io::config::SetupConfig;
use crate::io::detect::detect_test_command;
use crate::io::prompt::Prompter;
use crate::io::scaffold::{ScaffoldOptions, ScaffoldReport, scaffold};

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The project directory answer was blank.
    Cancelled,
    /// The resolved directory does not exist. Nothing was written.
    MissingDirectory(PathBuf),
    Completed {
        root: PathBuf,
        test_command: String,
        report: ScaffoldReport,
    },
}

/// Run the setup wizard.
///
/// Relative directory answers resolve against `cwd`, which is also the
/// pre-filled default.
pub fn run_wizard(
    prompter: &mut impl Prompter,
    cwd: &Path,
    config: &SetupConfig,
) -> Result<WizardOutcome> {
    let answer = prompter.project_dir(&cwd.display().to_string())?;
    let has_existing_plan = prompter.has_existing_plan()?;

    // Whitespace-only counts as blank; otherwise the answer is used verbatim.
    if answer.trim().is_empty() {
        debug!("blank project directory, cancelling");
        return Ok(WizardOutcome::Cancelled);
    }

    let root = resolve_dir(cwd, Path::new(&answer));
    if !root.is_dir() {
        debug!(root = %root.display(), "project directory missing");
        return Ok(WizardOutcome::MissingDirectory(root));
    }

    let detected = detect_test_command(&root);
    let detected_opt = (!detected.is_empty()).then_some(detected.as_str());
    let default = detected_opt.unwrap_or(config.fallback_test_command.as_str());
    let answer = prompter.test_command(detected_opt, default)?;
    let test_command = match answer.trim() {
        "" => detected.clone(),
        cmd => cmd.to_string(),
    };

    let options = ScaffoldOptions {
        test_command: test_command.clone(),
        has_existing_plan,
    };
    let report = scaffold(&root, &options, config)?;
    info!(root = %root.display(), test_command = %test_command, "wizard completed");

    Ok(WizardOutcome::Completed {
        root,
        test_command,
        report,
    })
}

/// Join `input` onto `base` and fold `.`/`..` lexically.
fn resolve_dir(base: &Path, input: &Path) -> PathBuf {
    let joined = base.join(input);
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}
