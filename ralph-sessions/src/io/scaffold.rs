//! Idempotent scaffolding of the Ralph-Sessions layout.
//!
//! Every step is "create if absent": directories are created recursively and
//! files are only written when the destination does not exist yet. Nothing
//! is ever truncated or removed, so re-running is always safe.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::config::SetupConfig;
use super::state::{initial_backlog_json, initial_iteration_json};
use crate::core::templates::{Template, TemplateConfig};

/// Directories created under the project root, relative to it.
pub const SCAFFOLD_DIRS: [&str; 6] = [
    ".claude/agents",
    "state",
    "logs/sessions",
    "logs/transcripts/logging",
    "plans",
    "templates",
];

/// All canonical paths of the layout for a project root.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub root: PathBuf,
    pub plan_path: PathBuf,
    pub conventions_path: PathBuf,
    pub context_gathering_path: PathBuf,
    pub code_review_path: PathBuf,
    pub logging_path: PathBuf,
    pub task_template_path: PathBuf,
    pub plan_template_path: PathBuf,
    pub conventions_template_path: PathBuf,
    pub iteration_path: PathBuf,
    pub backlog_path: PathBuf,
    pub script_path: PathBuf,
}

impl SessionPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let agents_dir = root.join(".claude").join("agents");
        let state_dir = root.join("state");
        let templates_dir = root.join("templates");
        Self {
            root: root.clone(),
            plan_path: root.join("IMPLEMENTATION_PLAN.md"),
            conventions_path: root.join("AGENTS.md"),
            context_gathering_path: agents_dir.join("context-gathering.md"),
            code_review_path: agents_dir.join("code-review.md"),
            logging_path: agents_dir.join("logging.md"),
            task_template_path: templates_dir.join("task.md"),
            plan_template_path: templates_dir.join("IMPLEMENTATION_PLAN.md"),
            conventions_template_path: templates_dir.join("AGENTS.md"),
            iteration_path: state_dir.join("iteration.json"),
            backlog_path: state_dir.join("backlog-queue.json"),
            script_path: root.join("ralph-sessions.sh"),
        }
    }

    /// Absolute paths of [`SCAFFOLD_DIRS`].
    pub fn dirs(&self) -> Vec<PathBuf> {
        SCAFFOLD_DIRS.iter().map(|dir| self.root.join(dir)).collect()
    }
}

/// Inputs for [`scaffold`].
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Resolved test command (may be empty).
    pub test_command: String,
    /// User said an implementation plan already exists.
    pub has_existing_plan: bool,
}

/// What a status line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Directories,
    File(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Created,
    AlreadyExists,
}

/// One observable scaffold action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub subject: Subject,
    pub status: Status,
}

impl StatusLine {
    /// Human-readable text, without the status marker.
    pub fn message(&self) -> String {
        match (self.subject, self.status) {
            (Subject::Directories, Status::Created) => "Created directories".to_string(),
            (Subject::Directories, Status::AlreadyExists) => "Directories already exist".to_string(),
            (Subject::File(rel), Status::Created) => format!("Created {rel}"),
            (Subject::File(rel), Status::AlreadyExists) => format!("{rel} already exists"),
        }
    }
}

/// Result of a scaffold run, in action order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub lines: Vec<StatusLine>,
    /// `ralph-sessions.sh` was present before this run.
    pub script_existed: bool,
}

impl ScaffoldReport {
    pub fn created(&self) -> impl Iterator<Item = &StatusLine> {
        self.lines
            .iter()
            .filter(|line| line.status == Status::Created)
    }
}

/// Create the Ralph-Sessions layout in `root`.
///
/// `root` must already exist. The first I/O failure aborts the remaining
/// steps; whatever was written before it stays in place.
pub fn scaffold(
    root: &Path,
    options: &ScaffoldOptions,
    config: &SetupConfig,
) -> Result<ScaffoldReport> {
    let paths = SessionPaths::new(root);
    let template_config = TemplateConfig {
        test_command: &options.test_command,
        fallback_test_command: &config.fallback_test_command,
        script_url: &config.script_url,
    };
    let mut lines = Vec::new();

    let mut any_created = false;
    for dir in paths.dirs() {
        any_created |= create_dir(&dir)?;
    }
    lines.push(StatusLine {
        subject: Subject::Directories,
        status: if any_created {
            Status::Created
        } else {
            Status::AlreadyExists
        },
    });

    let plan_status = if options.has_existing_plan {
        debug!("user reported an existing plan, not writing one");
        Status::AlreadyExists
    } else {
        write_template(&paths.plan_path, Template::ImplementationPlan, &template_config)?
    };
    lines.push(file_line("IMPLEMENTATION_PLAN.md", plan_status));

    let steps: [(&'static str, &PathBuf, Template); 7] = [
        ("AGENTS.md", &paths.conventions_path, Template::Conventions),
        (
            ".claude/agents/context-gathering.md",
            &paths.context_gathering_path,
            Template::ContextGatheringAgent,
        ),
        (
            ".claude/agents/code-review.md",
            &paths.code_review_path,
            Template::CodeReviewAgent,
        ),
        (
            ".claude/agents/logging.md",
            &paths.logging_path,
            Template::LoggingAgent,
        ),
        ("templates/task.md", &paths.task_template_path, Template::Task),
        (
            "templates/IMPLEMENTATION_PLAN.md",
            &paths.plan_template_path,
            Template::ImplementationPlan,
        ),
        (
            "templates/AGENTS.md",
            &paths.conventions_template_path,
            Template::Conventions,
        ),
    ];
    for (rel, path, template) in steps {
        let status = write_template(path, template, &template_config)?;
        lines.push(file_line(rel, status));
    }

    let status = write_if_absent(&paths.iteration_path, initial_iteration_json)?;
    lines.push(file_line("state/iteration.json", status));
    let status = write_if_absent(&paths.backlog_path, initial_backlog_json)?;
    lines.push(file_line("state/backlog-queue.json", status));

    let script_status =
        write_template(&paths.script_path, Template::LauncherScript, &template_config)?;
    if script_status == Status::Created {
        make_executable(&paths.script_path)?;
    }
    lines.push(file_line("ralph-sessions.sh", script_status));

    let report = ScaffoldReport {
        lines,
        script_existed: script_status == Status::AlreadyExists,
    };
    info!(
        root = %root.display(),
        created = report.created().count(),
        "scaffold complete"
    );
    Ok(report)
}

fn file_line(rel: &'static str, status: Status) -> StatusLine {
    StatusLine {
        subject: Subject::File(rel),
        status,
    }
}

/// Returns whether the directory had to be created.
fn create_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))?;
    debug!(path = %path.display(), "created directory");
    Ok(true)
}

fn write_template(path: &Path, template: Template, config: &TemplateConfig<'_>) -> Result<Status> {
    write_if_absent(path, || Ok(template.render(config).into_owned()))
}

/// Create `path` with `contents` unless something already occupies it.
///
/// The check and the create are one `create_new` open, so an existing file,
/// directory or symlink (dangling included) is left alone.
fn write_if_absent(path: &Path, contents: impl FnOnce() -> Result<String>) -> Result<Status> {
    let contents = contents()?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "exists, leaving untouched");
            return Ok(Status::AlreadyExists);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("create file {}", path.display()));
        }
    };
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write file {}", path.display()))?;
    debug!(path = %path.display(), "wrote file");
    Ok(Status::Created)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("chmod {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
