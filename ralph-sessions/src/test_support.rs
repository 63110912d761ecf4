//! Test-only helpers: scripted prompt answers and project fixtures.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::prompt::Prompter;

/// Answers wizard prompts from fixed values and records what was asked.
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    project_dir: String,
    has_existing_plan: bool,
    test_command: String,
    project_dir_default: Option<String>,
    test_command_prompt: Option<(Option<String>, String)>,
}

impl ScriptedPrompter {
    pub fn new(project_dir: &str, has_existing_plan: bool, test_command: &str) -> Self {
        Self {
            project_dir: project_dir.to_string(),
            has_existing_plan,
            test_command: test_command.to_string(),
            project_dir_default: None,
            test_command_prompt: None,
        }
    }

    /// Default offered for the project directory, if it was asked.
    pub fn project_dir_default(&self) -> Option<&str> {
        self.project_dir_default.as_deref()
    }

    /// `(detected, default)` offered for the test command, if it was asked.
    pub fn test_command_prompt(&self) -> Option<(Option<String>, String)> {
        self.test_command_prompt.clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn project_dir(&mut self, default: &str) -> Result<String> {
        self.project_dir_default = Some(default.to_string());
        Ok(self.project_dir.clone())
    }

    fn has_existing_plan(&mut self) -> Result<bool> {
        Ok(self.has_existing_plan)
    }

    fn test_command(&mut self, detected: Option<&str>, default: &str) -> Result<String> {
        self.test_command_prompt = Some((detected.map(str::to_string), default.to_string()));
        Ok(self.test_command.clone())
    }
}

/// Create a temporary project directory containing `files` (relative path, contents).
pub fn project_with_files(files: &[(&str, &str)]) -> Result<TempDir> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    for (rel, contents) in files {
        write_file(temp.path(), rel, contents)?;
    }
    Ok(temp)
}

fn write_file(root: &Path, rel: &str, contents: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
}
