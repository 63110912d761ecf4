//! Interactive prompts for the setup wizard.
//!
//! The wizard talks to the user through [`Prompter`] so the flow can be
//! driven by scripted answers in tests.

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Source of answers for the setup wizard.
pub trait Prompter {
    /// Ask for the project directory, pre-filled with `default`.
    fn project_dir(&mut self, default: &str) -> Result<String>;

    /// Ask whether an `IMPLEMENTATION_PLAN.md` already exists.
    fn has_existing_plan(&mut self) -> Result<bool>;

    /// Ask for the test command, pre-filled with `default`.
    ///
    /// `detected` is the auto-detected command, if any, for display.
    fn test_command(&mut self, detected: Option<&str>, default: &str) -> Result<String>;
}

/// Terminal prompts via `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn project_dir(&mut self, default: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt("Project directory")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .context("read project directory")
    }

    fn has_existing_plan(&mut self) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Do you have an existing IMPLEMENTATION_PLAN.md?")
            .default(false)
            .interact()
            .context("read existing plan answer")
    }

    fn test_command(&mut self, detected: Option<&str>, default: &str) -> Result<String> {
        let prompt = match detected {
            Some(cmd) => format!("Test command (auto-detected: {cmd})"),
            None => "Test command".to_string(),
        };
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .context("read test command")
    }
}
