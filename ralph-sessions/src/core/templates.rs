//! Template store for scaffolded files.
//!
//! Template bodies live under `assets/` as plain text and are embedded at
//! compile time. They are payloads for the external orchestrator and are
//! never parsed here. Only the conventions document and the placeholder
//! launcher script take parameters.

use std::borrow::Cow;

const IMPLEMENTATION_PLAN: &str = include_str!("../../assets/implementation_plan.md");
const CONVENTIONS: &str = include_str!("../../assets/conventions.md");
const TASK: &str = include_str!("../../assets/task.md");
const CONTEXT_GATHERING_AGENT: &str = include_str!("../../assets/agents/context-gathering.md");
const CODE_REVIEW_AGENT: &str = include_str!("../../assets/agents/code-review.md");
const LOGGING_AGENT: &str = include_str!("../../assets/agents/logging.md");
const LAUNCHER_SCRIPT: &str = include_str!("../../assets/ralph-sessions.sh");

const TEST_COMMAND_SLOT: &str = "{test_command}";
const SCRIPT_URL_SLOT: &str = "{script_url}";

/// Every template the scaffold can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    ImplementationPlan,
    Conventions,
    Task,
    ContextGatheringAgent,
    CodeReviewAgent,
    LoggingAgent,
    LauncherScript,
}

/// Values substituted into parameterized templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateConfig<'a> {
    /// Resolved test command; may be empty.
    pub test_command: &'a str,
    /// Used in place of an empty `test_command`.
    pub fallback_test_command: &'a str,
    /// Download location quoted by the placeholder launcher script.
    pub script_url: &'a str,
}

impl Template {
    pub const ALL: [Template; 7] = [
        Template::ImplementationPlan,
        Template::Conventions,
        Template::Task,
        Template::ContextGatheringAgent,
        Template::CodeReviewAgent,
        Template::LoggingAgent,
        Template::LauncherScript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::ImplementationPlan => "implementation-plan",
            Template::Conventions => "conventions",
            Template::Task => "task",
            Template::ContextGatheringAgent => "context-gathering-agent",
            Template::CodeReviewAgent => "code-review-agent",
            Template::LoggingAgent => "logging-agent",
            Template::LauncherScript => "launcher-script",
        }
    }

    /// Render the template body for `config`.
    ///
    /// Static templates are returned borrowed.
    pub fn render(self, config: &TemplateConfig<'_>) -> Cow<'static, str> {
        match self {
            Template::ImplementationPlan => Cow::Borrowed(IMPLEMENTATION_PLAN),
            Template::Conventions => {
                let command = effective_test_command(config);
                Cow::Owned(CONVENTIONS.replace(TEST_COMMAND_SLOT, command))
            }
            Template::Task => Cow::Borrowed(TASK),
            Template::ContextGatheringAgent => Cow::Borrowed(CONTEXT_GATHERING_AGENT),
            Template::CodeReviewAgent => Cow::Borrowed(CODE_REVIEW_AGENT),
            Template::LoggingAgent => Cow::Borrowed(LOGGING_AGENT),
            Template::LauncherScript => {
                Cow::Owned(LAUNCHER_SCRIPT.replace(SCRIPT_URL_SLOT, config.script_url))
            }
        }
    }
}

fn effective_test_command<'a>(config: &TemplateConfig<'a>) -> &'a str {
    let trimmed = config.test_command.trim();
    if trimmed.is_empty() {
        config.fallback_test_command
    } else {
        trimmed
    }
}
