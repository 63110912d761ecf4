//! Terminal output for the wizard: banner, status lines and summary.
//!
//! This is product output on stdout and is unaffected by `RUST_LOG`.

use std::path::Path;

use dialoguer::console::style;

use crate::io::scaffold::{ScaffoldReport, Status, StatusLine};

pub fn print_banner() {
    println!();
    println!(
        "{}",
        style("╔══════════════════════════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║           Ralph-Sessions Setup Wizard                        ║").cyan()
    );
    println!(
        "{}",
        style("╚══════════════════════════════════════════════════════════════╝").cyan()
    );
    println!();
}

pub fn print_cancelled() {
    println!("{}", style("Setup cancelled.").red());
}

pub fn print_missing_directory(path: &Path) {
    println!(
        "{}",
        style(format!("Directory does not exist: {}", path.display())).red()
    );
}

pub fn print_report(report: &ScaffoldReport) {
    println!();
    println!("{}", style("Creating ralph-sessions structure...").cyan());
    println!();
    for line in &report.lines {
        print_status_line(line);
    }
}

fn print_status_line(line: &StatusLine) {
    let marker = match line.status {
        Status::Created => style("✓").green(),
        Status::AlreadyExists => style("○").yellow(),
    };
    println!("{marker} {}", line.message());
}

pub fn print_summary(report: &ScaffoldReport) {
    println!();
    println!(
        "{}",
        style("Ralph-Sessions initialized successfully!").green()
    );
    println!();
    println!("Next steps:");
    for (step, highlight) in next_steps(report.script_existed) {
        if highlight {
            println!("{}", style(format!("  {step}")).yellow());
        } else {
            println!("  {step}");
        }
    }
    println!();
}

/// Numbered next-step lines, flagged when they need attention.
///
/// The download step only appears when the placeholder script was generated,
/// which shifts the final step from 3 to 4.
pub fn next_steps(script_existed: bool) -> Vec<(String, bool)> {
    let mut steps = vec![
        ("Edit IMPLEMENTATION_PLAN.md to add your tasks", false),
        ("Edit AGENTS.md to configure project conventions", false),
    ];
    if !script_existed {
        steps.push(("Download the full ralph-sessions.sh script", true));
    }
    steps.push(("Run: ./ralph-sessions.sh single", false));

    steps
        .into_iter()
        .enumerate()
        .map(|(idx, (text, highlight))| (format!("{}. {text}", idx + 1), highlight))
        .collect()
}
