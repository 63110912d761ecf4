//! End-to-end wizard runs driven by scripted answers.
//!
//! Exercises detection, prompting and scaffolding together against real
//! temporary project directories.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ralph_sessions::io::config::SetupConfig;
use ralph_sessions::io::scaffold::{SessionPaths, Status};
use ralph_sessions::io::state::{IterationState, load_backlog_queue, load_iteration_state};
use ralph_sessions::test_support::{ScriptedPrompter, project_with_files};
use ralph_sessions::wizard::{WizardOutcome, run_wizard};

/// Snapshot every file under `root` (relative path → contents).
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let rel = path.strip_prefix(root).expect("relative").to_path_buf();
                files.insert(rel, fs::read(&path).expect("read file"));
            }
        }
    }
    files
}

#[test]
fn node_project_gets_npm_test_in_conventions() {
    let project = project_with_files(&[(
        "package.json",
        r#"{"name":"web","scripts":{"test":"jest"}}"#,
    )])
    .expect("fixture");
    let mut prompter = ScriptedPrompter::new(".", false, "");

    let outcome = run_wizard(&mut prompter, project.path(), &SetupConfig::default())
        .expect("wizard");

    let WizardOutcome::Completed {
        root,
        test_command,
        report,
    } = outcome
    else {
        panic!("expected completed outcome");
    };
    assert_eq!(root, project.path());
    assert_eq!(test_command, "npm test");
    assert!(report.lines.iter().all(|line| line.status == Status::Created));
    assert_eq!(
        prompter.project_dir_default(),
        Some(project.path().display().to_string().as_str())
    );

    let paths = SessionPaths::new(project.path());
    let conventions = fs::read_to_string(&paths.conventions_path).expect("read AGENTS.md");
    assert!(conventions.contains("test_command: npm test\n"));
}

#[test]
fn rerunning_wizard_is_idempotent() {
    let project = project_with_files(&[("Cargo.toml", "[package]\nname = \"demo\"\n")])
        .expect("fixture");
    let config = SetupConfig::default();

    let mut first = ScriptedPrompter::new(".", false, "");
    run_wizard(&mut first, project.path(), &config).expect("first run");
    let after_first = snapshot(project.path());

    let mut second = ScriptedPrompter::new(".", true, "cargo nextest run");
    let outcome = run_wizard(&mut second, project.path(), &config).expect("second run");
    let after_second = snapshot(project.path());

    assert_eq!(after_first, after_second);
    match outcome {
        WizardOutcome::Completed { report, .. } => {
            assert_eq!(report.created().count(), 0);
            assert!(report.script_existed);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn user_edits_survive_a_rerun() {
    let project = project_with_files(&[("IMPLEMENTATION_PLAN.md", "# Existing plan\n")])
        .expect("fixture");
    let config = SetupConfig::default();
    let paths = SessionPaths::new(project.path());

    let mut prompter = ScriptedPrompter::new(".", false, "pytest -q");
    run_wizard(&mut prompter, project.path(), &config).expect("first run");
    fs::write(&paths.logging_path, "custom logging role\n").expect("edit");

    let mut prompter = ScriptedPrompter::new(".", false, "pytest -q");
    run_wizard(&mut prompter, project.path(), &config).expect("second run");

    assert_eq!(
        fs::read_to_string(&paths.plan_path).expect("plan"),
        "# Existing plan\n"
    );
    assert_eq!(
        fs::read_to_string(&paths.logging_path).expect("logging"),
        "custom logging role\n"
    );
}

#[test]
fn fresh_state_files_are_seeded() {
    let project = project_with_files(&[]).expect("fixture");
    let mut prompter = ScriptedPrompter::new(&project.path().display().to_string(), false, "");

    run_wizard(&mut prompter, Path::new("/"), &SetupConfig::default()).expect("wizard");

    let paths = SessionPaths::new(project.path());
    assert_eq!(
        load_iteration_state(&paths.iteration_path).expect("iteration"),
        IterationState {
            iteration: 0,
            task_index: 0
        }
    );
    assert!(load_backlog_queue(&paths.backlog_path).expect("backlog").is_empty());
    assert!(
        fs::read_to_string(&paths.conventions_path)
            .expect("AGENTS.md")
            .contains("test_command: npm test\n")
    );
}

#[test]
fn nonexistent_target_leaves_filesystem_untouched() {
    let project = project_with_files(&[]).expect("fixture");
    let mut prompter = ScriptedPrompter::new("nested/missing", false, "make test");

    let outcome =
        run_wizard(&mut prompter, project.path(), &SetupConfig::default()).expect("wizard");

    assert_eq!(
        outcome,
        WizardOutcome::MissingDirectory(project.path().join("nested/missing"))
    );
    assert!(snapshot(project.path()).is_empty());
    assert_eq!(fs::read_dir(project.path()).expect("read dir").count(), 0);
}
