//! Stable exit codes for the `ralph-sessions` binary.

/// Setup finished, was cancelled, or the target directory was missing.
pub const OK: i32 = 0;
/// An unexpected error propagated to the top level.
pub const FAILED: i32 = 1;
