//! I/O helpers for the setup wizard.

pub mod config;
pub mod detect;
pub mod prompt;
pub mod scaffold;
pub mod state;
