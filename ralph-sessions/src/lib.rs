//! Setup wizard for the Ralph-Sessions autonomous development workflow.
//!
//! Scaffolds agent-role documents, plan and task templates, and seed state
//! files into an existing project directory. The layout is split as:
//!
//! - **[`core`]**: Template text and rendering. No I/O.
//! - **[`io`]**: Filesystem side effects (detection, scaffolding, state
//!   files, config) and terminal prompts.
//!
//! [`wizard`] ties the two together into the interactive flow; [`output`]
//! renders its results.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod output;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod wizard;
