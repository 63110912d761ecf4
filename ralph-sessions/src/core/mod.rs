//! Pure logic for the setup wizard: template text and rendering.
//!
//! Nothing in here touches the filesystem.

pub mod templates;
