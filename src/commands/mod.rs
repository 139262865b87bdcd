//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `browse.rs`: search/languages/categories/show/tree/file/sandbox/validate.
//! - `quiz.rs`: recommend and the interactive quiz.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate filtering, scoring and tree logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod browse;
pub mod quiz;

pub use browse::handle_browse_commands;
pub use quiz::handle_quiz_commands;
