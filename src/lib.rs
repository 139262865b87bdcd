//! Catalog engines behind the `kitshelf` CLI: facet filtering, quiz match
//! scoring and kit file-tree navigation over a static catalog.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use catalog::*;
pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::filter::*;
pub use services::links::*;
pub use services::output::*;
pub use services::quiz::*;
pub use services::scoring::*;
pub use services::tree::*;
