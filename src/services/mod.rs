//! Service layer: the catalog engines and their side-effect helpers.
//!
//! ## Service map
//! - `filter.rs`: facet/text filtering over kits and scripts.
//! - `scoring.rs`: quiz answers, match score, top-three ranking.
//! - `tree.rs`: path resolution, tree view state, previews, outline text.
//! - `quiz.rs`: quiz step sequencer with auto-advance tokens.
//! - `links.rs`: repository path extraction and sandbox links.
//! - `config.rs`: config file loading and catalog source precedence.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Engines are pure functions of the catalog and caller-owned state.
//! - Side effects (stdout, config file reads) stay in `config.rs`/`output.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod filter;
pub mod links;
pub mod output;
pub mod quiz;
pub mod scoring;
pub mod tree;
