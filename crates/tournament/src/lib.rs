//! Tournament Runner for Kamisado engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Loading match settings from TOML
//! - Writing JSON reports of match results
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the negamax and random engines
//! cargo run -p tournament -- match negamax random --games 20 --depth 2
//!
//! # Same, with settings from a file and a saved report
//! cargo run -p tournament -- match negamax random --config match.toml --out results.json
//! ```

mod error;
mod match_runner;
mod results;

pub use error::*;
pub use match_runner::*;
pub use results::*;
