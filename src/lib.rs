//! `reword` renames a hyphenated identifier across a directory tree.
//!
//! It provides the core logic for the `reword` command-line tool but can also
//! be used as a library. The main components are:
//!
//! - `case`: pure functions rendering a phrase in each casing convention.
//! - `dictionary`: ordered `before => after` pairs built from two phrases.
//! - `discovery`: walks target directories and returns the eligible text files.
//! - `replacer`: rewrites file contents with a dictionary.
//! - `renamer`: renames files and directories, deepest first.
//! - `runner`: ties the steps together for one run.
//!
//! Everything runs sequentially on a single thread.

pub mod case;
pub mod cli;
pub mod config;
pub mod content_type;
pub mod dictionary;
pub mod diff;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod prompt;
pub mod renamer;
pub mod replacer;
pub mod runner;

// Re-export main types for easier access by library users.
pub use config::RunConfig;
pub use dictionary::Dictionary;
pub use errors::{Error, Result};
pub use replacer::Replacer;
