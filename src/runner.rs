//! One complete `reword` run.
//!
//! Discovery runs for every root first, then the dictionaries are shown and
//! the user is asked once. Text replacement covers all files before any path
//! is renamed, so no file is read from a location that has already moved.

use crate::config::RunConfig;
use crate::dictionary::Dictionary;
use crate::discovery::{self, EntryFilter};
use crate::errors::{Error, Result};
use crate::output::{Reporter, Summary};
use crate::prompt::Confirmation;
use crate::{renamer, replacer};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// A target root and the files discovered under it.
#[derive(Debug, Clone)]
pub struct Target {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed(Summary),
    /// The user declined the confirmation prompt. Nothing was written.
    Cancelled,
}

pub const CONFIRM_PROMPT: &str = "Do you replace words, sure?";

/// Discovers files under every configured root.
pub fn discover_targets(config: &RunConfig) -> Result<Vec<Target>> {
    let filter: Arc<dyn EntryFilter> = Arc::new(config.exclude.clone());
    config
        .dirs
        .iter()
        .map(|root| {
            let files = discovery::discover(root, Arc::clone(&filter))?;
            Ok(Target {
                root: root.clone(),
                files,
            })
        })
        .collect()
}

/// Runs discovery, confirmation, text replacement and renaming in order.
pub fn run<W: Write>(
    config: &RunConfig,
    confirmation: &mut dyn Confirmation,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    let targets = discover_targets(config)?;

    let mut seen = HashSet::new();
    let files: Vec<PathBuf> = targets
        .iter()
        .flat_map(|target| target.files.iter())
        .filter(|path| seen.insert(*path))
        .cloned()
        .collect();
    if files.is_empty() {
        return Err(Error::NoTargetFiles);
    }

    reporter.banner("Target files")?;
    reporter.target_files(&files)?;

    let text_dictionary = Dictionary::for_text(&config.before, &config.after)?;
    reporter.dictionary("Dictionary for text replacement", &text_dictionary)?;

    let name_dictionary = Dictionary::for_file_names(&config.before, &config.after)?;
    reporter.dictionary("Dictionary for file rename", &name_dictionary)?;

    if text_dictionary.is_ambiguous() {
        for pair in text_dictionary.duplicates() {
            log::warn!("{} repeats an earlier mapping: {pair}", pair.convention);
        }
    }

    if config.dry_run {
        reporter.notice("Dry running...")?;
    } else if config.needs_confirmation() && !confirmation.confirm(CONFIRM_PROMPT)? {
        reporter.line("Cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    reporter.banner("Replacing text...")?;
    let changes = replacer::replace(&files, &text_dictionary, config.dry_run, reporter)?;

    reporter.banner("Renaming files and dirs...")?;
    let mut paths_renamed = 0;
    for target in &targets {
        let renames = renamer::rename(
            &target.root,
            &target.files,
            &name_dictionary,
            config.dry_run,
            reporter,
        )?;
        paths_renamed += renames.len();
    }

    let summary = Summary {
        files_scanned: files.len(),
        files_changed: changes.len(),
        paths_renamed,
        dry_run: config.dry_run,
    };
    reporter.summary(&summary)?;
    Ok(Outcome::Completed(summary))
}
