//! Finding the text files a run may touch.
//!
//! [`discover`] walks one root with `ignore::WalkBuilder`, with every
//! gitignore-style filter turned off and links never followed. What to leave
//! out is decided by an [`EntryFilter`], so the walk itself knows nothing about
//! ignore lists or glob patterns.

use crate::content_type;
use crate::errors::{Error, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory names that are never descended into.
pub const IGNORED_DIRS: [&str; 5] = [".git", ".idea", "node_modules", "build", "public"];

/// Decides whether a walked entry is kept.
///
/// `relative` is the entry's path relative to the walk root. Returning `false`
/// for a directory prunes the whole subtree.
pub trait EntryFilter: Send + Sync {
    fn allows(&self, relative: &Path, is_dir: bool) -> bool;
}

impl<F> EntryFilter for F
where
    F: Fn(&Path, bool) -> bool + Send + Sync,
{
    fn allows(&self, relative: &Path, is_dir: bool) -> bool {
        self(relative, is_dir)
    }
}

/// The default policy: the fixed [`IGNORED_DIRS`] plus user glob patterns.
///
/// A glob excludes an entry when it matches either the entry's basename or its
/// path relative to the root, so `*.md` hits `README.md` at any depth and
/// `docs/*` hits everything directly under `docs`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    /// Compiles the given glob patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    fn matches_glob(&self, relative: &Path) -> bool {
        let basename = relative.file_name().and_then(|n| n.to_str());
        self.patterns.iter().any(|pattern| {
            basename.is_some_and(|name| pattern.matches(name)) || pattern.matches_path(relative)
        })
    }
}

impl EntryFilter for ExclusionFilter {
    fn allows(&self, relative: &Path, is_dir: bool) -> bool {
        if is_dir {
            let ignored = relative
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| IGNORED_DIRS.contains(&name));
            if ignored {
                return false;
            }
        }
        !self.matches_glob(relative)
    }
}

/// Returns every eligible text file under `root`, sorted ascending.
///
/// Symbolic links are neither followed nor listed. Files whose content does
/// not sniff as `text/*` are skipped. The first directory or read error aborts
/// the walk.
pub fn discover(root: &Path, filter: Arc<dyn EntryFilter>) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| Error::processing(root, e))?;
    if !metadata.is_dir() {
        return Err(Error::processing(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let base = root.to_path_buf();
    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.path_is_symlink() {
                log::debug!("skipping symlink {}", entry.path().display());
                return false;
            }
            let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let allowed = filter.allows(relative, is_dir);
            if !allowed {
                log::debug!("excluding {}", entry.path().display());
            }
            allowed
        });

    let mut paths = Vec::new();
    for entry in walker.build() {
        let entry = entry?;
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let content = fs::read(path).map_err(|e| Error::processing(path, e))?;
        let detected = content_type::sniff(&content);
        if !detected.is_text() {
            log::debug!("skipping {} ({detected})", path.display());
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort();
    paths.dedup();
    log::info!("found {} target files under {}", paths.len(), root.display());
    Ok(paths)
}
