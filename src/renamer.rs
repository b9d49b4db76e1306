use crate::dictionary::Dictionary;
use crate::errors::{Error, Result};
use crate::output::Reporter;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A path segment that was (or, in a dry run, would be) renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Returns `path` followed by each of its ancestors strictly below `base`.
///
/// `a/b/c.txt` under base `.` yields `[a/b/c.txt, a/b, a]`.
pub fn expand_ancestors(base: &Path, path: &Path) -> Vec<PathBuf> {
    let mut chain = vec![path.to_path_buf()];
    let mut current = path.parent();
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || dir == base || !dir.starts_with(base) {
            break;
        }
        chain.push(dir.to_path_buf());
        current = dir.parent();
    }
    chain
}

/// Every file and directory to consider, deepest first.
///
/// Chains are merged without duplicates and sorted by descending path string.
/// A path always sorts after its own prefix, so every descendant comes before
/// its ancestors and a directory is only renamed once its contents are done.
pub fn rename_order(base: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut ordered: Vec<PathBuf> = paths
        .iter()
        .flat_map(|path| expand_ancestors(base, path))
        .filter(|path| seen.insert(path.clone()))
        .collect();
    ordered.sort_by(|a, b| b.as_os_str().cmp(a.as_os_str()));
    ordered
}

/// Renames files and directories under `base` whose basename the dictionary
/// changes.
///
/// Only the last segment of each path is rewritten. An existing destination is
/// never overwritten; the first failure stops the remaining renames.
pub fn rename<W: Write>(
    base: &Path,
    paths: &[PathBuf],
    dictionary: &Dictionary,
    dry_run: bool,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Rename>> {
    let mut renames = Vec::new();

    for from in rename_order(base, paths) {
        let Some(name) = from.file_name().and_then(|n| n.to_str()) else {
            log::debug!("skipping non UTF-8 name {}", from.display());
            continue;
        };

        let new_name = dictionary.apply(name);
        if new_name == name {
            continue;
        }

        let to = from.with_file_name(&new_name);
        if !dry_run {
            rename_segment(&from, &to)?;
        }
        reporter.rename(&from, &new_name)?;
        renames.push(Rename { from, to });
    }

    log::info!("{} paths renamed under {}", renames.len(), base.display());
    Ok(renames)
}

fn rename_segment(from: &Path, to: &Path) -> Result<()> {
    if fs::symlink_metadata(to).is_ok() && !is_same_entry(from, to) {
        return Err(Error::RenameCollision {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Case-insensitive file systems report a case-only rename target as existing.
#[cfg(unix)]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(x), Ok(y)) => x.dev() == y.dev() && x.ino() == y.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}
