use crate::dictionary::Dictionary;
use crate::errors::{Error, Result};
use crate::output::Reporter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A file whose content the dictionary changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub before: Vec<u8>,
    pub after: Vec<u8>,
}

/// Applies a dictionary to file contents.
///
/// Pairs are applied in dictionary order as literal byte replacements;
/// each pair sees the content already rewritten by the pairs before it.
/// Content is never decoded, so files in a legacy encoding are rewritten
/// without touching their other bytes.
pub struct Replacer<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Replacer<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Processes a single file.
    ///
    /// Returns `Ok(None)` when nothing would change. Otherwise the new content
    /// is written in place (unless `dry_run`) and the change is returned.
    pub fn process_file(&self, path: &Path, dry_run: bool) -> Result<Option<FileChange>> {
        let before = fs::read(path).map_err(|e| Error::processing(path, e))?;
        let after = self.dictionary.apply_bytes(&before);
        if after == before {
            return Ok(None);
        }

        if !dry_run {
            write_preserving_permissions(path, &after)?;
        }

        Ok(Some(FileChange {
            path: path.to_path_buf(),
            before,
            after,
        }))
    }
}

/// Replaces the content of `path` atomically, keeping its permission bits.
///
/// The new content goes to a temporary file next to `path`, which receives the
/// original permissions and is then persisted over it.
fn write_preserving_permissions(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path)
        .map_err(|e| Error::processing(path, e))?
        .permissions();

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::processing(path, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::processing(path, e))?;
    fs::set_permissions(temp_file.path(), permissions).map_err(|e| Error::processing(path, e))?;
    temp_file.persist(path)?;
    Ok(())
}

/// Rewrites every file in `paths`, in order, printing a diff for each change.
///
/// Diffs are printed in dry-run mode too, so a preview reads the same as the
/// real run. The first failure stops the batch; earlier files stay rewritten.
pub fn replace<W: Write>(
    paths: &[PathBuf],
    dictionary: &Dictionary,
    dry_run: bool,
    reporter: &mut Reporter<W>,
) -> Result<Vec<FileChange>> {
    let replacer = Replacer::new(dictionary);
    let mut changes = Vec::new();

    for path in paths {
        if let Some(change) = replacer.process_file(path, dry_run)? {
            reporter.diff(&change.path, &change.before, &change.after)?;
            changes.push(change);
        }
    }

    log::info!("{} of {} files changed", changes.len(), paths.len());
    Ok(changes)
}
