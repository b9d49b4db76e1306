use crate::cli::Args;
use crate::discovery::ExclusionFilter;
use crate::errors::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Validated settings for one run.
///
/// There is no config file: everything comes from the command line or the
/// `REWORD_*` environment variables clap falls back to.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The phrase being replaced.
    pub before: String,
    /// The phrase written in its place.
    pub after: String,
    /// Target roots, in the order given. No two resolve to the same directory
    /// and none lies inside another.
    pub dirs: Vec<PathBuf>,
    /// Show diffs and renames without touching the disk.
    pub dry_run: bool,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Entries left out of discovery.
    pub exclude: ExclusionFilter,
}

impl RunConfig {
    /// Builds a `RunConfig` from parsed arguments.
    ///
    /// Fails when a phrase is empty, a root cannot be resolved, or an exclude
    /// pattern is not a valid glob.
    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            &args.before,
            &args.after,
            args.dirs.clone(),
            &args.exclude,
            args.dry_run,
            args.yes,
        )
    }

    pub fn new(
        before: &str,
        after: &str,
        dirs: Vec<PathBuf>,
        exclude: &[String],
        dry_run: bool,
        assume_yes: bool,
    ) -> Result<Self> {
        let before = validate_phrase("before", before)?;
        let after = validate_phrase("after", after)?;

        let dirs = if dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            dirs
        };

        Ok(Self {
            before,
            after,
            dirs: distinct_roots(dirs)?,
            dry_run,
            assume_yes,
            exclude: ExclusionFilter::new(exclude)?,
        })
    }

    /// Whether the user must approve the run before anything is written.
    pub fn needs_confirmation(&self) -> bool {
        !self.dry_run && !self.assume_yes
    }
}

/// Drops roots that resolve to an earlier root's directory or lie inside
/// another root, so no file is visited twice. The surviving roots keep the
/// spelling the user gave.
fn distinct_roots(dirs: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let resolved = dirs
        .into_iter()
        .map(|dir| {
            let canonical = fs::canonicalize(&dir).map_err(|e| Error::processing(&dir, e))?;
            Ok((dir, canonical))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut roots: Vec<PathBuf> = Vec::with_capacity(resolved.len());
    for (i, (dir, canonical)) in resolved.iter().enumerate() {
        let duplicate = resolved[..i].iter().any(|(_, earlier)| earlier == canonical);
        let nested = resolved
            .iter()
            .any(|(_, other)| other != canonical && canonical.starts_with(other));
        if duplicate || nested {
            log::debug!("{} is already covered by another root", dir.display());
            continue;
        }
        roots.push(dir.clone());
    }
    Ok(roots)
}

fn validate_phrase(which: &str, phrase: &str) -> Result<String> {
    if phrase.is_empty() {
        return Err(Error::InvalidPhrase(format!("the {which} phrase is empty")));
    }
    Ok(phrase.to_string())
}
