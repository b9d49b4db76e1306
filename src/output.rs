//! Everything `reword` shows the user.
//!
//! A [`Reporter`] writes to any `Write` target, so the binary hands it
//! standard output while tests hand it a `Vec<u8>` and compare what a dry run
//! and a real run printed.

use crate::diff;
use crate::dictionary::Dictionary;
use crate::errors::Result;
use colored::Colorize;
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Counts reported once a run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub paths_renamed: usize,
    pub dry_run: bool,
}

/// Writes status banners, dictionaries, diffs and renames.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `>> title`, in cyan.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "{}", format!(">> {title}").cyan())?;
        Ok(())
    }

    /// A yellow status line such as `Dry running...`.
    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message.yellow())?;
        Ok(())
    }

    pub fn line(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    pub fn target_files(&mut self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            writeln!(self.out, "{}", path.display())?;
        }
        Ok(())
    }

    pub fn dictionary(&mut self, title: &str, dictionary: &Dictionary) -> Result<()> {
        self.banner(title)?;
        writeln!(self.out, "{dictionary}")?;
        Ok(())
    }

    /// The colored unified diff of one rewritten file.
    ///
    /// Content that is not valid UTF-8 is shown lossily; the file itself keeps
    /// its bytes.
    pub fn diff(&mut self, path: &Path, before: &[u8], after: &[u8]) -> Result<()> {
        let before = String::from_utf8_lossy(before);
        let after = String::from_utf8_lossy(after);
        writeln!(self.out, "{}", diff::unified(path, &before, &after))?;
        Ok(())
    }

    /// `dir/old => dir/new`, with the old basename red and the new one green.
    pub fn rename(&mut self, from: &Path, new_name: &str) -> Result<()> {
        let dir = from.parent().unwrap_or_else(|| Path::new(""));
        let old_name = from
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(
            self.out,
            "{} => {}",
            dir.join(old_name.red().to_string()).display(),
            dir.join(new_name.green().to_string()).display()
        )?;
        Ok(())
    }

    pub fn summary(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.out, "\n{}", "-".repeat(50))?;
        writeln!(self.out, "Files scanned : {}", summary.files_scanned)?;
        writeln!(self.out, "Files changed : {}", summary.files_changed)?;
        writeln!(self.out, "Paths renamed : {}", summary.paths_renamed)?;
        if summary.dry_run {
            writeln!(self.out, "{}", "(dry run: nothing was written)".yellow())?;
        }
        Ok(())
    }
}

/// Prints `ERROR: message` to standard error, in red.
pub fn print_error(message: impl Display) {
    eprintln!("{}", format!("ERROR: {message}").red());
}
