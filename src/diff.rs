//! Unified diffs of rewritten files.

use colored::Colorize;
use imara_diff::{Algorithm, BasicLineDiffPrinter, Diff, InternedInput, UnifiedDiffConfig};
use std::path::Path;

/// Renders a line diff of `before` → `after` with `--- a/` / `+++ b/` headers.
///
/// Removed lines are red and added lines green; headers, hunk ranges and
/// context lines are left uncolored.
pub fn unified(path: &Path, before: &str, after: &str) -> String {
    let input = InternedInput::new(before, after);
    let mut diff = Diff::compute(Algorithm::Histogram, &input);
    diff.postprocess_lines(&input);

    let hunks = diff
        .unified_diff(
            &BasicLineDiffPrinter(&input.interner),
            UnifiedDiffConfig::default(),
            &input,
        )
        .to_string();

    let mut out = format!("--- a/{0}\n+++ b/{0}\n", path.display());
    for line in hunks.lines() {
        out.push_str(&colorize_line(line));
        out.push('\n');
    }
    out
}

fn colorize_line(line: &str) -> String {
    if line.starts_with('-') && !line.starts_with("---") {
        line.red().to_string()
    } else if line.starts_with('+') && !line.starts_with("+++") {
        line.green().to_string()
    } else {
        line.to_string()
    }
}
