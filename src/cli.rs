use clap::{ColorChoice, Parser};
use std::path::PathBuf;
use std::process;

/// Rename a hyphenated identifier everywhere in a directory tree.
///
/// `reword` rewrites every casing of a phrase (`FooBar`, `fooBar`, `FOO_BAR`,
/// `foo_bar`, `foo-bar`, `foobar`, `Foo Bar`, ...) in text files and renames
/// files and directories whose names contain it.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename a hyphenated identifier in every casing across a directory tree",
    long_about = "reword - bulk find-and-replace of a hyphenated identifier in all its casings.

Rewrites file contents and renames files and directories under each --dir.
Binary files, symbolic links and the .git, .idea, node_modules, build and
public directories are never touched.

EXAMPLES:
  reword foo-bar baz-qux                   # Rename in the current directory
  reword foo-bar baz-qux --dry-run         # Preview diffs and renames only
  reword foo-bar baz-qux -d api -d web     # Several target directories
  reword foo-bar baz-qux -e '*.md' -e 'docs/*' --yes"
)]
pub struct Args {
    /// The hyphenated phrase to replace, e.g. `foo-bar`.
    pub before: String,

    /// The hyphenated phrase to write instead, e.g. `baz-qux`.
    pub after: String,

    /// A target directory. Repeat for several roots.
    #[arg(
        short,
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        env = "REWORD_DIRS",
        value_delimiter = ','
    )]
    pub dirs: Vec<PathBuf>,

    /// Preview the diffs and renames without modifying anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long, env = "REWORD_YES")]
    pub yes: bool,

    /// A glob matched against basenames and root-relative paths. Repeatable.
    #[arg(short, long, value_name = "GLOB", env = "REWORD_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command-line arguments and returns the populated `Args` struct.
///
/// Usage errors exit with status 1; `--help` and `--version` exit with 0.
pub fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            process::exit(1);
        }
        err.exit()
    })
}
