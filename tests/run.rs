use reword::config::RunConfig;
use reword::output::Reporter;
use reword::prompt::Answer;
use reword::runner::{self, Outcome};
use reword::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small project named `foo-bar` with a nested module, a binary asset and
/// a dependency directory that must stay untouched.
fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "Cargo.toml", b"[package]\nname = \"foo-bar\"\n");
    write(
        root,
        "src/foo_bar/mod.rs",
        b"pub struct FooBar;\npub const FOO_BAR: &str = \"Foo Bar\";\n",
    );
    write(root, "src/main.rs", b"use foo_bar::FooBar;\nfn main() {}\n");
    write(root, "assets/foo-bar.png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR foo-bar");
    write(root, "node_modules/foo-bar/index.js", b"module.exports = 'foo-bar';\n");
    temp_dir
}

fn config(root: &Path, dry_run: bool) -> RunConfig {
    RunConfig::new(
        "foo-bar",
        "baz-qux",
        vec![root.to_path_buf()],
        &[],
        dry_run,
        false,
    )
    .unwrap()
}

fn run(config: &RunConfig, answer: bool) -> (reword::Result<Outcome>, String) {
    colored::control::set_override(false);
    let mut reporter = Reporter::new(Vec::new());
    let outcome = runner::run(config, &mut Answer(answer), &mut reporter);
    (outcome, String::from_utf8(reporter.into_inner()).unwrap())
}

/// Snapshot of every file under `root`: relative path and bytes.
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let bytes = fs::read(&path).unwrap();
                out.push((path.strip_prefix(root).unwrap().to_path_buf(), bytes));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// The part of the output that previews diffs and renames.
fn preview(output: &str) -> &str {
    let start = output.find(">> Replacing text...").unwrap();
    let end = output.rfind(&"-".repeat(50)).unwrap();
    &output[start..end]
}

#[test]
fn test_full_run_rewrites_and_renames() {
    let temp_dir = fixture();
    let root = temp_dir.path();

    let (outcome, output) = run(&config(root, false), true);
    let Outcome::Completed(summary) = outcome.unwrap() else {
        panic!("run was cancelled");
    };

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_changed, 3);
    assert_eq!(summary.paths_renamed, 1);

    assert_eq!(
        fs::read_to_string(root.join("Cargo.toml")).unwrap(),
        "[package]\nname = \"baz-qux\"\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("src/baz_qux/mod.rs")).unwrap(),
        "pub struct BazQux;\npub const BAZ_QUX: &str = \"Baz Qux\";\n"
    );
    assert!(!root.join("src/foo_bar").exists());

    // binary asset and node_modules are out of scope, name and content
    assert!(root.join("assets/foo-bar.png").is_file());
    assert_eq!(
        fs::read_to_string(root.join("node_modules/foo-bar/index.js")).unwrap(),
        "module.exports = 'foo-bar';\n"
    );

    assert!(output.contains(">> Target files"));
    assert!(output.contains(">> Dictionary for text replacement"));
    assert!(output.contains(">> Dictionary for file rename"));
    assert!(output.contains("foo_bar => "));
}

#[test]
fn test_dry_run_changes_nothing_and_previews_the_same() {
    let dry_dir = fixture();
    let real_dir = fixture();
    let before = snapshot(dry_dir.path());

    let (dry, dry_output) = run(&config(dry_dir.path(), true), false);
    assert!(matches!(dry.unwrap(), Outcome::Completed(_)));
    assert_eq!(snapshot(dry_dir.path()), before);
    assert!(dry_output.contains("Dry running..."));

    let (real, real_output) = run(&config(real_dir.path(), false), true);
    assert!(matches!(real.unwrap(), Outcome::Completed(_)));

    let normalize = |text: &str, root: &Path| text.replace(&root.display().to_string(), "<root>");
    assert_eq!(
        normalize(preview(&dry_output), dry_dir.path()),
        normalize(preview(&real_output), real_dir.path())
    );
}

#[test]
fn test_declining_cancels_without_writing() {
    let temp_dir = fixture();
    let before = snapshot(temp_dir.path());

    let (outcome, output) = run(&config(temp_dir.path(), false), false);
    assert_eq!(outcome.unwrap(), Outcome::Cancelled);
    assert!(output.ends_with("Cancelled.\n"));
    assert_eq!(snapshot(temp_dir.path()), before);
}

#[test]
fn test_round_trip_restores_the_tree() {
    let temp_dir = fixture();
    let root = temp_dir.path();
    let before = snapshot(root);

    let forward = config(root, false);
    run(&forward, true).0.unwrap();
    let backward =
        RunConfig::new("baz-qux", "foo-bar", vec![root.to_path_buf()], &[], false, true).unwrap();
    run(&backward, false).0.unwrap();

    assert_eq!(snapshot(root), before);
}

#[test]
fn test_no_target_files_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "only.png", b"\x89PNG\r\n\x1a\n\x00");

    let (outcome, _) = run(&config(temp_dir.path(), false), true);
    assert!(matches!(outcome, Err(Error::NoTargetFiles)));
}

#[test]
fn test_exclude_patterns_apply_to_every_root() {
    let first = fixture();
    let second = fixture();
    write(first.path(), "NOTES.md", b"foo-bar\n");
    write(second.path(), "docs/NOTES.md", b"foo-bar\n");

    let config = RunConfig::new(
        "foo-bar",
        "baz-qux",
        vec![first.path().to_path_buf(), second.path().to_path_buf()],
        &["*.md".to_string()],
        false,
        true,
    )
    .unwrap();
    let (outcome, _) = run(&config, false);
    let Outcome::Completed(summary) = outcome.unwrap() else {
        panic!("run was cancelled");
    };

    assert_eq!(summary.files_scanned, 6);
    assert_eq!(fs::read_to_string(first.path().join("NOTES.md")).unwrap(), "foo-bar\n");
    assert_eq!(
        fs::read_to_string(second.path().join("docs/NOTES.md")).unwrap(),
        "foo-bar\n"
    );
    assert!(second.path().join("src/baz_qux/mod.rs").is_file());
}

#[test]
fn test_nested_root_is_covered_by_its_parent() {
    let temp_dir = TempDir::new().unwrap();
    let outer = temp_dir.path().join("p");
    write(&outer, "sub/foo_bar.txt", b"foo-bar\n");

    let config = RunConfig::new(
        "foo-bar",
        "baz-qux",
        vec![outer.clone(), outer.join("sub")],
        &[],
        false,
        true,
    )
    .unwrap();
    let (outcome, _) = run(&config, false);
    let Outcome::Completed(summary) = outcome.unwrap() else {
        panic!("run was cancelled");
    };

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.paths_renamed, 1);
    assert_eq!(
        fs::read_to_string(outer.join("sub/baz_qux.txt")).unwrap(),
        "baz-qux\n"
    );
    assert!(!outer.join("sub/foo_bar.txt").exists());
}

#[test]
fn test_aliased_roots_rewrite_each_file_once() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("p");
    write(&root, "notes.txt", b"a-b\n");

    let config = RunConfig::new(
        "a-b",
        "a-b-c",
        vec![root.clone(), root.join("..").join("p")],
        &[],
        false,
        true,
    )
    .unwrap();
    let (outcome, _) = run(&config, false);
    let Outcome::Completed(summary) = outcome.unwrap() else {
        panic!("run was cancelled");
    };

    assert_eq!(summary.files_changed, 1);
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "a-b-c\n");
}

#[test]
fn test_non_utf8_text_is_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "latin1.txt", b"foo-bar caf\xe9\n");

    let (outcome, output) = run(&config(temp_dir.path(), false), true);
    assert!(matches!(outcome.unwrap(), Outcome::Completed(_)));
    assert_eq!(
        fs::read(temp_dir.path().join("latin1.txt")).unwrap(),
        b"baz-qux caf\xe9\n"
    );
    assert!(output.contains("+baz-qux caf\u{fffd}"));
}
