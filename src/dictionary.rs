//! Ordered replacement dictionaries built from a before/after phrase.
//!
//! A [`Dictionary`] holds one [`Pair`] per casing convention. Applying it is a
//! fold: each pair's replacement runs on the text produced by the previous
//! pair, so the order of [`Convention::ALL`] is part of the contract.

use crate::case::Convention;
use crate::errors::Result;
use colored::Colorize;
use regex::bytes::{NoExpand, Regex};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// A single literal `before => after` mapping for one convention.
#[derive(Debug, Clone)]
pub struct Pair {
    pub convention: Convention,
    pub before: String,
    pub after: String,
    /// Escaped `before`, for matching raw file bytes. `None` when `before` is empty.
    matcher: Option<Regex>,
}

impl Pair {
    fn new(convention: Convention, before: &str, after: &str) -> Result<Self> {
        let before = convention.apply(before);
        let matcher = if before.is_empty() {
            None
        } else {
            Some(Regex::new(&regex::escape(&before))?)
        };
        Ok(Self {
            convention,
            after: convention.apply(after),
            before,
            matcher,
        })
    }

    /// Replaces every occurrence of `before` in `text`.
    ///
    /// An empty `before` would match between every character, so it is a no-op.
    pub fn apply(&self, text: &str) -> String {
        if self.before.is_empty() {
            return text.to_string();
        }
        text.replace(&self.before, &self.after)
    }

    /// Byte-level [`apply`](Self::apply) for content that may not be UTF-8.
    pub fn apply_bytes<'t>(&self, content: &'t [u8]) -> Cow<'t, [u8]> {
        match &self.matcher {
            Some(matcher) => matcher.replace_all(content, NoExpand(self.after.as_bytes())),
            None => Cow::Borrowed(content),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" => \"{}\"", self.before, self.after)
    }
}

/// An immutable, ordered list of replacement pairs.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pairs: Vec<Pair>,
}

impl Dictionary {
    /// Builds a dictionary over the given conventions, in the given order.
    pub fn new(conventions: &[Convention], before: &str, after: &str) -> Result<Self> {
        let pairs = conventions
            .iter()
            .map(|&c| Pair::new(c, before, after))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { pairs })
    }

    /// The dictionary used for file contents: every convention.
    pub fn for_text(before: &str, after: &str) -> Result<Self> {
        Self::new(&Convention::ALL, before, after)
    }

    /// The dictionary used for file and directory names: no spaced variants.
    pub fn for_file_names(before: &str, after: &str) -> Result<Self> {
        Self::new(&Convention::FILE_NAME_SAFE, before, after)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Applies every pair in order, each on the output of the previous one.
    pub fn apply(&self, text: &str) -> String {
        self.pairs
            .iter()
            .fold(text.to_string(), |acc, pair| pair.apply(&acc))
    }

    /// Same fold as [`apply`](Self::apply), over raw bytes.
    pub fn apply_bytes(&self, content: &[u8]) -> Vec<u8> {
        self.pairs
            .iter()
            .fold(content.to_vec(), |acc, pair| pair.apply_bytes(&acc).into_owned())
    }

    /// Returns `true` when two pairs render to the same literal mapping.
    ///
    /// Only exact duplicates are detected. A pair whose `before` is a
    /// substring of another pair's `before` is not reported.
    pub fn is_ambiguous(&self) -> bool {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .any(|pair| !seen.insert((pair.before.as_str(), pair.after.as_str())))
    }

    /// Pairs that repeat an earlier mapping under another convention.
    pub fn duplicates(&self) -> Vec<&Pair> {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .filter(|pair| !seen.insert((pair.before.as_str(), pair.after.as_str())))
            .collect()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.pairs.iter().map(Pair::to_string).collect();
        write!(f, "{}", lines.join("\n"))?;
        if self.is_ambiguous() {
            write!(f, "\n{}", "WARN: dictionary is ambiguous".yellow())?;
            write!(
                f,
                "\n{}",
                "HINT: It may cause unexpected result. You'd better add another word at least."
                    .yellow()
            )?;
        }
        Ok(())
    }
}
