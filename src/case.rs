//! Casing conventions for hyphenated phrases.
//!
//! Every function here is pure: it maps a phrase such as `foo-bar` to one
//! textual variant (`FooBar`, `FOO_BAR`, `foo bar`, ...). Segments are split on
//! `-` only; characters inside a segment are left as they are, apart from the
//! whole-string upper/lower casing some conventions apply.

use std::fmt;

/// A supported casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `FooBar`
    UpperCamel,
    /// `fooBar`
    LowerCamel,
    /// `FOO_BAR`
    ScreamingSnake,
    /// `foo_bar`
    Snake,
    /// `FOO-BAR`
    ScreamingKebab,
    /// `foo-bar`
    Kebab,
    /// `FOOBAR`
    UpperFlat,
    /// `foobar`
    Flat,
    /// `Foo Bar`
    TitleSpaced,
    /// `Foo bar`
    SentenceSpaced,
    /// `foo bar`
    LowerSpaced,
}

impl Convention {
    /// Every convention, in dictionary priority order.
    pub const ALL: [Convention; 11] = [
        Convention::UpperCamel,
        Convention::LowerCamel,
        Convention::ScreamingSnake,
        Convention::Snake,
        Convention::ScreamingKebab,
        Convention::Kebab,
        Convention::UpperFlat,
        Convention::Flat,
        Convention::TitleSpaced,
        Convention::SentenceSpaced,
        Convention::LowerSpaced,
    ];

    /// Conventions that never introduce spaces, usable inside file names.
    pub const FILE_NAME_SAFE: [Convention; 8] = [
        Convention::UpperCamel,
        Convention::LowerCamel,
        Convention::ScreamingSnake,
        Convention::Snake,
        Convention::ScreamingKebab,
        Convention::Kebab,
        Convention::UpperFlat,
        Convention::Flat,
    ];

    /// Renders `phrase` in this convention.
    pub fn apply(self, phrase: &str) -> String {
        match self {
            Convention::UpperCamel => upper_camel(phrase),
            Convention::LowerCamel => lower_camel(phrase),
            Convention::ScreamingSnake => screaming_snake(phrase),
            Convention::Snake => snake(phrase),
            Convention::ScreamingKebab => screaming_kebab(phrase),
            Convention::Kebab => kebab(phrase),
            Convention::UpperFlat => strip_separators(&screaming_kebab(phrase)),
            Convention::Flat => strip_separators(&kebab(phrase)),
            Convention::TitleSpaced => title_spaced(phrase),
            Convention::SentenceSpaced => capitalize(&lower_spaced(phrase)),
            Convention::LowerSpaced => lower_spaced(phrase),
        }
    }

    /// A short human-readable name, written in the convention itself.
    pub fn label(self) -> &'static str {
        match self {
            Convention::UpperCamel => "UpperCamelCase",
            Convention::LowerCamel => "lowerCamelCase",
            Convention::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Convention::Snake => "snake_case",
            Convention::ScreamingKebab => "SCREAMING-KEBAB-CASE",
            Convention::Kebab => "kebab-case",
            Convention::UpperFlat => "UPPERFLATCASE",
            Convention::Flat => "flatcase",
            Convention::TitleSpaced => "Title Words",
            Convention::SentenceSpaced => "Sentence words",
            Convention::LowerSpaced => "lower words",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn upper_camel(phrase: &str) -> String {
    phrase.split('-').map(capitalize).collect()
}

pub fn lower_camel(phrase: &str) -> String {
    decapitalize(&upper_camel(phrase))
}

pub fn screaming_snake(phrase: &str) -> String {
    phrase.replace('-', "_").to_uppercase()
}

pub fn snake(phrase: &str) -> String {
    phrase.replace('-', "_").to_lowercase()
}

pub fn screaming_kebab(phrase: &str) -> String {
    phrase.to_uppercase()
}

pub fn kebab(phrase: &str) -> String {
    phrase.to_lowercase()
}

pub fn title_spaced(phrase: &str) -> String {
    phrase.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

pub fn lower_spaced(phrase: &str) -> String {
    phrase.replace(['-', '_'], " ")
}

/// Removes every `-` and `_`.
fn strip_separators(s: &str) -> String {
    s.replace(['-', '_'], "")
}

/// Uppercases the first character and keeps the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character and keeps the rest.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
