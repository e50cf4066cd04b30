//! Color categories for listed entries.
//!
//! [classify] maps an entry to a [Category] and [Category::color] maps that to a fixed
//! ANSI sequence. Archive detection goes through an [ArchiveTable] so extra suffixes can
//! be added from the command line on top of the built-in set.

use crate::core::fm::{EntryKind, EntryMetadata};

use phf::phf_set;

pub const RESET: &str = "\x1b[0m";
pub const BLUE: &str = "\x1b[0;34m";
pub const GREEN: &str = "\x1b[0;32m";
pub const RED: &str = "\x1b[0;31m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const REVERSE: &str = "\x1b[7m";

/// Built-in archive suffixes, including the combined compression+archive ones.
static ARCHIVE_SUFFIXES: phf::Set<&'static str> = phf_set! {
    ".tar.gz",
    ".tar.bz2",
    ".tar.xz",
    ".tar.Z",
    ".tar",
    ".tgz",
    ".zip",
    ".gz",
    ".bz2",
    ".xz",
};

/// Display category of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Directory,
    Symlink,
    SpecialFile,
    Executable,
    Archive,
    Plain,
}

impl Category {
    /// Escape sequence that starts this category's style. `None` for [Category::Plain].
    pub fn color(self) -> Option<&'static str> {
        match self {
            Category::Directory => Some(BLUE),
            Category::Symlink => Some(MAGENTA),
            Category::SpecialFile => Some(REVERSE),
            Category::Executable => Some(GREEN),
            Category::Archive => Some(RED),
            Category::Plain => None,
        }
    }
}

/// Set of name suffixes that mark an archive. Matching is case sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveTable {
    extra: Vec<String>,
}

impl ArchiveTable {
    /// Adds suffixes to the built-in set. A missing leading dot is added.
    pub fn with_extra<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty() && s != ".")
            .map(|s| if s.starts_with('.') { s } else { format!(".{s}") })
            .collect();
        Self { extra }
    }

    fn contains(&self, suffix: &str) -> bool {
        ARCHIVE_SUFFIXES.contains(suffix) || self.extra.iter().any(|s| s == suffix)
    }

    /// True if any dot-started tail of `name` is a known suffix.
    ///
    /// Every tail is tried from the leftmost dot on, so `backup.2024.tar.gz` matches
    /// through `.tar.gz` (or `.gz`) no matter how many other dots the name has.
    pub fn matches(&self, name: &str) -> bool {
        name.match_indices('.')
            .any(|(idx, _)| self.contains(&name[idx..]))
    }
}

/// Picks the category of an entry. First match wins, in this order:
/// symlink, directory, special file, any execute bit, archive suffix, plain.
pub fn classify(name: &str, meta: &EntryMetadata, archives: &ArchiveTable) -> Category {
    match meta.kind() {
        EntryKind::Symlink => Category::Symlink,
        EntryKind::Directory => Category::Directory,
        kind if kind.is_special() => Category::SpecialFile,
        _ if meta.is_executable() => Category::Executable,
        _ if archives.matches(name) => Category::Archive,
        _ => Category::Plain,
    }
}

/// Wraps `text` in the category's color. Plain text is returned untouched.
///
/// Works on bytes so names that are not valid UTF-8 pass through as they are.
pub fn paint(text: &[u8], category: Category) -> Vec<u8> {
    match category.color() {
        Some(color) => [color.as_bytes(), text, RESET.as_bytes()].concat(),
        None => text.to_vec(),
    }
}
