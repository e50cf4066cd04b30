//! Directory enumeration and per-entry metadata for lsx.
//!
//! Provides the [DirEntry] produced by [browse_dir], the byte-wise [sort_entries] order,
//! and the [EntryMetadata] probe used by every display mode.

use crate::core::error::LsError;
use crate::core::ids::IdResolver;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, symlink_metadata};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Names starting with this byte are never listed. Covers `.` and `..` as well.
pub const HIDDEN_MARKER: u8 = b'.';

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    name: Box<OsStr>,
    path: PathBuf,
}

impl DirEntry {
    pub fn new(name: OsString, parent: &Path) -> Self {
        let path = parent.join(&name);
        DirEntry {
            name: name.into_boxed_os_str(),
            path,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Raw name bytes, written to the output unchanged.
    #[inline]
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// True for dotfiles and the self/parent pseudo-entries.
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&HIDDEN_MARKER)
}

/// Entries of one directory plus the per-entry read errors met while iterating it.
#[derive(Debug, Default)]
pub struct DirListing {
    pub entries: Vec<DirEntry>,
    pub errors: Vec<LsError>,
}

/// Reads the immediate children of `path`, skipping hidden names.
///
/// The directory handle is closed before this returns, so nothing stays open while the
/// entries are rendered or while the traversal descends.
///
/// # Returns
/// The unsorted listing, or [LsError::DirectoryOpen] when the directory cannot be opened.
pub fn browse_dir(path: &Path) -> Result<DirListing, LsError> {
    let reader = fs::read_dir(path).map_err(|source| LsError::DirectoryOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut listing = DirListing {
        entries: Vec::with_capacity(64),
        errors: Vec::new(),
    };

    for entry in reader {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                listing.errors.push(LsError::ReadEntry {
                    path: path.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let name = entry.file_name();
        if is_hidden(&name) {
            continue;
        }
        listing.entries.push(DirEntry::new(name, path));
    }

    Ok(listing)
}

/// Sorts entries by ascending byte-wise name comparison. Stable on ties.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
}

/// What an entry is, taken from its own inode (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    pub fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::Regular
        } else if ft.is_char_device() {
            EntryKind::CharDevice
        } else if ft.is_block_device() {
            EntryKind::BlockDevice
        } else if ft.is_fifo() {
            EntryKind::Fifo
        } else if ft.is_socket() {
            EntryKind::Socket
        } else {
            EntryKind::Unknown
        }
    }

    /// First character of the permission string.
    pub fn glyph(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::CharDevice => 'c',
            EntryKind::BlockDevice => 'b',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Regular | EntryKind::Unknown => '-',
        }
    }

    #[inline]
    pub fn is_special(self) -> bool {
        matches!(
            self,
            EntryKind::CharDevice | EntryKind::BlockDevice | EntryKind::Fifo | EntryKind::Socket
        )
    }
}

/// Everything the renderers need to know about one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    kind: EntryKind,
    mode: u32,
    links: u64,
    owner: String,
    group: String,
    size: u64,
    modified: Option<SystemTime>,
    symlink_target: Option<PathBuf>,
}

impl EntryMetadata {
    /// Stats `path` without following a final symlink and resolves its owner and group.
    ///
    /// `symlink_target` is filled only for symlinks whose target could be read; an
    /// unreadable target is not an error.
    pub fn probe(path: &Path, ids: &IdResolver) -> Result<Self, LsError> {
        let md = symlink_metadata(path).map_err(|source| LsError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        let kind = EntryKind::from_file_type(md.file_type());
        let symlink_target = if kind == EntryKind::Symlink {
            match fs::read_link(path) {
                Ok(target) => Some(target),
                Err(e) => {
                    log::debug!("readlink({}) failed: {e}", path.display());
                    None
                }
            }
        } else {
            None
        };

        Ok(EntryMetadata {
            kind,
            mode: md.mode(),
            links: md.nlink(),
            owner: ids.owner_name(md.uid()),
            group: ids.group_name(md.gid()),
            size: md.size(),
            modified: md.modified().ok(),
            symlink_target,
        })
    }

    /// Builds metadata from already known values. Used where no inode is at hand.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        kind: EntryKind,
        mode: u32,
        links: u64,
        owner: impl Into<String>,
        group: impl Into<String>,
        size: u64,
        modified: Option<SystemTime>,
        symlink_target: Option<PathBuf>,
    ) -> Self {
        let symlink_target = if kind == EntryKind::Symlink {
            symlink_target
        } else {
            None
        };
        EntryMetadata {
            kind,
            mode,
            links,
            owner: owner.into(),
            group: group.into(),
            size,
            modified,
            symlink_target,
        }
    }

    // Accessors

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn links(&self) -> u64 {
        self.links
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[inline]
    pub fn symlink_target(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Any of the owner, group or other execute bits.
    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & 0o111 != 0
    }
}

/// A listed entry together with its probe result.
///
/// `meta` is `None` when the stat failed; renderers then fall back to placeholders.
#[derive(Debug, Clone)]
pub struct ProbedEntry {
    entry: DirEntry,
    meta: Option<EntryMetadata>,
}

impl ProbedEntry {
    pub fn new(entry: DirEntry, meta: Option<EntryMetadata>) -> Self {
        Self { entry, meta }
    }

    #[inline]
    pub fn entry(&self) -> &DirEntry {
        &self.entry
    }

    #[inline]
    pub fn meta(&self) -> Option<&EntryMetadata> {
        self.meta.as_ref()
    }

    /// True only when the entry's own inode is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.meta.as_ref().is_some_and(EntryMetadata::is_dir)
    }
}
