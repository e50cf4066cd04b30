//! Listing engine for lsx.
//!
//! - [fm]: directory enumeration, byte-wise sorting and the metadata probe (see [browse_dir],
//!   [DirEntry], [EntryMetadata]).
//! - [formatter]: permission strings, timestamps and width padding.
//! - [layout]: grid and horizontal layout plans.
//! - [traversal]: the [Lister] that ties the pieces together per directory and recurses.
//! - [terminal]: terminal width and tty detection.
//! - [ids]: uid/gid to name resolution.
//! - [error]: the [LsError] taxonomy.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod ids;
pub mod layout;
pub mod terminal;
pub mod traversal;

pub use error::LsError;
pub use fm::{
    DirEntry, DirListing, EntryKind, EntryMetadata, ProbedEntry, browse_dir, is_hidden,
    sort_entries,
};
pub use formatter::{format_file_time, format_mode};
pub use layout::{GridPlan, HorizontalPlan, plan_grid, plan_horizontal};
pub use traversal::Lister;
