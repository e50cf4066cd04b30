//! Presentation layer for lsx.
//!
//! - [palette]: color categories and the ANSI table.
//! - [render]: long rows, short cells and whole-directory rendering.

pub mod palette;
pub mod render;

pub use palette::{ArchiveTable, Category, classify};
pub use render::{LongWidths, Renderer};
