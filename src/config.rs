//! Run configuration for lsx.
//!
//! - [display]: the [DisplayMode] and [ColorChoice] enums.
//! - [load]: the immutable [Config] built from command-line input.

pub mod display;
pub mod load;

pub use display::{ColorChoice, DisplayMode};
pub use load::{Config, target_paths};
