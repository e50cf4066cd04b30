//! Library crate for lsx.
//!
//! The shipped application is the `lsx` binary (`src/main.rs`). The engine lives here so
//! the binary and the integration tests drive the same code with an explicit [config::Config]
//! instead of process-wide flags.

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
