//! Process-level utilities for lsx.
//!
//! - [cli]: command-line parsing with clap.
//! - [logging]: the stderr logger behind the `log` facade.

pub mod cli;
pub mod logging;
