//! Command-line argument parsing for lsx.
//!
//! `lsx [-l] [-x] [-R] [path...]`. The short flags combine freely (`-lR`). Malformed
//! usage is reported by clap with the usage line on stderr and a non-zero exit status.

use crate::config::ColorChoice;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lsx",
    author,
    version,
    about = "List directory contents as a grid, a long table or a horizontal run, with color."
)]
pub struct Cli {
    /// Directories to list (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Long listing: permissions, links, owner, group, size, time, name
    #[arg(short = 'l', action = ArgAction::SetTrue)]
    pub long: bool,

    /// List entries across rows instead of down columns
    #[arg(short = 'x', action = ArgAction::SetTrue)]
    pub horizontal: bool,

    /// Recurse into subdirectories
    #[arg(short = 'R', action = ArgAction::SetTrue)]
    pub recursive: bool,

    /// When to color names
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Always)]
    pub color: ColorChoice,

    /// Override the terminal width used for grid and horizontal layouts
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Extra name suffix to color as an archive (repeatable)
    #[arg(long, value_name = "SUFFIX", action = ArgAction::Append)]
    pub archive_suffix: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_short_flags() {
        let cli = Cli::parse_from(["lsx", "-lR", "src"]);
        assert!(cli.long);
        assert!(cli.recursive);
        assert!(!cli.horizontal);
        assert_eq!(cli.paths, vec![PathBuf::from("src")]);
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        let err = Cli::try_parse_from(["lsx", "-q"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn color_defaults_to_always() {
        let cli = Cli::parse_from(["lsx"]);
        assert_eq!(cli.color, ColorChoice::Always);
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
