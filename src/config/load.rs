//! Builds the run [Config] from command-line input.
//!
//! There is no configuration file. The value is constructed once at startup and handed by
//! reference to the [crate::core::Lister], so the engine never reads process-global flags.

use crate::config::DisplayMode;
use crate::core::terminal::{stdout_is_tty, terminal_width};
use crate::ui::palette::ArchiveTable;
use crate::utils::cli::Cli;

use std::path::PathBuf;

/// Immutable settings of one lsx run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    mode: DisplayMode,
    recursive: bool,
    color: bool,
    term_width: usize,
    archives: ArchiveTable,
}

impl Config {
    /// A config with coloring on, an 80 column width and the built-in archive table.
    pub fn new(mode: DisplayMode, recursive: bool) -> Self {
        Self {
            mode,
            recursive,
            color: true,
            term_width: crate::core::layout::DEFAULT_TERM_WIDTH,
            archives: ArchiveTable::default(),
        }
    }

    /// Resolves parsed arguments against the current terminal.
    ///
    /// Width comes from `--width` when it is non-zero, otherwise from the terminal.
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = DisplayMode::from_flags(cli.long, cli.horizontal);
        let term_width = match cli.width {
            Some(w) if w > 0 => w,
            _ => terminal_width(),
        };
        let color = cli.color.enabled(stdout_is_tty());

        let config = Self::new(mode, cli.recursive)
            .with_color(color)
            .with_term_width(term_width)
            .with_archives(ArchiveTable::with_extra(&cli.archive_suffix));
        log::debug!("resolved config: {config:?}");
        config
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets the width used by the grid and horizontal layouts. Zero is raised to one.
    pub fn with_term_width(mut self, width: usize) -> Self {
        self.term_width = width.max(1);
        self
    }

    pub fn with_archives(mut self, archives: ArchiveTable) -> Self {
        self.archives = archives;
        self
    }

    // Getters

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[inline]
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    #[inline]
    pub fn color(&self) -> bool {
        self.color
    }

    #[inline]
    pub fn term_width(&self) -> usize {
        self.term_width
    }

    #[inline]
    pub fn archives(&self) -> &ArchiveTable {
        &self.archives
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DisplayMode::Grid, false)
    }
}

/// Paths to list: the given ones in order, or the current directory.
pub fn target_paths(cli: &Cli) -> Vec<PathBuf> {
    if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_map_to_config() {
        let cli = Cli::parse_from(["lsx", "-xl", "-R", "--width", "120", "--color", "never"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.mode(), DisplayMode::Long);
        assert!(config.recursive());
        assert!(!config.color());
        assert_eq!(config.term_width(), 120);
    }

    #[test]
    fn archive_suffixes_from_cli() {
        let cli = Cli::parse_from(["lsx", "--archive-suffix", "7z", "--archive-suffix", ".rar"]);
        let config = Config::from_cli(&cli);
        assert!(config.archives().matches("a.7z"));
        assert!(config.archives().matches("a.rar"));
        assert!(config.archives().matches("a.tgz"));
    }

    #[test]
    fn no_paths_means_current_dir() {
        let cli = Cli::parse_from(["lsx"]);
        assert_eq!(target_paths(&cli), vec![PathBuf::from(".")]);

        let cli = Cli::parse_from(["lsx", "b", "a"]);
        assert_eq!(target_paths(&cli), vec![PathBuf::from("b"), PathBuf::from("a")]);
    }

    #[test]
    fn zero_width_is_clamped() {
        assert_eq!(Config::default().with_term_width(0).term_width(), 1);
    }
}
