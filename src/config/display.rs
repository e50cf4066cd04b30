//! Display options for lsx.
//!
//! [DisplayMode] selects the layout for the whole run, [ColorChoice] decides whether
//! names are colored.

use clap::ValueEnum;

/// Layout used for every listed directory. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Terse multi-column grid, filled down then across.
    #[default]
    Grid,
    /// One detailed row per entry (`-l`).
    Long,
    /// Left-to-right run wrapped at the terminal width (`-x`).
    Horizontal,
}

impl DisplayMode {
    /// Resolves the mode flags. Long wins over Horizontal, which wins over Grid,
    /// regardless of the order the flags were given in.
    pub fn from_flags(long: bool, horizontal: bool) -> Self {
        if long {
            DisplayMode::Long
        } else if horizontal {
            DisplayMode::Horizontal
        } else {
            DisplayMode::Grid
        }
    }
}

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Always color, even when piped.
    #[default]
    Always,
    /// Color only when standard output is a terminal.
    Auto,
    /// Never color.
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Auto => is_tty,
            ColorChoice::Never => false,
        }
    }
}
