//! Turns probed entries into output lines.
//!
//! One directory is rendered at a time. The long format runs a width pre-pass over the
//! whole directory first ([LongWidths::measure]) so every row of that directory lines up.
//! The grid and horizontal modes render short cells through the plans of [crate::core::layout].
//!
//! Lines are byte strings: entry names and symlink targets are copied as raw bytes so a
//! name that is not valid UTF-8 reaches the terminal unchanged. Widths are measured on
//! the lossy text.

use crate::config::{Config, DisplayMode};
use crate::core::fm::ProbedEntry;
use crate::core::formatter::{
    UNKNOWN_FIELD, UNKNOWN_PERMS, UNKNOWN_TIME, display_width, format_file_time, format_mode,
    pad_left, pad_right,
};
use crate::core::layout::{plan_grid, plan_horizontal};
use crate::ui::palette::{ArchiveTable, Category, classify, paint};

use std::os::unix::ffi::OsStrExt;

/// Printed instead of an empty grid or run.
pub const EMPTY_NOTICE: &str = "No files found.";

/// One output line without its newline.
pub type Line = Vec<u8>;

/// Column widths of the long format for one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongWidths {
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl LongWidths {
    /// Widest formatted value of each field over `entries`. Placeholder rows count as one
    /// column so their `?` always fits.
    pub fn measure(entries: &[ProbedEntry]) -> Self {
        let mut widths = LongWidths {
            links: 1,
            owner: 1,
            group: 1,
            size: 1,
        };
        for md in entries.iter().filter_map(|p| p.meta()) {
            widths.links = widths.links.max(md.links().to_string().len());
            widths.owner = widths.owner.max(display_width(md.owner()));
            widths.group = widths.group.max(display_width(md.group()));
            widths.size = widths.size.max(md.size().to_string().len());
        }
        widths
    }
}

/// Formats entries according to the run's coloring and archive settings.
pub struct Renderer<'a> {
    color: bool,
    archives: &'a ArchiveTable,
    term_width: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            color: config.color(),
            archives: config.archives(),
            term_width: config.term_width(),
        }
    }

    /// Category of an entry; entries without metadata are never colored.
    pub fn category(&self, entry: &ProbedEntry) -> Category {
        match entry.meta() {
            Some(md) => classify(&entry.entry().name_str(), md, self.archives),
            None => Category::Plain,
        }
    }

    /// The entry name, colored when coloring is on.
    pub fn styled_name(&self, entry: &ProbedEntry) -> Vec<u8> {
        let name = entry.entry().name_bytes();
        if self.color {
            paint(name, self.category(entry))
        } else {
            name.to_vec()
        }
    }

    /// One short cell: the styled name padded to `column_width` visible columns.
    pub fn short_cell(&self, entry: &ProbedEntry, column_width: usize) -> Vec<u8> {
        let pad = column_width.saturating_sub(display_width(&entry.entry().name_str()));
        let mut cell = self.styled_name(entry);
        cell.extend(std::iter::repeat_n(b' ', pad));
        cell
    }

    /// One row of the long format.
    ///
    /// `perms links owner group size time name`, plus ` -> target` for a symlink whose
    /// target was readable. An entry that could not be stat'ed gets `?` markers instead.
    pub fn long_row(&self, entry: &ProbedEntry, widths: &LongWidths) -> Line {
        let Some(md) = entry.meta() else {
            let fields = format!(
                "{} {} {} {} {} {} ",
                UNKNOWN_PERMS,
                pad_left(UNKNOWN_FIELD, widths.links),
                pad_right(UNKNOWN_FIELD, UNKNOWN_FIELD, widths.owner),
                pad_right(UNKNOWN_FIELD, UNKNOWN_FIELD, widths.group),
                pad_left(UNKNOWN_FIELD, widths.size),
                UNKNOWN_TIME,
            );
            return [fields.as_bytes(), entry.entry().name_bytes()].concat();
        };

        let fields = format!(
            "{} {} {} {} {} {} ",
            format_mode(md.kind(), md.mode()),
            pad_left(&md.links().to_string(), widths.links),
            pad_right(md.owner(), md.owner(), widths.owner),
            pad_right(md.group(), md.group(), widths.group),
            pad_left(&md.size().to_string(), widths.size),
            format_file_time(md.modified()),
        );
        let mut row = fields.into_bytes();
        row.extend_from_slice(&self.styled_name(entry));
        if let Some(target) = md.symlink_target() {
            row.extend_from_slice(b" -> ");
            row.extend_from_slice(target.as_os_str().as_bytes());
        }
        row
    }

    /// All rows of the long format for one directory. Empty for an empty directory.
    pub fn long_lines(&self, entries: &[ProbedEntry]) -> Vec<Line> {
        let widths = LongWidths::measure(entries);
        log::trace!("long widths {widths:?}");
        entries.iter().map(|e| self.long_row(e, &widths)).collect()
    }

    /// Down-then-across grid lines.
    pub fn grid_lines(&self, entries: &[ProbedEntry]) -> Vec<Line> {
        let widths = name_widths(entries);
        let Some(plan) = plan_grid(&widths, self.term_width) else {
            return vec![EMPTY_NOTICE.as_bytes().to_vec()];
        };
        log::trace!(
            "grid plan: {} rows x {} columns of width {}",
            plan.rows(),
            plan.columns(),
            plan.column_width()
        );

        (0..plan.rows())
            .map(|row| {
                plan.row(row)
                    .flat_map(|idx| self.short_cell(&entries[idx], plan.column_width()))
                    .collect::<Line>()
            })
            .collect()
    }

    /// Left-to-right lines wrapped at the terminal width.
    pub fn horizontal_lines(&self, entries: &[ProbedEntry]) -> Vec<Line> {
        let widths = name_widths(entries);
        let Some(plan) = plan_horizontal(&widths, self.term_width) else {
            return vec![EMPTY_NOTICE.as_bytes().to_vec()];
        };

        plan.lines()
            .iter()
            .map(|range| {
                entries[range.clone()]
                    .iter()
                    .flat_map(|e| self.short_cell(e, plan.column_width()))
                    .collect::<Line>()
            })
            .collect()
    }

    /// Lines for one directory in the given display mode.
    pub fn render(&self, mode: DisplayMode, entries: &[ProbedEntry]) -> Vec<Line> {
        match mode {
            DisplayMode::Long => self.long_lines(entries),
            DisplayMode::Horizontal => self.horizontal_lines(entries),
            DisplayMode::Grid => self.grid_lines(entries),
        }
    }
}

fn name_widths(entries: &[ProbedEntry]) -> Vec<usize> {
    entries
        .iter()
        .map(|e| display_width(&e.entry().name_str()))
        .collect()
}
