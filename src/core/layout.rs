//! Column layout for the terse display modes.
//!
//! [plan_grid] computes the down-then-across grid used by the default mode,
//! [plan_horizontal] splits entries into left-to-right lines for `-x`.
//! Both work on display widths only, so they are independent of coloring.

use std::ops::Range;

/// Blank columns between two cells.
pub const COLUMN_SPACING: usize = 2;

/// Fallback when the terminal size cannot be queried.
pub const DEFAULT_TERM_WIDTH: usize = 80;

/// Row/column grid for one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    column_width: usize,
    columns: usize,
    rows: usize,
    len: usize,
}

impl GridPlan {
    // Accessors

    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Entry index shown at (`row`, `column`), filling each column top to bottom.
    /// `None` for the trailing empty cells of the last column.
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        let idx = row + column * self.rows;
        (row < self.rows && column < self.columns && idx < self.len).then_some(idx)
    }

    /// Entry indices of `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter_map(move |column| self.index(row, column))
    }
}

/// Width of one cell: widest name plus [COLUMN_SPACING].
#[inline]
pub fn column_width(widths: &[usize]) -> usize {
    widths.iter().copied().max().unwrap_or(0) + COLUMN_SPACING
}

/// Plans the down-then-across grid for names of the given display `widths`.
///
/// # Returns
/// `None` for an empty directory, so callers never divide by an empty column set.
pub fn plan_grid(widths: &[usize], term_width: usize) -> Option<GridPlan> {
    if widths.is_empty() {
        return None;
    }
    let column_width = column_width(widths);
    let columns = (term_width / column_width).max(1);
    let rows = widths.len().div_ceil(columns);
    Some(GridPlan {
        column_width,
        columns,
        rows,
        len: widths.len(),
    })
}

/// Lines of a horizontal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalPlan {
    column_width: usize,
    lines: Vec<Range<usize>>,
}

impl HorizontalPlan {
    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Index ranges of each output line, in order.
    #[inline]
    pub fn lines(&self) -> &[Range<usize>] {
        &self.lines
    }
}

/// Plans a left-to-right run that wraps before a cell would cross `term_width`.
///
/// A cursor tracks the used width of the current line. The line is only broken when it
/// already holds something, so one over-wide name still gets a line of its own.
///
/// # Returns
/// `None` for an empty directory.
pub fn plan_horizontal(widths: &[usize], term_width: usize) -> Option<HorizontalPlan> {
    if widths.is_empty() {
        return None;
    }
    let column_width = column_width(widths);
    let mut lines = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    for idx in 0..widths.len() {
        if cursor > 0 && cursor + column_width > term_width {
            lines.push(start..idx);
            start = idx;
            cursor = 0;
        }
        cursor += column_width;
    }
    lines.push(start..widths.len());

    Some(HorizontalPlan {
        column_width,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_has_no_plan() {
        assert!(plan_grid(&[], 80).is_none());
        assert!(plan_horizontal(&[], 80).is_none());
    }

    #[test]
    fn grid_dimensions() {
        // L = 8, so cells are 10 wide and 80 columns hold 8 of them.
        let widths = vec![8; 20];
        let plan = plan_grid(&widths, 80).unwrap();
        assert_eq!(plan.column_width(), 10);
        assert_eq!(plan.columns(), 8);
        assert_eq!(plan.rows(), 3);
    }

    #[test]
    fn grid_is_down_then_across() {
        let widths = vec![3; 7];
        // 15 / 5 = 3 columns, ceil(7 / 3) = 3 rows
        let plan = plan_grid(&widths, 15).unwrap();
        assert_eq!(plan.rows(), 3);
        let rows: Vec<Vec<usize>> = (0..plan.rows()).map(|r| plan.row(r).collect()).collect();
        assert_eq!(rows, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn every_name_in_exactly_one_cell() {
        for n in 1..40 {
            for width in [1, 10, 33, 80, 200] {
                let widths: Vec<usize> = (0..n).map(|i| i % 7 + 1).collect();
                let plan = plan_grid(&widths, width).unwrap();
                let mut seen: Vec<usize> = (0..plan.rows()).flat_map(|r| plan.row(r)).collect();
                seen.sort_unstable();
                assert_eq!(seen, (0..n).collect::<Vec<_>>(), "n={n} width={width}");
                assert_eq!(plan.rows(), n.div_ceil(plan.columns()));
            }
        }
    }

    #[test]
    fn narrow_terminal_keeps_one_column() {
        let plan = plan_grid(&[40, 12], 20).unwrap();
        assert_eq!(plan.columns(), 1);
        assert_eq!(plan.rows(), 2);
        assert_eq!(plan.index(1, 0), Some(1));
        assert_eq!(plan.index(0, 1), None);
    }

    #[test]
    fn horizontal_wraps_before_overflow() {
        // cells are 6 wide, 20 columns fit three per line
        let plan = plan_horizontal(&[4, 4, 4, 4, 4, 4, 4], 20).unwrap();
        assert_eq!(plan.column_width(), 6);
        assert_eq!(plan.lines(), &[0..3, 3..6, 6..7]);
    }

    #[test]
    fn horizontal_over_wide_name_has_no_empty_line() {
        let plan = plan_horizontal(&[30, 2], 10).unwrap();
        assert_eq!(plan.lines(), &[0..1, 1..2]);
    }
}
