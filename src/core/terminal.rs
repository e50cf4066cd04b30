//! Terminal geometry and tty detection for lsx.

use crate::core::layout::DEFAULT_TERM_WIDTH;

use crossterm::tty::IsTty;
use std::io;

/// True when standard output is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

/// Column count of the terminal behind standard output.
///
/// Falls back to [DEFAULT_TERM_WIDTH] when output is redirected or the size query fails.
pub fn terminal_width() -> usize {
    if !stdout_is_tty() {
        return DEFAULT_TERM_WIDTH;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        Ok(_) => DEFAULT_TERM_WIDTH,
        Err(e) => {
            log::debug!("terminal size query failed: {e}");
            DEFAULT_TERM_WIDTH
        }
    }
}
