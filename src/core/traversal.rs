//! Directory traversal for lsx.
//!
//! The [Lister] runs the per-directory pipeline (collect, sort, probe, render) for each
//! path argument and, with `-R`, for every subdirectory below it. Listing output goes to
//! one writer and per-path diagnostics to another, so the whole run can be captured in
//! tests.
//!
//! Recursion uses an explicit stack of pending directories. A directory is rendered when
//! it is popped and its subdirectories are pushed in reverse sorted order, which yields
//! the same depth-first, sorted-sibling order as a recursive walk.

use crate::config::Config;
use crate::core::error::LsError;
use crate::core::fm::{EntryMetadata, ProbedEntry, browse_dir, sort_entries};
use crate::core::ids::IdResolver;
use crate::ui::render::Renderer;

use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Drives listing for a whole run.
pub struct Lister<'a, W: Write, E: Write> {
    config: &'a Config,
    renderer: Renderer<'a>,
    ids: IdResolver,
    out: W,
    err: E,
}

impl<'a, W: Write, E: Write> Lister<'a, W, E> {
    pub fn new(config: &'a Config, out: W, err: E) -> Self {
        Self {
            config,
            renderer: Renderer::new(config),
            ids: IdResolver::new(),
            out,
            err,
        }
    }

    /// Lists every path in order.
    ///
    /// A `<path>:` header precedes each path when more than one is given or when
    /// recursing; successive paths are separated by one blank line. Paths that cannot be
    /// opened are reported and skipped.
    ///
    /// # Returns
    /// Only [LsError::Io], for a failed write of the listing itself.
    pub fn run(&mut self, paths: &[PathBuf]) -> Result<(), LsError> {
        let headers = paths.len() > 1 || self.config.recursive();

        for (i, path) in paths.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            if headers {
                self.write_header(path)?;
            }
            self.list_tree(path)?;
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Lists `root`, then its subtree when recursion is on.
    pub fn list_tree(&mut self, root: &Path) -> Result<(), LsError> {
        let mut pending = vec![root.to_path_buf()];
        let mut is_root = true;

        while let Some(dir) = pending.pop() {
            if !is_root {
                writeln!(self.out)?;
                self.write_header(&dir)?;
            }
            is_root = false;

            let subdirs = self.list_dir(&dir)?;
            if self.config.recursive() {
                pending.extend(subdirs.into_iter().rev());
            }
        }
        Ok(())
    }

    /// Lists one directory and returns its subdirectories in sorted order.
    ///
    /// Subdirectories are entries whose own metadata says directory, so symlinks to
    /// directories are never descended into.
    fn list_dir(&mut self, dir: &Path) -> Result<Vec<PathBuf>, LsError> {
        log::debug!("listing {}", dir.display());

        let listing = match browse_dir(dir) {
            Ok(listing) => listing,
            Err(e) => {
                self.report(&e)?;
                return Ok(Vec::new());
            }
        };
        for e in &listing.errors {
            self.report(e)?;
        }

        let mut entries = listing.entries;
        sort_entries(&mut entries);

        let mut probed = Vec::with_capacity(entries.len());
        for entry in entries {
            let meta = match EntryMetadata::probe(entry.path(), &self.ids) {
                Ok(md) => Some(md),
                Err(e) => {
                    self.report(&e)?;
                    None
                }
            };
            probed.push(ProbedEntry::new(entry, meta));
        }

        for line in self.renderer.render(self.config.mode(), &probed) {
            self.out.write_all(&line)?;
            self.out.write_all(b"\n")?;
        }

        Ok(probed
            .iter()
            .filter(|p| p.is_dir())
            .map(|p| p.entry().path().to_path_buf())
            .collect())
    }

    /// `<path>:` with the path bytes as they are.
    fn write_header(&mut self, path: &Path) -> Result<(), LsError> {
        self.out.write_all(path.as_os_str().as_bytes())?;
        self.out.write_all(b":\n")?;
        Ok(())
    }

    fn report(&mut self, error: &LsError) -> Result<(), LsError> {
        log::debug!("recoverable: {error:?}");
        // Keep stdout and stderr interleaved in order on a terminal.
        self.out.flush()?;
        writeln!(self.err, "{error}")?;
        Ok(())
    }

    /// Gives back the writers, e.g. to inspect captured output.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayMode;
    use std::fs::{self, File};
    use std::io;
    use tempfile::tempdir;

    /// Stdout whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run(config: &Config, paths: &[PathBuf]) -> (String, String) {
        let mut lister = Lister::new(config, Vec::new(), Vec::new());
        lister.run(paths).unwrap();
        let (out, err) = lister.into_writers();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn subdirectories_follow_parent_listing() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let root = tmp.path().join("A");
        fs::create_dir_all(root.join("C"))?;
        File::create(root.join("b.txt"))?;
        File::create(root.join("C").join("d.txt"))?;

        let config = Config::new(DisplayMode::Grid, true)
            .with_color(false)
            .with_term_width(80);
        let (out, err) = run(&config, std::slice::from_ref(&root));

        let expected = format!(
            "{root}:\nC      b.txt  \n\n{root}/C:\nd.txt  \n",
            root = root.display()
        );
        assert_eq!(out, expected);
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn missing_path_is_reported_and_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("x"))?;
        let missing = tmp.path().join("missing");

        let config = Config::new(DisplayMode::Grid, false).with_color(false);
        let (out, err) = run(&config, &[missing.clone(), tmp.path().to_path_buf()]);

        assert!(err.starts_with(&format!("opendir({}): ", missing.display())), "{err}");
        assert!(out.ends_with("x  \n"), "{out:?}");
        Ok(())
    }

    #[test]
    fn write_failure_ends_the_run() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("a"))?;

        let config = Config::new(DisplayMode::Grid, false).with_color(false);
        let mut lister = Lister::new(&config, ClosedPipe, Vec::new());
        let err = lister
            .run(&[tmp.path().to_path_buf()])
            .expect_err("listing into a closed pipe must fail");

        assert!(matches!(err, LsError::Io(_)), "{err:?}");
        assert!(err.is_broken_pipe());
        let (_, diagnostics) = lister.into_writers();
        assert!(diagnostics.is_empty());
        Ok(())
    }
}
