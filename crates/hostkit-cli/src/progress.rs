//! Progress bar implementation for CLI operations.

use crate::output::format_size;
use console::Term;
use hostkit_core::ProgressCallback;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Shows entries processed against the total plus the bytes copied so far.
/// The entry total is taken from the first callback, so the bar can be
/// created before the archive is opened. Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a new CLI progress bar.
    ///
    /// `message` is the verb shown in front of the bar (e.g. "Zipping").
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Zipping [████████░░░░] 42/100 files 15.2 MB (3s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} files {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_prefix(message.to_string());

        Self {
            bar,
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, _current: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_message(format_size(self.bytes_written));
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_callback() {
        let mut progress = CliProgress::new("Testing");

        progress.on_entry_start(Path::new("test.txt"), 3, 1);
        progress.on_bytes_written(1024);
        progress.on_bytes_written(512);
        progress.on_entry_complete(Path::new("test.txt"));

        assert_eq!(progress.bytes_written, 1536);
        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.bar.position(), 1);
    }
}
