//! Per-file rewrite pass.

use crate::patterns::ReplacementPatterns;
use std::fs;
use std::path::Path;

/// Verdict for one file.
///
/// `Skipped` distinguishes an I/O failure from "nothing matched"; summary
/// counts fold it into the unchanged tally, but logs keep the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Content changed (and was written back unless dry-running).
    Rewritten,
    /// No pattern matched; the file was left alone.
    Unchanged,
    /// The file could not be read or written.
    Skipped,
}

impl RewriteOutcome {
    pub fn is_rewritten(self) -> bool {
        matches!(self, RewriteOutcome::Rewritten)
    }
}

/// Applies the pattern set to one file, writing back only on change.
///
/// A single unreadable or unwritable file never aborts the run; it is logged
/// and reported as [`RewriteOutcome::Skipped`].
pub fn rewrite_file(
    path: &Path,
    patterns: &ReplacementPatterns,
    dry_run: bool,
) -> RewriteOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("Skipping file (read error): {} - {}", path.display(), e);
            return RewriteOutcome::Skipped;
        }
    };

    let Some(new_content) = patterns.apply(&content) else {
        return RewriteOutcome::Unchanged;
    };

    if dry_run {
        log::info!("Would update: {}", path.display());
        return RewriteOutcome::Rewritten;
    }

    if let Err(e) = fs::write(path, new_content) {
        log::debug!("Skipping file (write error): {} - {}", path.display(), e);
        return RewriteOutcome::Skipped;
    }

    log::debug!("Updated: {}", path.display());
    RewriteOutcome::Rewritten
}
