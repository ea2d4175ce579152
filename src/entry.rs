//! Per-entry outcomes shared by the scan and removal walks.
//!
//! Both walkers map every item yielded by the directory traversal to an
//! [`EntryOutcome`] and fold those outcomes into their totals. A failure on
//! one entry becomes a [`EntryOutcome::Skipped`] value instead of an error, so
//! the rest of the tree is still processed and the failure stays visible to
//! callers that want to report it.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

/// What happened to a single entry during a walk.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The entry was a regular file and was handled successfully.
    ///
    /// For the scanner the payload is the file size in bytes; the remover
    /// uses `0` since only the count matters there.
    Done(u64),

    /// The entry was handled but does not contribute to the counters
    /// (directories, symlinks, special files).
    Ignored,

    /// The entry could not be handled and was left alone.
    Skipped(SkippedEntry),
}

/// An entry a walk had to skip, with the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Path of the entry, when the traversal could still report one.
    pub path: Option<PathBuf>,

    /// Human-readable failure reason (usually the underlying I/O error).
    pub reason: String,
}

impl SkippedEntry {
    /// Build a skipped-entry record for `path` from any displayable error.
    #[must_use]
    pub fn new(path: Option<&Path>, reason: impl Display) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            reason: reason.to_string(),
        }
    }
}

impl Display for SkippedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Running totals for one walk.
///
/// `Tally` is the fold accumulator behind both [`crate::ScanResult`] and
/// [`crate::DeleteResult`]. Addition is commutative, so the totals do not
/// depend on the order in which entries are visited.
#[derive(Debug, Default)]
pub struct Tally {
    /// Number of [`EntryOutcome::Done`] outcomes.
    pub done: u64,

    /// Sum of the [`EntryOutcome::Done`] payloads.
    pub bytes: u64,

    /// Skipped entries, in visit order.
    pub skipped: Vec<SkippedEntry>,
}

impl Tally {
    /// Fold one outcome into the totals.
    pub fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Done(bytes) => {
                self.done += 1;
                self.bytes = self.bytes.saturating_add(bytes);
            }
            EntryOutcome::Ignored => {}
            EntryOutcome::Skipped(entry) => self.skipped.push(entry),
        }
    }

    /// Number of skipped entries as a counter value.
    #[must_use]
    pub fn skipped_count(&self) -> u64 {
        self.skipped.len() as u64
    }
}

impl FromIterator<EntryOutcome> for Tally {
    fn from_iter<I: IntoIterator<Item = EntryOutcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_done_outcomes() {
        let tally: Tally = vec![
            EntryOutcome::Done(100),
            EntryOutcome::Ignored,
            EntryOutcome::Done(200),
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.done, 2);
        assert_eq!(tally.bytes, 300);
        assert!(tally.skipped.is_empty());
    }

    #[test]
    fn test_tally_skipped_does_not_touch_counters() {
        let tally: Tally = vec![
            EntryOutcome::Done(10),
            EntryOutcome::Skipped(SkippedEntry::new(
                Some(Path::new("/gone")),
                "No such file or directory",
            )),
            EntryOutcome::Done(20),
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.done, 2);
        assert_eq!(tally.bytes, 30);
        assert_eq!(tally.skipped_count(), 1);
        assert_eq!(tally.skipped[0].path, Some(PathBuf::from("/gone")));
    }

    #[test]
    fn test_tally_is_order_independent() {
        let forward: Tally = [1, 2, 3, 4]
            .into_iter()
            .map(EntryOutcome::Done)
            .collect();
        let backward: Tally = [4, 3, 2, 1]
            .into_iter()
            .map(EntryOutcome::Done)
            .collect();

        assert_eq!(forward.done, backward.done);
        assert_eq!(forward.bytes, backward.bytes);
    }

    #[test]
    fn test_tally_saturates_on_overflow() {
        let tally: Tally = vec![EntryOutcome::Done(u64::MAX), EntryOutcome::Done(1)]
            .into_iter()
            .collect();

        assert_eq!(tally.bytes, u64::MAX);
        assert_eq!(tally.done, 2);
    }

    #[test]
    fn test_skipped_entry_display() {
        let with_path = SkippedEntry::new(Some(Path::new("/tmp/x")), "Permission denied");
        assert_eq!(with_path.to_string(), "/tmp/x: Permission denied");

        let without_path = SkippedEntry::new(None, "loop detected");
        assert_eq!(without_path.to_string(), "loop detected");
    }
}
