//! Destructive bottom-up removal walk.
//!
//! [`remove`] empties a directory tree: every descendant is visited before
//! its parent, regular files are deleted one by one and counted, and each
//! subdirectory is then force-removed together with anything the file pass
//! could not reach. The root itself stays in place.
//!
//! Nothing here asks for confirmation. Callers must gate high-risk locations
//! themselves.

use std::{fs, io, path::Path};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::entry::{EntryOutcome, SkippedEntry, Tally};

/// Totals produced by one removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    /// Number of regular files deleted. Directories are not counted.
    pub deleted_file_count: u64,

    /// Entries that could not be removed.
    pub skipped: u64,
}

impl From<&Tally> for DeleteResult {
    fn from(tally: &Tally) -> Self {
        Self {
            deleted_file_count: tally.done,
            skipped: tally.skipped_count(),
        }
    }
}

/// Delete everything below `path`.
///
/// A missing path yields a zero result. Entries that cannot be deleted are
/// left behind and the walk carries on; see [`remove_with_errors`] to find
/// out which ones.
#[must_use]
pub fn remove(path: &Path) -> DeleteResult {
    remove_with_errors(path).0
}

/// Like [`remove`], but also returns the entries that had to be skipped.
///
/// Symlinks below the root are unlinked without touching their targets and
/// are not counted. A symlinked root is followed, so the contents of its
/// target are removed while the link itself stays.
#[must_use]
pub fn remove_with_errors(path: &Path) -> (DeleteResult, Vec<SkippedEntry>) {
    if !path.exists() {
        return (DeleteResult::default(), Vec::new());
    }

    let tally: Tally = WalkDir::new(path)
        .follow_links(false)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .map(remove_entry)
        .collect();

    (DeleteResult::from(&tally), tally.skipped)
}

/// Remove a single walk item. Directories arrive after their contents.
fn remove_entry(entry: walkdir::Result<DirEntry>) -> EntryOutcome {
    let entry = match entry {
        Ok(entry) => entry,
        Err(err) => return EntryOutcome::Skipped(SkippedEntry::new(err.path(), &err)),
    };

    let path = entry.path();
    let file_type = entry.file_type();

    if file_type.is_dir() {
        return match fs::remove_dir_all(path) {
            Ok(()) => EntryOutcome::Ignored,
            Err(err) => skipped(path, &err),
        };
    }

    match fs::remove_file(path) {
        Ok(()) if file_type.is_file() => EntryOutcome::Done(0),
        Ok(()) => EntryOutcome::Ignored,
        Err(err) => skipped(path, &err),
    }
}

fn skipped(path: &Path, err: &io::Error) -> EntryOutcome {
    EntryOutcome::Skipped(SkippedEntry::new(Some(path), err))
}
