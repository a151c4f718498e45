use std::fs;
use std::path::Path;
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::Result;
use crate::path;

/// Recursively delete aged files with a matching extension under `root`,
/// returning how many were removed.
///
/// A file is deleted when all of the following hold:
/// - it is not a directory;
/// - its last extension matches `extension` exactly (a leading dot on the
///   argument is accepted and ignored: `".log"` and `"log"` are the same
///   filter);
/// - its stem still carries a further extension — only double-extension
///   names of the shape `name.ext.target` are eligible, a plain
///   `name.target` is never deleted no matter how old;
/// - its age (now minus modification time) exceeds `max_age_seconds`.
///
/// The scan aborts with the error when the root cannot be opened or an
/// eligible entry cannot be examined or removed.
pub fn prune_by_age<P: AsRef<Path>>(root: P, extension: &str, max_age_seconds: u64) -> Result<u64> {
    let root = root.as_ref();
    let wanted = format!(".{}", extension.trim_start_matches('.'));
    let now = SystemTime::now();

    let mut count: u64 = 0;
    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if path::extension(entry.path()) != wanted {
            continue;
        }
        // Only double-extension names (name.ext.target) are eligible.
        if path::extension(path::stem(entry.path())).is_empty() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let age = now
            .duration_since(modified)
            .map(|d| d.as_secs())
            .unwrap_or(0); // mtime in the future counts as age zero
        if age > max_age_seconds {
            fs::remove_file(entry.path())?;
            tracing::debug!("pruned {} (age {}s)", entry.path().display(), age);
            count += 1;
        }
    }
    Ok(count)
}
