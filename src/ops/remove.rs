use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// Remove exactly one entry at `path`: a file, a symlink, or an *empty*
/// directory.
///
/// Returns `Ok(false)` when the path does not exist (nothing removed, not an
/// error) and `Err` when the entry is a non-empty directory.
pub fn remove<P: AsRef<Path>>(path: P) -> Result<bool> {
    let p = path.as_ref();
    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if meta.is_dir() {
        fs::remove_dir(p)?;
    } else {
        fs::remove_file(p)?;
    }
    Ok(true)
}

/// Remove a single file entry. Same single-entry semantics as [`remove`];
/// kept as its own name because the host surface exposes both.
pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    remove(path)
}

/// Remove `path` and everything below it, returning the number of entries
/// removed (the root itself included). An absent path yields `Ok(0)`.
pub fn remove_all<P: AsRef<Path>>(path: P) -> Result<u64> {
    let p = path.as_ref();
    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    if !meta.is_dir() {
        fs::remove_file(p)?;
        return Ok(1);
    }

    // Count before deleting so the caller learns how much went away. The
    // walk does not follow symlinks, matching what gets removed.
    let mut count: u64 = 0;
    for entry in WalkDir::new(p).follow_links(false) {
        entry?;
        count += 1;
    }
    fs::remove_dir_all(p)?;
    tracing::debug!("removed {} entries under {}", count, p.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remove_single_file_and_empty_dir() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").expect("write");
        assert!(remove(&f).expect("remove file"));
        assert!(!f.exists());

        let d = td.path().join("empty");
        fs::create_dir(&d).expect("mkdir");
        assert!(remove(&d).expect("remove empty dir"));
        assert!(!d.exists());
    }

    #[test]
    fn remove_absent_is_false_not_error() {
        let td = tempdir().expect("tempdir");
        assert!(!remove(td.path().join("missing")).expect("remove absent"));
    }

    #[test]
    fn remove_nonempty_dir_errors() {
        let td = tempdir().expect("tempdir");
        let d = td.path().join("full");
        fs::create_dir(&d).expect("mkdir");
        fs::write(d.join("inner.txt"), b"x").expect("write");

        assert!(remove(&d).is_err());
        assert!(d.exists(), "failed remove must leave the tree intact");
    }

    #[test]
    fn remove_all_counts_the_subtree() {
        let td = tempdir().expect("tempdir");
        let root = td.path().join("tree");
        fs::create_dir_all(root.join("sub")).expect("mkdirs");
        fs::write(root.join("a.txt"), b"a").expect("write a");
        fs::write(root.join("sub/b.txt"), b"b").expect("write b");

        // tree, tree/a.txt, tree/sub, tree/sub/b.txt
        let n = remove_all(&root).expect("remove_all");
        assert_eq!(n, 4);
        assert!(!root.exists());
    }

    #[test]
    fn remove_all_absent_is_zero() {
        let td = tempdir().expect("tempdir");
        assert_eq!(remove_all(td.path().join("missing")).expect("remove_all"), 0);
    }
}
