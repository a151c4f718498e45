use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FsError, Result};
use crate::ops::stat::FileType;

/// One entry produced by a directory scan: the full path and its
/// classification. The binding layer exposes these as the record fields
/// `name` (path string) and `type` (tag string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: PathBuf,
    pub kind: FileType,
}

/// List the contents of the directory at `path`.
///
/// Returns a fully materialized list of entries — the immediate children, or
/// the whole subtree when `recursive` is set (the root itself is not
/// included). Enumeration order is whatever the OS yields; callers must not
/// rely on any ordering. The call fails as a whole when the root cannot be
/// opened, and aborts with the error if an entry becomes unreadable
/// mid-scan.
pub fn list_directory<P: AsRef<Path>>(path: P, recursive: bool) -> Result<Vec<DirEntry>> {
    let p = path.as_ref();
    if !fs::metadata(p)?.is_dir() {
        return Err(FsError::Message(format!("not a directory: {}", p.display())));
    }
    let mut entries = Vec::new();

    if recursive {
        for entry in WalkDir::new(p).min_depth(1).follow_links(false) {
            let entry = entry?;
            entries.push(DirEntry {
                kind: FileType::of(entry.path()),
                name: entry.into_path(),
            });
        }
        return Ok(entries);
    }

    for entry in fs::read_dir(p)? {
        let entry = entry?;
        let name = entry.path();
        entries.push(DirEntry {
            kind: FileType::of(&name),
            name,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    #[test]
    fn flat_listing_has_exactly_the_children() {
        let td = tempdir().expect("tempdir");
        fs::write(td.path().join("a.txt"), b"a").expect("write a");
        fs::write(td.path().join("b.txt"), b"b").expect("write b");
        fs::create_dir(td.path().join("sub")).expect("mkdir");
        fs::write(td.path().join("sub/inner.txt"), b"i").expect("write inner");

        let entries = list_directory(td.path(), false).expect("list");
        assert_eq!(entries.len(), 3);

        // Order is OS-dependent; compare as a set.
        let names: BTreeSet<String> = entries
            .iter()
            .filter_map(|e| e.name.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["a.txt", "b.txt", "sub"].iter().map(|s| s.to_string()).collect()
        );

        for e in &entries {
            assert_eq!(e.kind, FileType::of(&e.name), "type mismatch for {:?}", e.name);
        }
    }

    #[test]
    fn recursive_listing_includes_the_subtree() {
        let td = tempdir().expect("tempdir");
        fs::create_dir_all(td.path().join("sub/deeper")).expect("mkdirs");
        fs::write(td.path().join("a.txt"), b"a").expect("write a");
        fs::write(td.path().join("sub/b.txt"), b"b").expect("write b");

        let entries = list_directory(td.path(), true).expect("list");
        // a.txt, sub, sub/b.txt, sub/deeper
        assert_eq!(entries.len(), 4);
        assert!(entries
            .iter()
            .any(|e| e.name.ends_with("sub/b.txt") && e.kind == FileType::Regular));
        assert!(entries
            .iter()
            .any(|e| e.name.ends_with("sub/deeper") && e.kind == FileType::Directory));
    }

    #[test]
    fn unopenable_root_fails_whole_call() {
        let td = tempdir().expect("tempdir");
        assert!(list_directory(td.path().join("missing"), false).is_err());
        assert!(list_directory(td.path().join("missing"), true).is_err());
    }

    #[test]
    fn listing_a_file_is_an_error() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").expect("write");
        assert!(list_directory(&f, false).is_err());
        assert!(list_directory(&f, true).is_err());
    }
}
