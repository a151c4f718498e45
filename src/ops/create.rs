use std::fs;
use std::path::Path;

use crate::error::Result;

/// Create the directory at `path` together with all missing ancestors.
///
/// Returns `Ok(true)` when anything was newly created and `Ok(false)` when
/// the full path already existed as a directory; the latter is not an error,
/// so the call is idempotent.
pub fn make_directory<P: AsRef<Path>>(path: P) -> Result<bool> {
    let p = path.as_ref();
    if p.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(p)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_and_is_idempotent() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("a/b/c");

        assert!(make_directory(&dir).expect("first create"));
        assert!(dir.is_dir());
        // Second call creates nothing and is not an error.
        assert!(!make_directory(&dir).expect("second create"));
    }

    #[test]
    fn existing_file_in_the_way_errors() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("blocker");
        std::fs::write(&f, b"x").expect("write blocker");

        let err = make_directory(f.join("sub")).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
