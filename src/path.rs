//! Pure path transformations.
//!
//! Everything in this module is a pure function of the path's component
//! sequence: no filesystem access (except `absolute`/`current_directory`/
//! `temp_directory`, which read process state but never fail) and no failure
//! mode. Malformed input yields an empty or unchanged result per the
//! platform's path grammar, never an error.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Return the lexically absolute form of `path`: unchanged if already
/// absolute, otherwise joined onto the current working directory. Does not
/// resolve symlinks and does not require the path to exist.
pub fn absolute<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        current_directory().join(p)
    }
}

/// The process working directory, or an empty path if it cannot be read
/// (deleted cwd, insufficient permissions).
pub fn current_directory() -> PathBuf {
    env::current_dir().unwrap_or_default()
}

/// The platform temporary-file directory.
pub fn temp_directory() -> PathBuf {
    env::temp_dir()
}

/// The root name of `path` (drive or UNC prefix on Windows, always empty on
/// Unix).
pub fn root_name<P: AsRef<Path>>(path: P) -> PathBuf {
    match path.as_ref().components().next() {
        Some(Component::Prefix(prefix)) => PathBuf::from(prefix.as_os_str()),
        _ => PathBuf::new(),
    }
}

/// The root of `path`: root name plus root directory (`/` for an absolute
/// Unix path, `C:\` for a Windows drive path, empty for a relative path).
pub fn root_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.as_ref().components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            _ => break,
        }
    }
    out
}

/// Everything before the final component, empty when there is no parent.
pub fn parent_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().parent().map(Path::to_path_buf).unwrap_or_default()
}

/// `path` with its root stripped (`/a/b` becomes `a/b`); a relative path is
/// returned unchanged.
pub fn relative_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.as_ref().components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => continue,
            _ => out.push(comp.as_os_str()),
        }
    }
    out
}

/// Lexically relativize `path` against `base`: strip the common component
/// prefix, then climb with `..` for each remaining base component. Returns
/// `.` when the two are equal and an empty path when their roots differ
/// (no lexical relation exists).
pub fn relative<P: AsRef<Path>, Q: AsRef<Path>>(path: P, base: Q) -> PathBuf {
    let path = path.as_ref();
    let base = base.as_ref();
    if root_path(path) != root_path(base) {
        return PathBuf::new();
    }

    let a: Vec<Component> = path.components().collect();
    let b: Vec<Component> = base.components().collect();
    let mut common = 0;
    while common < a.len() && common < b.len() && a[common] == b[common] {
        common += 1;
    }

    let mut out = PathBuf::new();
    for comp in &b[common..] {
        // `.` components contribute no depth to climb out of.
        if !matches!(comp, Component::CurDir) {
            out.push("..");
        }
    }
    for comp in &a[common..] {
        out.push(comp.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// The final component of `path`, empty when there is none.
pub fn filename<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().file_name().map(PathBuf::from).unwrap_or_default()
}

/// The final component with its last extension stripped.
pub fn stem<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().file_stem().map(PathBuf::from).unwrap_or_default()
}

/// The last extension of the final component, including the leading dot
/// (`"a.txt"` yields `".txt"`); empty when there is none.
pub fn extension<P: AsRef<Path>>(path: P) -> String {
    match path.as_ref().extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

/// Join `segment` onto `path`, inserting exactly one separator boundary:
/// `append("a", "b")` is `a/b`. An absolute `segment` replaces `path`.
pub fn append<P: AsRef<Path>, S: AsRef<Path>>(path: P, segment: S) -> PathBuf {
    path.as_ref().join(segment)
}

/// Concatenate `suffix` onto `path` with no separator inserted:
/// `concat("a", "b")` is `ab`.
pub fn concat<P: AsRef<Path>>(path: P, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_ref().as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Drop the final component, keeping the trailing separator:
/// `a/b` becomes `a/`, a bare `b` becomes the empty path.
pub fn remove_filename<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if p.file_name().is_none() {
        return p.to_path_buf();
    }
    #[cfg(unix)]
    {
        // Cut on the raw bytes so non-UTF-8 components survive untouched;
        // the separator is a plain ASCII byte on Unix.
        use std::os::unix::ffi::{OsStrExt, OsStringExt};
        let bytes = p.as_os_str().as_bytes();
        match bytes.iter().rposition(|&b| b == b'/') {
            Some(idx) => PathBuf::from(OsString::from_vec(bytes[..=idx].to_vec())),
            None => PathBuf::new(),
        }
    }
    #[cfg(not(unix))]
    {
        let raw = p.as_os_str().to_string_lossy();
        match raw.rfind(std::path::is_separator) {
            Some(idx) => PathBuf::from(&raw[..=idx]),
            None => PathBuf::new(),
        }
    }
}

/// Replace the final component of `path` with `name`.
pub fn replace_filename<P: AsRef<Path>, S: AsRef<Path>>(path: P, name: S) -> PathBuf {
    let mut out = remove_filename(path);
    out.push(name);
    out
}

/// Replace the extension of the final component; an empty `ext` removes the
/// extension. A leading dot on `ext` is accepted and ignored.
pub fn replace_extension<P: AsRef<Path>>(path: P, ext: &str) -> PathBuf {
    path.as_ref().with_extension(ext.trim_start_matches('.'))
}

/// Normalize directory separators to the platform's preferred one. A no-op
/// on Unix, where `/` is already preferred and `\` is not a separator.
pub fn make_preferred<P: AsRef<Path>>(path: P) -> PathBuf {
    #[cfg(windows)]
    {
        let raw = path.as_ref().to_string_lossy().replace('/', "\\");
        PathBuf::from(raw)
    }
    #[cfg(not(windows))]
    {
        path.as_ref().to_path_buf()
    }
}

/// Whether `path` is absolute.
pub fn is_absolute<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_absolute()
}

/// Split `path` into its component strings in traversal order. A root
/// directory appears as its own leading component: `split("/a/b")` is
/// `["/", "a", "b"]`, `split("a/b/c")` is `["a", "b", "c"]`.
pub fn split<P: AsRef<Path>>(path: P) -> Vec<String> {
    path.as_ref()
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}
