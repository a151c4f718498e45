use std::fs;
use std::io;
use std::path::Path;

use bitflags::bitflags;
use filetime::FileTime;
use fs_extra::file::{copy as file_copy, CopyOptions};
use walkdir::WalkDir;

use crate::error::{FsError, Result};

bitflags! {
    /// Copy behavior flags.
    ///
    /// Combinable by the caller and forwarded opaquely; this layer never
    /// validates combinations beyond using them. Existence policy
    /// (`SKIP_EXISTING` / `UPDATE_EXISTING` / `OVERWRITE_EXISTING`) applies
    /// per copied file; with none of the three set, an existing destination
    /// file is an error.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CopyFlags: u32 {
        const NONE = 0;
        const RECURSIVE = 1 << 0;
        const COPY_SYMLINKS = 1 << 1;
        const SKIP_SYMLINKS = 1 << 2;
        const SKIP_EXISTING = 1 << 3;
        const UPDATE_EXISTING = 1 << 4;
        const CREATE_SYMLINKS = 1 << 5;
        const DIRECTORIES_ONLY = 1 << 6;
        const CREATE_HARD_LINKS = 1 << 7;
        const OVERWRITE_EXISTING = 1 << 8;
    }
}

/// Copy a single file from `from` to `to`, honoring the existence-policy and
/// link-creation flags.
///
/// Returns `Ok(true)` when a file (or link) was produced at `to` and
/// `Ok(false)` when the policy decided to leave an existing destination
/// alone (`SKIP_EXISTING`, or `UPDATE_EXISTING` with a source that is not
/// newer). The source modification time is carried over to the copy.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q, flags: CopyFlags) -> Result<bool> {
    let from = from.as_ref();
    let to = to.as_ref();

    if flags.contains(CopyFlags::CREATE_HARD_LINKS) {
        fs::hard_link(from, to)?;
        return Ok(true);
    }
    if flags.contains(CopyFlags::CREATE_SYMLINKS) {
        make_symlink(from, to)?;
        return Ok(true);
    }

    if to.exists() {
        if flags.contains(CopyFlags::SKIP_EXISTING) {
            return Ok(false);
        }
        if flags.contains(CopyFlags::UPDATE_EXISTING) {
            let src_m = fs::metadata(from)?.modified()?;
            let dst_m = fs::metadata(to)?.modified()?;
            if src_m <= dst_m {
                return Ok(false);
            }
        } else if !flags.contains(CopyFlags::OVERWRITE_EXISTING) {
            return Err(FsError::PathContext {
                src: from.to_path_buf(),
                dst: to.to_path_buf(),
                msg: "destination already exists".into(),
            });
        }
    }

    copy_payload(from, to)?;
    Ok(true)
}

/// General copy: files delegate to [`copy_file`], directories are mirrored
/// into `to`.
///
/// A file copied onto an existing directory targets a like-named file inside
/// that directory (`copy("src.txt", "dest/")` produces `dest/src.txt`).
///
/// A directory copy without `RECURSIVE` copies only the immediate regular
/// files; with `RECURSIVE` the whole subtree is mirrored. `DIRECTORIES_ONLY`
/// reproduces the directory structure and skips file payloads;
/// `SKIP_SYMLINKS` / `COPY_SYMLINKS` control whether links are skipped,
/// recreated, or followed (the default).
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q, flags: CopyFlags) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();
    let meta = fs::symlink_metadata(from)?;

    if meta.file_type().is_symlink() {
        if flags.contains(CopyFlags::SKIP_SYMLINKS) {
            return Ok(());
        }
        if flags.contains(CopyFlags::COPY_SYMLINKS) {
            let target = fs::read_link(from)?;
            make_symlink(&target, to)?;
            return Ok(());
        }
        // Fall through: the copy below follows the link.
    }

    if !from.is_dir() {
        // A file copied onto an existing directory lands inside it under
        // its own name.
        let target = match from.file_name() {
            Some(name) if to.is_dir() => to.join(name),
            _ => to.to_path_buf(),
        };
        return copy_file(from, &target, flags).map(|_| ());
    }

    fs::create_dir_all(to)?;
    let recursive = flags.contains(CopyFlags::RECURSIVE);
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(from)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
    {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = to.join(rel);
        let ft = entry.file_type();

        if ft.is_symlink() {
            if flags.contains(CopyFlags::SKIP_SYMLINKS) {
                continue;
            }
            if flags.contains(CopyFlags::COPY_SYMLINKS) {
                let link = fs::read_link(entry.path())?;
                make_symlink(&link, &target)?;
                continue;
            }
            // Followed link: copied below as an ordinary file payload.
        }

        if ft.is_dir() {
            if recursive {
                fs::create_dir_all(&target)?;
            }
            continue;
        }

        if flags.contains(CopyFlags::DIRECTORIES_ONLY) {
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        copy_file(entry.path(), &target, flags)?;
    }

    tracing::debug!(
        "copied {} -> {} (recursive: {})",
        from.display(),
        to.display(),
        recursive
    );
    Ok(())
}

// Payload copy for one regular file, overwriting whatever is at `to` (the
// caller has already applied the existence policy). Carries the source
// modification time onto the copy, best-effort.
fn copy_payload(from: &Path, to: &Path) -> Result<()> {
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = 64 * 1024;
    file_copy(from, to, &options).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    if let Ok(meta) = fs::metadata(from) {
        if let Ok(modified) = meta.modified() {
            let _ = filetime::set_file_mtime(to, FileTime::from_system_time(modified));
        }
    }
    Ok(())
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
