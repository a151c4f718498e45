use std::fs;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::error::Result;

/// Classification of a filesystem object, mirroring the fixed tag set the
/// host surface exposes.
///
/// Classification follows symlinks: a link to a file reports `Regular`, and
/// a dangling link has no target status and reports `NotFound`. A status
/// that cannot be determined maps to `NotFound` or `Unknown` rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    None,
    NotFound,
    Regular,
    Directory,
    Symlink,
    Block,
    Character,
    Fifo,
    Socket,
    Unknown,
    ImplementationDefined,
}

impl FileType {
    /// Classify the object at `path`, following symlinks.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::metadata(path.as_ref()) {
            Ok(meta) => Self::from_file_type(meta.file_type()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => FileType::NotFound,
            Err(_) => FileType::Unknown,
        }
    }

    fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_file() {
            return FileType::Regular;
        }
        if ft.is_dir() {
            return FileType::Directory;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_block_device() {
                return FileType::Block;
            }
            if ft.is_char_device() {
                return FileType::Character;
            }
            if ft.is_fifo() {
                return FileType::Fifo;
            }
            if ft.is_socket() {
                return FileType::Socket;
            }
        }
        FileType::Unknown
    }

    /// The stable string tag for this classification.
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::None => "none",
            FileType::NotFound => "not_found",
            FileType::Regular => "regular",
            FileType::Directory => "directory",
            FileType::Symlink => "symlink",
            FileType::Block => "block",
            FileType::Character => "character",
            FileType::Fifo => "fifo",
            FileType::Socket => "socket",
            FileType::Unknown => "unknown",
            FileType::ImplementationDefined => "implementation-defined",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether anything exists at `path` (symlinks are followed).
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Whether `path` exists and is a directory.
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Classify the object at `path`. See [`FileType::of`].
pub fn file_type<P: AsRef<Path>>(path: P) -> FileType {
    FileType::of(path)
}

/// Size in bytes of the file at `path`.
pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(fs::metadata(path.as_ref())?.len())
}

/// Modification time of `path` as POSIX epoch seconds.
///
/// `Metadata::modified` already reports wall-clock time, so no filesystem
/// clock offset needs correcting here; timestamps before the epoch come back
/// as negative seconds. Fails with the OS message when the path is missing.
pub fn last_modified_time<P: AsRef<Path>>(path: P) -> Result<i64> {
    let modified = fs::metadata(path.as_ref())?.modified()?;
    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    Ok(secs)
}
