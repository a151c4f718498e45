//! Filesystem operation layer.
//!
//! Every operation here touches the live filesystem and returns
//! `Result<T, FsError>`; recoverable OS conditions (missing paths, permission
//! errors, cross-device renames) become `Err` values, never panics. Pure
//! queries (`exists`, `is_directory`, `file_type`) return their value
//! directly. All calls are synchronous and blocking; no state is held across
//! calls and the filesystem is the sole source of truth, so nothing here
//! mediates races with concurrent external processes.

pub mod copy;
pub mod create;
pub mod dir;
pub mod mv;
pub mod prune;
pub mod remove;
pub mod stat;
pub mod workdir;

pub use copy::{copy, copy_file, CopyFlags};
pub use create::make_directory;
pub use dir::{list_directory, DirEntry};
pub use mv::rename;
pub use prune::prune_by_age;
pub use remove::{remove, remove_all, remove_file};
pub use stat::{exists, file_size, file_type, is_directory, last_modified_time, FileType};
pub use workdir::change_directory;
