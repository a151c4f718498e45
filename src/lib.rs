//! Host filesystem operations for an embedding scripting host.
//!
//! Two cooperating layers behind one flat surface:
//!
//! - [`path`] — pure, non-failing transformations over path values
//!   (decompose into root/parent/stem/extension, join, normalize,
//!   relativize, split into components). No filesystem access, no errors.
//! - [`ops`] — operations that touch the OS (create/remove/copy/rename,
//!   existence and type queries, size and modification time, directory
//!   enumeration, age-based pruning). Every fallible operation returns
//!   [`Result`] with an [`FsError`] whose `Display` is the underlying OS
//!   message, so a binding layer can map `Ok`/`Err` directly onto its
//!   `(value | false, message)` convention.
//!
//! Everything is synchronous and blocking. The crate holds no state across
//! calls; the live filesystem is the only source of truth and concurrent
//! external processes may race with any operation.

pub mod error;
pub mod ops;
pub mod path;

pub use crate::error::{FsError, Result};
pub use crate::path::is_absolute;
pub use crate::ops::{
    change_directory, copy, copy_file, exists, file_size, file_type, is_directory,
    last_modified_time, list_directory, make_directory, prune_by_age, remove, remove_all,
    remove_file, rename, CopyFlags, DirEntry, FileType,
};
