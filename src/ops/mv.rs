use std::fs;
use std::path::Path;

use crate::error::Result;

/// Rename (move) `old` to `new` with the OS's native rename semantics.
///
/// Atomic within one filesystem where the OS guarantees it. Cross-device
/// behavior is whatever the OS reports — typically an error — and no
/// copy-and-remove fallback is attempted; the caller decides how to react.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> Result<()> {
    fs::rename(old.as_ref(), new.as_ref())?;
    Ok(())
}
