use std::env;
use std::path::Path;

use crate::error::Result;

/// Change the process working directory to `path`.
///
/// Fails when the path is missing or not a directory. Affects the whole
/// process, including what `path::absolute` resolves relative paths against.
pub fn change_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    env::set_current_dir(path.as_ref())?;
    Ok(())
}
