//! Recursive deletion.

use crate::Result;
use crate::error::FsOpsError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Deletes a file, a symlink, or a directory tree.
///
/// Succeeds immediately if `source` does not exist. A directory is walked
/// depth-first with children before parents, so every directory is empty by
/// the time it is removed; the walk does not follow symlinks, which are
/// unlinked like files without touching their targets.
///
/// The first failing removal aborts the call and names the entry that could
/// not be removed. Entries removed before that point stay removed.
///
/// # Errors
///
/// Returns an error if any entry cannot be removed, or if `source` exists
/// but its metadata cannot be read.
///
/// # Examples
///
/// ```no_run
/// fsops_core::delete("build/stage")?;
/// # Ok::<(), fsops_core::FsOpsError>(())
/// ```
pub fn delete<P: AsRef<Path>>(source: P) -> Result<()> {
    let source = source.as_ref();

    let metadata = match source.symlink_metadata() {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsOpsError::io(source, e)),
    };

    if metadata.is_dir() {
        // contents_first yields children before their parent and the root
        // last. file_type() is that of the link itself, so a symlink to a
        // directory goes through remove_file.
        for entry in WalkDir::new(source).contents_first(true) {
            let entry = entry.map_err(|e| FsOpsError::walk(source, e))?;
            if entry.file_type().is_dir() {
                fs::remove_dir(entry.path()).map_err(|e| FsOpsError::io(entry.path(), e))?;
            } else {
                fs::remove_file(entry.path()).map_err(|e| FsOpsError::io(entry.path(), e))?;
            }
        }
        Ok(())
    } else {
        fs::remove_file(source).map_err(|e| FsOpsError::io(source, e))
    }
}
