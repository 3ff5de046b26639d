//! Recursive directory creation with an explicit permission mode.

use crate::OpsConfig;
use crate::Result;
use crate::error::FsOpsError;
use std::fs::DirBuilder;
use std::path::Path;

/// Creates a directory and all missing parents.
///
/// Succeeds immediately if `path` already exists, without checking that it
/// is actually a directory. On Unix, `config.dir_mode` is applied to every
/// directory this call creates, subject to the process umask; platforms
/// without Unix permission bits ignore the mode.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// use fsops_core::OpsConfig;
///
/// let config = OpsConfig::default().with_dir_mode(0o750);
/// fsops_core::mkdir("uploads/2026/08", &config)?;
/// # Ok::<(), fsops_core::FsOpsError>(())
/// ```
pub fn mkdir<P: AsRef<Path>>(path: P, config: &OpsConfig) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(config.dir_mode);
    }

    #[cfg(not(unix))]
    let _ = config;

    builder.create(path).map_err(|e| FsOpsError::io(path, e))
}
