//! Recursive copy with name-based exclusion.

use crate::Result;
use crate::error::FsOpsError;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Base names to skip during a recursive copy.
///
/// Matched against each entry's own file name at every recursion depth, so
/// excluding `"node_modules"` skips such a directory wherever it appears in
/// the tree.
///
/// # Examples
///
/// ```
/// use fsops_core::ExcludeSet;
/// use std::ffi::OsStr;
///
/// let excludes: ExcludeSet = [".git", "node_modules"].into_iter().collect();
/// assert!(excludes.contains(OsStr::new(".git")));
/// assert!(!excludes.contains(OsStr::new("src")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    names: HashSet<OsString>,
}

impl ExcludeSet {
    /// Creates an empty exclusion set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base name to the set.
    pub fn insert(&mut self, name: impl Into<OsString>) {
        self.names.insert(name.into());
    }

    /// Returns `true` if `name` is excluded.
    #[must_use]
    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Returns `true` if nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of excluded names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<OsString>> FromIterator<S> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Report of a recursive copy.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    /// Number of regular files copied.
    pub files_copied: usize,

    /// Number of directories created at the destination.
    pub directories_created: usize,

    /// Number of symlinks recreated at the destination.
    pub symlinks_recreated: usize,

    /// Number of entries skipped because their base name was excluded.
    pub entries_skipped: usize,

    /// Total bytes copied from regular files.
    pub bytes_copied: u64,
}

impl CopyReport {
    /// Creates a new empty copy report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Copies a file, a symlink, or a directory tree.
///
/// Symlinks are recreated as links with the identical target, never
/// dereferenced. Directories are created at the destination with the mode
/// bits read from their source counterpart, then their entries are copied
/// recursively. An entry whose base name is in `excludes` is skipped
/// together with everything beneath it, at any depth; if `source`'s own
/// base name is excluded the call fails with [`FsOpsError::Excluded`] and
/// nothing is copied.
///
/// A regular-file copy onto an existing destination file overwrites it,
/// per [`fs::copy`] semantics.
///
/// The first I/O failure anywhere in the traversal aborts the call and
/// names the entry that failed. Entries copied before that point remain.
///
/// # Errors
///
/// Returns an error if `source`'s base name is excluded, if `source` cannot
/// be read, or if any entry cannot be created at the destination.
///
/// # Examples
///
/// ```no_run
/// use fsops_core::ExcludeSet;
///
/// let excludes: ExcludeSet = [".git"].into_iter().collect();
/// let report = fsops_core::copy("themes/base", "themes/fork", &excludes)?;
/// println!("copied {} files", report.files_copied);
/// # Ok::<(), fsops_core::FsOpsError>(())
/// ```
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    excludes: &ExcludeSet,
) -> Result<CopyReport> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if let Some(name) = source.file_name()
        && excludes.contains(name)
    {
        return Err(FsOpsError::Excluded {
            path: source.to_path_buf(),
        });
    }

    let mut report = CopyReport::default();
    copy_entry(source, destination, excludes, &mut report)?;
    Ok(report)
}

fn copy_entry(
    source: &Path,
    destination: &Path,
    excludes: &ExcludeSet,
    report: &mut CopyReport,
) -> Result<()> {
    let metadata = source
        .symlink_metadata()
        .map_err(|e| FsOpsError::io(source, e))?;

    if metadata.is_symlink() {
        return recreate_symlink(source, destination, report);
    }

    if metadata.is_file() {
        let written = fs::copy(source, destination).map_err(|e| FsOpsError::io(destination, e))?;
        report.files_copied += 1;
        report.bytes_copied += written;
        return Ok(());
    }

    if !destination.is_dir() {
        create_dir_with_source_mode(destination, &metadata)?;
        report.directories_created += 1;
    }

    let entries = fs::read_dir(source).map_err(|e| FsOpsError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsOpsError::io(source, e))?;
        let name = entry.file_name();

        if excludes.contains(&name) {
            report.entries_skipped += 1;
            continue;
        }

        copy_entry(&entry.path(), &destination.join(&name), excludes, report)?;
    }

    Ok(())
}

/// Recreates `source` as a symlink at `destination` with the same target.
fn recreate_symlink(source: &Path, destination: &Path, report: &mut CopyReport) -> Result<()> {
    let target = fs::read_link(source).map_err(|e| FsOpsError::io(source, e))?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&target, destination)
            .map_err(|e| FsOpsError::io(destination, e))?;
        report.symlinks_recreated += 1;
        Ok(())
    }

    #[cfg(not(unix))]
    {
        let _ = (target, report);
        Err(FsOpsError::io(
            destination,
            std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "symlinks are not supported on this platform",
            ),
        ))
    }
}

/// Creates `destination` carrying the mode bits of the source directory.
fn create_dir_with_source_mode(destination: &Path, metadata: &fs::Metadata) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        use std::os::unix::fs::PermissionsExt;
        builder.mode(metadata.permissions().mode());
    }

    #[cfg(not(unix))]
    let _ = metadata;

    builder
        .create(destination)
        .map_err(|e| FsOpsError::io(destination, e))
}
