//! Zip archive extraction.

use crate::OpsConfig;
use crate::Result;
use crate::archive::COPY_BUFFER_SIZE;
use crate::archive::copy_streams;
use crate::archive::report::ExtractReport;
use crate::error::FsOpsError;
use crate::tree::mkdir::mkdir;
use crate::tree::remove::delete;
use std::fs;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Metadata directory some macOS tools smuggle into zip containers.
const RESOURCE_FORK_DIR: &str = "__MACOSX";

/// Extracts a zip archive into a directory.
///
/// A missing `destination` is created recursively with `config.dir_mode`.
/// When `destination` exists and `overwrite` is `true`, it is deleted and
/// recreated first, so nothing from before the call survives. With
/// `overwrite` set to `false`, entries merge into the existing directory:
/// unrelated files are untouched and colliding relative paths are
/// overwritten.
///
/// After extraction, a top-level resource-fork artifact directory
/// (`__MACOSX`) is removed if the archive carried one.
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist or is not a readable zip container
/// - the destination cannot be created (or deleted, with `overwrite`)
/// - an entry's name would escape the destination
/// - an entry cannot be written to disk
///
/// # Examples
///
/// ```no_run
/// use fsops_core::OpsConfig;
///
/// let config = OpsConfig::default();
/// let report = fsops_core::unzip("gallery.zip", "plugins/gallery", true, &config)?;
/// println!("extracted {} files", report.files_extracted);
/// # Ok::<(), fsops_core::FsOpsError>(())
/// ```
pub fn unzip<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    overwrite: bool,
    config: &OpsConfig,
) -> Result<ExtractReport> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let file = File::open(source).map_err(|e| FsOpsError::io(source, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| FsOpsError::archive(source, e))?;

    if !destination.is_dir() {
        mkdir(destination, config)?;
    } else if overwrite {
        delete(destination)?;
        mkdir(destination, config)?;
    }

    let mut report = ExtractReport::default();
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| FsOpsError::archive(source, e))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(FsOpsError::InvalidArchive {
                path: source.to_path_buf(),
                message: format!("entry name escapes the destination: {}", entry.name()),
            });
        };
        let out_path = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| FsOpsError::io(&out_path, e))?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| FsOpsError::io(parent, e))?;
            }

            let mut out_file =
                File::create(&out_path).map_err(|e| FsOpsError::io(&out_path, e))?;
            let written = copy_streams(&mut entry, &mut out_file, &mut buffer)
                .map_err(|e| FsOpsError::io(&out_path, e))?;

            #[cfg(unix)]
            if let Some(mode) = entry.unix_mode() {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                    .map_err(|e| FsOpsError::io(&out_path, e))?;
            }

            report.files_extracted += 1;
            report.bytes_written += written;
        }
    }

    let resource_fork = destination.join(RESOURCE_FORK_DIR);
    if resource_fork.symlink_metadata().is_ok() {
        delete(&resource_fork)?;
        report.cleaned_resource_fork = true;
    }

    Ok(report)
}
