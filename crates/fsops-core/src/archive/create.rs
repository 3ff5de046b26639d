//! Zip archive creation.

use crate::Result;
use crate::archive::COPY_BUFFER_SIZE;
use crate::archive::copy_streams;
use crate::archive::report::ArchiveReport;
use crate::error::FsOpsError;
use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates a zip archive from a file or a directory tree.
///
/// A directory source is walked depth-first, parents before children, and
/// every entry is stored with a name relative to the source's resolved
/// (symlink-free) absolute path: the archive root holds the source's
/// *contents*, with no enclosing folder named after the source. A
/// single-file source becomes one entry named by its base name. Symlinks
/// inside the tree have no zip representation and are skipped.
///
/// `destination` is created or truncated. Not transactional: a failure
/// partway through the walk leaves a partially written archive behind.
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist
/// - `destination` cannot be created or truncated
/// - an entry cannot be read, or its name is not valid UTF-8
/// - the archive cannot be finalized
///
/// # Examples
///
/// ```no_run
/// let report = fsops_core::zip("plugins/gallery", "gallery.zip")?;
/// println!("archived {} files", report.files_added);
/// # Ok::<(), fsops_core::FsOpsError>(())
/// ```
pub fn zip<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<ArchiveReport> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.exists() {
        return Err(FsOpsError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    // Entry names are computed against the resolved form so a symlinked
    // source still yields names relative to the real tree.
    let root = source
        .canonicalize()
        .map_err(|e| FsOpsError::io(source, e))?;

    let file = File::create(destination).map_err(|e| FsOpsError::io(destination, e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut report = ArchiveReport::default();
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    if root.is_dir() {
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|e| FsOpsError::walk(&root, e))?;
            let relative = entry
                .path()
                .strip_prefix(&root)
                .map_err(|e| FsOpsError::Io {
                    path: entry.path().to_path_buf(),
                    source: std::io::Error::other(e),
                })?;

            // The root maps to an empty name, which is not a valid entry.
            if relative.as_os_str().is_empty() {
                continue;
            }

            let name = entry_name(relative)?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                writer
                    .add_directory(format!("{name}/").as_str(), options)
                    .map_err(|e| FsOpsError::archive(entry.path(), e))?;
                report.directories_added += 1;
            } else if file_type.is_file() {
                add_file(&mut writer, entry.path(), &name, options, &mut buffer, &mut report)?;
            }
        }
    } else {
        let base = root.file_name().map(Path::new).ok_or_else(|| FsOpsError::Io {
            path: root.clone(),
            source: std::io::Error::other("source has no base name"),
        })?;
        let name = entry_name(base)?;
        add_file(&mut writer, &root, &name, options, &mut buffer, &mut report)?;
    }

    // finish() flushes the central directory; an early return above drops
    // the writer and leaves only the partial container on disk.
    writer
        .finish()
        .map_err(|e| FsOpsError::archive(destination, e))?;

    Ok(report)
}

/// Adds a single file entry, preserving its Unix permission bits.
fn add_file<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
    buffer: &mut [u8],
    report: &mut ArchiveReport,
) -> Result<()> {
    let mut file = File::open(path).map_err(|e| FsOpsError::io(path, e))?;

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        let metadata = file.metadata().map_err(|e| FsOpsError::io(path, e))?;
        options.unix_permissions(metadata.permissions().mode())
    };

    writer
        .start_file(name, options)
        .map_err(|e| FsOpsError::archive(path, e))?;

    let written =
        copy_streams(&mut file, writer, buffer).map_err(|e| FsOpsError::io(path, e))?;

    report.files_added += 1;
    report.bytes_written += written;

    Ok(())
}

/// Converts a relative path into a zip entry name.
///
/// Zip entry names use forward slashes regardless of platform.
fn entry_name(relative: &Path) -> Result<String> {
    let name = relative.to_str().ok_or_else(|| FsOpsError::Io {
        path: relative.to_path_buf(),
        source: std::io::Error::other("entry name is not valid UTF-8"),
    })?;

    #[cfg(windows)]
    let name = name.replace('\\', "/");

    #[cfg(not(windows))]
    let name = name.to_string();

    Ok(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_zip_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = zip(temp.path().join("absent"), temp.path().join("out.zip"));
        assert!(matches!(
            result,
            Err(FsOpsError::SourceNotFound { .. })
        ));
        assert!(!temp.path().join("out.zip").exists());
    }

    #[test]
    fn test_zip_single_file_uses_base_name() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("readme.txt");
        fs::write(&source, "hello").unwrap();
        let output = temp.path().join("out.zip");

        let report = zip(&source, &output).unwrap();
        assert_eq!(report.files_added, 1);
        assert_eq!(report.directories_added, 0);
        assert_eq!(report.bytes_written, 5);

        let file = File::open(&output).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.by_index(0).unwrap().name(), "readme.txt");
    }

    #[test]
    fn test_zip_directory_has_no_enclosing_folder() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("theme");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("style.css"), "body {}").unwrap();
        fs::create_dir(source.join("assets")).unwrap();
        fs::write(source.join("assets/logo.svg"), "<svg/>").unwrap();
        let output = temp.path().join("theme.zip");

        let report = zip(&source, &output).unwrap();
        assert_eq!(report.files_added, 2);
        assert_eq!(report.directories_added, 1);

        let file = File::open(&output).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut names = Vec::new();
        for i in 0..archive.len() {
            names.push(archive.by_index(i).unwrap().name().to_string());
        }
        names.sort();
        assert_eq!(names, ["assets/", "assets/logo.svg", "style.css"]);
        for name in &names {
            assert!(!name.starts_with("theme"), "entry {name} carries the source folder");
        }
    }

    #[test]
    fn test_zip_directory_entries_end_with_slash() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir_all(source.join("a/b")).unwrap();
        let output = temp.path().join("out.zip");

        zip(&source, &output).unwrap();

        let file = File::open(&output).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert!(entry.is_dir());
            assert!(entry.name().ends_with('/'));
        }
    }

    #[test]
    fn test_zip_overwrites_destination() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("note.txt");
        fs::write(&source, "v2").unwrap();
        let output = temp.path().join("out.zip");
        fs::write(&output, "not a zip at all").unwrap();

        zip(&source, &output).unwrap();

        let file = File::open(&output).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_zip_skips_symlinks() {
        #[cfg(unix)]
        {
            let temp = TempDir::new().unwrap();
            let source = temp.path().join("tree");
            fs::create_dir(&source).unwrap();
            fs::write(source.join("real.txt"), "data").unwrap();
            std::os::unix::fs::symlink("real.txt", source.join("alias")).unwrap();
            let output = temp.path().join("out.zip");

            let report = zip(&source, &output).unwrap();
            assert_eq!(report.files_added, 1);

            let file = File::open(&output).unwrap();
            let archive = zip::ZipArchive::new(file).unwrap();
            assert_eq!(archive.len(), 1);
        }
    }

    #[test]
    fn test_zip_produces_zip_magic() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("data.bin");
        fs::write(&source, "a".repeat(1000)).unwrap();
        let output = temp.path().join("out.zip");

        zip(&source, &output).unwrap();

        let data = fs::read(&output).unwrap();
        assert_eq!(&data[0..4], b"PK\x03\x04");
    }
}
