//! Zip archive creation and extraction.
//!
//! [`zip`](create::zip) packs a file or directory tree into a zip container
//! with entry names relative to the source root; [`unzip`](extract::unzip)
//! unpacks a container into a directory, with optional overwrite semantics.

use std::io::Read;
use std::io::Write;
use std::io::{self};

pub mod create;
pub mod extract;
pub mod report;

pub use create::zip;
pub use extract::unzip;
pub use report::ArchiveReport;
pub use report::ExtractReport;

/// Buffer size for archive I/O (64 KB).
///
/// Matches typical filesystem block sizes; one buffer is allocated per
/// operation and reused for every entry.
pub(crate) const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copies everything from `reader` to `writer` through a caller-provided
/// buffer, retrying interrupted reads. Returns the number of bytes copied.
pub(crate) fn copy_streams<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut [u8],
) -> io::Result<u64> {
    let mut total = 0u64;

    loop {
        let bytes_read = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}
