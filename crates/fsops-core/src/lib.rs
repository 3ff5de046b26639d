//! Recursive filesystem utilities for local automation.
//!
//! `fsops-core` bundles the five operations a packaging workflow needs:
//! zipping a file or folder into a container, extracting a container into a
//! folder, recursive delete, recursive copy with name-based exclusions, and
//! recursive directory creation with an explicit permission mode.
//!
//! Every operation is synchronous and self-contained; failures carry the
//! failure kind and the offending path instead of a bare success flag.
//!
//! # Examples
//!
//! ```no_run
//! use fsops_core::OpsConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = fsops_core::zip("themes/gallery", "gallery.zip")?;
//! println!("archived {} files", report.files_added);
//!
//! let config = OpsConfig::default();
//! fsops_core::unzip("gallery.zip", "deploy/gallery", true, &config)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod config;
pub mod error;
pub mod test_utils;
pub mod tree;

// Re-export main API types
pub use archive::create::zip;
pub use archive::extract::unzip;
pub use archive::report::ArchiveReport;
pub use archive::report::ExtractReport;
pub use config::DEFAULT_DIR_MODE;
pub use config::OpsConfig;
pub use error::FsOpsError;
pub use error::Result;
pub use tree::copy::CopyReport;
pub use tree::copy::ExcludeSet;
pub use tree::copy::copy;
pub use tree::mkdir::mkdir;
pub use tree::remove::delete;
