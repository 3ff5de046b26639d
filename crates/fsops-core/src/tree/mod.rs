//! Recursive tree operations: delete, copy, and directory creation.

pub mod copy;
pub mod mkdir;
pub mod remove;

pub use copy::CopyReport;
pub use copy::ExcludeSet;
pub use copy::copy;
pub use mkdir::mkdir;
pub use remove::delete;
