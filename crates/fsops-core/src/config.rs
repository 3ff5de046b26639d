//! Configuration for directory-creating operations.

/// Default permission mode for created directories.
///
/// Deliberately tighter than the common 0o777 platform default: owner gets
/// full access, group read/write, others read-only. Subject to the process
/// umask like any `mkdir`.
pub const DEFAULT_DIR_MODE: u32 = 0o764;

/// Configuration for operations that create directories.
///
/// Replaces a process-wide permission constant with an explicit value that
/// callers pass to [`mkdir`](crate::mkdir) and [`unzip`](crate::unzip).
///
/// # Examples
///
/// ```
/// use fsops_core::OpsConfig;
///
/// // Use the documented default mode
/// let config = OpsConfig::default();
///
/// // Or pick a custom one
/// let strict = OpsConfig::default().with_dir_mode(0o700);
/// assert_eq!(strict.dir_mode, 0o700);
/// ```
#[derive(Debug, Clone)]
pub struct OpsConfig {
    /// Permission mode applied to created directories.
    ///
    /// Applied on Unix via `DirBuilder::mode`, subject to umask. Ignored on
    /// platforms without Unix permission bits.
    ///
    /// Default: [`DEFAULT_DIR_MODE`].
    pub dir_mode: u32,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl OpsConfig {
    /// Creates an `OpsConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory permission mode.
    #[must_use]
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }
}
