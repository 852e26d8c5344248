//! Error types for relurl.
//!
//! Classification itself never fails. These errors only surface at the
//! configuration and I/O edges (building caches, reading settings, the CLI).

use thiserror::Error;

/// Result type alias using `RelUrlError`.
pub type Result<T> = std::result::Result<T, RelUrlError>;

/// Main error type for relurl.
#[derive(Debug, Error)]
pub enum RelUrlError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A cache was configured to hold zero entries.
    #[error("Invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// A configuration value could not be interpreted.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION & I/O ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RelUrlError {
    /// Returns true if this error was caused by bad configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RelUrlError::InvalidCapacity(_) | RelUrlError::ConfigError(_)
        )
    }
}
