//! Error types for localization operations

use thiserror::Error;

/// Result type for localization operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors that can occur while building a message bundle
#[derive(Error, Debug)]
pub enum I18nError {
    /// A message file could not be parsed
    #[error("Failed to parse message file for locale '{locale}': {detail}")]
    MessageFileParseFailed {
        /// Locale code of the offending file
        locale: String,
        /// Parser diagnostic
        detail: String,
    },
}
