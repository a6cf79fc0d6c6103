//! Error types for vmx-content

/// Result type for vmx-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vmx-content operations
///
/// Parsing a file never fails; these cover key-level operations and the
/// file I/O underneath load and save.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("key '{key}' already exists (as '{existing}')")]
    DuplicateKey { key: String, existing: String },

    #[error("key '{key}' does not exist")]
    KeyNotFound { key: String },

    #[error("invalid assignment '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error(transparent)]
    Fs(#[from] vmx_fs::Error),
}

impl Error {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
