//! Error types for showreel.
//!
//! Interaction handlers never fail on user input; errors only arise while
//! loading configuration, motion profiles, galleries and replay scripts.
//! All of them are collected in [`ShowreelError`] and the [`Result`] alias.

use thiserror::Error;

/// The main error type for showreel operations.
///
/// # Examples
///
/// ```
/// use showreel::domain::ShowreelError;
///
/// fn validate_gallery() -> Result<(), ShowreelError> {
///     Err(ShowreelError::Gallery("project 2 has no image".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ShowreelError {
    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The project gallery or section layout could not be parsed or is inconsistent.
    #[error("Gallery error: {0}")]
    Gallery(String),

    /// A motion profile could not be found or parsed.
    #[error("Motion profile error: {0}")]
    Motion(String),

    /// A replay script could not be parsed.
    #[error("Replay error: {0}")]
    Replay(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for showreel operations.
pub type Result<T> = std::result::Result<T, ShowreelError>;
