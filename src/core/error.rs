/// TVEvents Error Module
///
/// This module defines the error types for the ambient layers of the
/// application: configuration loading, terminal I/O and console commands.
/// The event log itself cannot fail.
use thiserror::Error;

/// Error type for the TVEvents application.
///
/// Covers the failures that can occur around the core:
/// - Configuration loading and validation
/// - Terminal and console I/O
/// - Console command resolution (unknown widgets and the like)
#[derive(Error, Debug)]
pub enum TvEventsError {
    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system, terminal and console I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Console command validation errors
    #[error("Command error: {0}")]
    Command(String),
}

/// Type alias for Result to use TvEventsError as the error type.
pub type Result<T> = std::result::Result<T, TvEventsError>;
