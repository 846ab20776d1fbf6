/// Core Module for TVEvents
///
/// Shared infrastructure used by every front end: the error type and the
/// result alias.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, TvEventsError};
