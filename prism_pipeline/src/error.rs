//! Error types for the Prism render pipeline layer
//!
//! This module defines the error types used throughout the pipeline layer,
//! covering build-time configuration faults, life-cycle misuse and failures
//! surfaced by renderer collaborators.

use std::fmt;

/// Result type for render pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render pipeline errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Build-time configuration fault: duplicate node or output name,
    /// or a dependency edge referencing a node/output that does not exist
    Configuration(String),

    /// Misuse of a builder or pipeline life-cycle (e.g. rendering a
    /// destroyed pipeline, presenting without an output node)
    Lifecycle(String),

    /// Failure reported by a renderer collaborator through a hook
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Lifecycle(msg) => write!(f, "Lifecycle error: {}", msg),
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log a configuration error and early-return it from the enclosing function
///
/// Construction-time errors are unrecoverable for the pipeline build in
/// progress, so every rejection path both logs the offending node/edge and
/// aborts the build.
#[macro_export]
macro_rules! render_bail {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::dispatch_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        return Err($crate::error::Error::Configuration(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
