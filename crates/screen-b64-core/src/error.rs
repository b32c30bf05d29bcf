//! Error types for screen-b64-core

use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the primary display
    Capture,
    /// PNG encoding
    Encode,
    /// Writing the Base64 line
    Output,
}

impl Stage {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Capture => "screen capture",
            Self::Encode => "PNG encoding",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Main error type for screen-b64 operations
///
/// Every variant is fatal: the pipeline stops at the first one.
#[derive(Error, Debug)]
pub enum Error {
    #[error("display capture unavailable: {reason}")]
    CaptureUnavailable { reason: String },

    #[error("failed to encode PNG: {0}")]
    EncodingFailure(#[from] image::ImageError),

    #[error("failed to write to stdout: {0}")]
    OutputFailure(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::CaptureUnavailable`] with the given reason
    pub fn capture(reason: impl Into<String>) -> Self {
        Self::CaptureUnavailable {
            reason: reason.into(),
        }
    }

    /// The stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            Self::CaptureUnavailable { .. } => Stage::Capture,
            Self::EncodingFailure(_) => Stage::Encode,
            Self::OutputFailure(_) => Stage::Output,
        }
    }

    /// Process exit code for this error. Usage errors (2) are the binary's concern.
    pub fn exit_code(&self) -> u8 {
        match self.stage() {
            Stage::Capture => 3,
            Stage::Encode => 4,
            Stage::Output => 5,
        }
    }
}

/// Result type alias for screen-b64 operations
pub type Result<T> = std::result::Result<T, Error>;
