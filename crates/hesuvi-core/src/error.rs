//! Error types for the HeSuVi kernel.
//!
//! Errors only occur on the control path (`init`). The render path never
//! reports errors; see [`RenderStatus`](crate::RenderStatus).

use std::fmt;

/// Failure reported by a convolution engine while loading its filter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    message: String,
}

impl EngineError {
    /// Create an engine error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EngineError {}

/// Errors that can occur while setting up the kernel.
#[derive(Debug)]
pub enum KernelError {
    /// Configuration value the kernel cannot clamp (sample rate, max frames).
    InvalidConfiguration(String),
    /// The engine failed to load its impulse response.
    ResourceLoad(EngineError),
    /// Operation not valid in the current lifecycle state.
    InvalidState(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::ResourceLoad(err) => write!(f, "Impulse resource failed to load: {}", err),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceLoad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for KernelError {
    fn from(err: EngineError) -> Self {
        Self::ResourceLoad(err)
    }
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;
