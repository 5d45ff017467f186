//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;
use crate::tlut::TlutError;

/// Errors produced by the paltex crate.
#[derive(Debug)]
pub enum PaltexError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Invalid emulated texture memory view.
    Tlut(TlutError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PaltexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Tlut(e) => write!(f, "TLUT view error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PaltexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Tlut(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<RenderContextError> for PaltexError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<TlutError> for PaltexError {
    fn from(e: TlutError) -> Self {
        Self::Tlut(e)
    }
}

impl From<std::io::Error> for PaltexError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
