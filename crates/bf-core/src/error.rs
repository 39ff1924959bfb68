//! Simulator error type.
//!
//! Sub-crates may define their own error enums and wrap `BfError` as one
//! variant (see `bf-output` and the `bf-sim` loader), or return it directly.

use thiserror::Error;

/// The top-level error type for `bf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BfError {
    /// A parameter was rejected synchronously at the call site.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  String,
        reason: &'static str,
    },

    /// A normalization step would divide by zero, or the computation needs
    /// at least one array and none is configured.
    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BfError {
    /// Build an [`BfError::InvalidParameter`] from any displayable value.
    pub fn invalid(name: &'static str, value: impl std::fmt::Display, reason: &'static str) -> Self {
        BfError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Shorthand result type for all `bf-*` crates.
pub type BfResult<T> = Result<T, BfError>;
