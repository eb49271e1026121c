//! Error types for the `audit-script` demo.
use thiserror::Error;

/// Errors raised by the audit script.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Option declaration or conversion failed.
    #[error("failed to read options: {0}")]
    Options(#[from] propertized::PropError),
    /// Writing the plan failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the audit script.
pub type Result<T> = std::result::Result<T, AuditError>;
