//! Error types produced by schema declaration, record access, and option
//! parsing.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{CoercionError, PropError};

/// Result alias used throughout the crate.
pub type PropResult<T> = Result<T, PropError>;
