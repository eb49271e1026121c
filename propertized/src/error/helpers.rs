//! Helpers for classifying command-line errors.

use clap::{Error as ClapError, error::ErrorKind};

use super::PropError;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap surfaces these requests as errors so callers using the non-exiting
/// parse path can still hand them to [`clap::Error::exit`] and keep the
/// zero exit status.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl PropError {
    /// Returns `true` for errors caused by the person running the program
    /// (bad flags, help requests, missing required options) rather than by
    /// the schema declaration.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Cli(_) | Self::MissingRequired { .. })
    }
}
