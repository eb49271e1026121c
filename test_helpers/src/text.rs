//! Text normalization helpers for usage and diagnostic assertions.

use anyhow::{Result, anyhow};

/// Converts CRLF line endings to LF and trims trailing whitespace on each
/// line.
#[must_use]
pub fn normalize_usage(text: &str) -> String {
    text.replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the usage line documenting the long flag `long` (for example
/// `--account-id`), trimmed.
///
/// # Errors
///
/// Returns an error when no line mentions the flag.
pub fn flag_line<'a>(usage: &'a str, long: &str) -> Result<&'a str> {
    usage
        .lines()
        .map(str::trim)
        .find(|line| line.split([',', ' ']).any(|token| token == long))
        .ok_or_else(|| anyhow!("usage does not document {long}:\n{usage}"))
}
