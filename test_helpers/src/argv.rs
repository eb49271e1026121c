//! Argument vectors for option parsing tests.

/// Program name prepended by [`argv`].
pub const PROGRAM: &str = "prog";

/// Builds an argument vector with [`PROGRAM`] followed by `args`.
///
/// # Examples
///
/// ```
/// use propertized_test_helpers::argv::argv;
///
/// assert_eq!(argv(&["-a", "7"]), ["prog", "-a", "7"]);
/// ```
#[must_use]
pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once(PROGRAM)
        .chain(args.iter().copied())
        .map(str::to_owned)
        .collect()
}

/// Splits a shell-like command line on whitespace into an argument vector
/// starting with [`PROGRAM`].
///
/// No quoting is supported; tests needing spaces inside a value should use
/// [`argv`].
#[must_use]
pub fn split(command_line: &str) -> Vec<String> {
    let args: Vec<&str> = command_line.split_whitespace().collect();
    argv(&args)
}
