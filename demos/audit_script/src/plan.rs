//! Turning parsed options into the work the script would do.

use std::io::Write;

use propertized::ScriptOptions;
use serde::Deserialize;

use crate::error::Result;

/// What to do with the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Full audit of the account.
    Audit,
    /// Scan transactions for fraud.
    DetectFraud,
    /// Reconcile the books.
    ValidateBooks,
}

/// Typed view of the parsed options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuditRequest {
    /// Account to work on.
    pub account_id: String,
    /// Describe the work without doing it.
    pub dry_run: bool,
    /// Selected action.
    pub action: Action,
}

impl AuditRequest {
    /// Extract the request from parsed options.
    ///
    /// # Errors
    ///
    /// Returns an error when the option values do not fit the request.
    pub fn from_options(options: &ScriptOptions) -> Result<Self> {
        Ok(options.record().extract()?)
    }

    /// One-line description of the planned work.
    ///
    /// # Examples
    ///
    /// ```
    /// use audit_script::plan::{Action, AuditRequest};
    ///
    /// let request = AuditRequest {
    ///     account_id: "7".into(),
    ///     dry_run: true,
    ///     action: Action::DetectFraud,
    /// };
    /// assert_eq!(request.describe(), "[dry run] detecting fraud on account 7");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let verb = match self.action {
            Action::Audit => "auditing",
            Action::DetectFraud => "detecting fraud on",
            Action::ValidateBooks => "validating the books of",
        };
        let prefix = if self.dry_run { "[dry run] " } else { "" };
        format!("{prefix}{verb} account {}", self.account_id)
    }
}

/// Write the plan for `request` to `out`.
///
/// # Errors
///
/// Returns an error when writing fails.
pub fn print_plan(out: &mut impl Write, request: &AuditRequest) -> Result<()> {
    writeln!(out, "{}", request.describe())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use propertized::Defaults;
    use rstest::rstest;

    #[rstest]
    #[case(&["-a", "7"], "auditing account 7")]
    #[case(&["-a", "7", "--dry-run"], "[dry run] auditing account 7")]
    #[case(&["--account-id", "9", "--action", "validate_books"], "validating the books of account 9")]
    fn describes_parsed_options(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
        let argv = std::iter::once("audit-script").chain(args.iter().copied());
        let options = ScriptOptions::try_parse_from(crate::options()?, argv, &Defaults::new())?;
        let request = AuditRequest::from_options(&options)?;
        assert_eq!(request.describe(), expected);
        Ok(())
    }

    #[test]
    fn print_plan_writes_one_line() -> Result<()> {
        let request = AuditRequest {
            account_id: "3".into(),
            dry_run: false,
            action: Action::DetectFraud,
        };
        let mut out = Vec::new();
        print_plan(&mut out, &request)?;
        assert_eq!(String::from_utf8_lossy(&out), "detecting fraud on account 3\n");
        Ok(())
    }
}
