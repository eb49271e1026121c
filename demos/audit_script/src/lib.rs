//! Library facade for the `audit-script` demo so integration tests can reuse
//! the option schema and planning helpers.

pub mod error;
pub mod plan;

use std::sync::Arc;

use propertized::{Opt, OptAction, OptionsSchema, PropResult};

/// Actions the script can perform.
pub const ACTIONS: [&str; 3] = ["audit", "detect_fraud", "validate_books"];

/// Options accepted by the script.
///
/// # Errors
///
/// Returns the declaration error if the option schema is invalid.
pub fn options() -> PropResult<Arc<OptionsSchema>> {
    OptionsSchema::builder("AuditOptions")
        .bin_name("audit-script")
        .about("Audit, check for fraud, or validate the books of one account")
        .opt(
            Opt::new("account_id")
                .label("Account")
                .required(true)
                .help("The account you want to audit"),
        )
        .opt(
            Opt::new("dry_run")
                .label("Dry run")
                .default(false)
                .action(OptAction::StoreTrue)
                .help("Set this option to print what would happen without execution"),
        )
        .opt(
            Opt::new("action")
                .label("Action")
                .default("audit")
                .choices(ACTIONS)
                .help("The action you want to perform"),
        )
        .build()
        .map(Arc::new)
}
