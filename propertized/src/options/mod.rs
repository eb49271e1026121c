//! Command-line options derived from a property schema.
//!
//! Declare an [`OptionsSchema`] made of [`Opt`] descriptors, then parse the
//! process arguments into a [`ScriptOptions`] record:
//!
//! ```
//! use std::sync::Arc;
//! use propertized::{Defaults, Opt, OptAction, OptionsSchema, ScriptOptions};
//! use serde_json::json;
//!
//! let schema = Arc::new(
//!     OptionsSchema::builder("Options")
//!         .opt(Opt::new("account_id").required(true).help("The account you want to audit"))
//!         .opt(Opt::new("dry_run").default(false).action(OptAction::StoreTrue))
//!         .opt(
//!             Opt::new("action")
//!                 .default("audit")
//!                 .choices(["audit", "detect_fraud", "validate_books"]),
//!         )
//!         .build()?,
//! );
//!
//! let options = ScriptOptions::try_parse_from(
//!     schema,
//!     ["myscript", "-a", "7", "--dry-run"],
//!     &Defaults::new(),
//! )?;
//! assert_eq!(options.get("account_id")?, json!("7"));
//! assert_eq!(options.get("dry_run")?, json!(true));
//! assert_eq!(options.get("action")?, json!("audit"));
//! # Ok::<_, propertized::PropError>(())
//! ```

mod opt;
mod parser;
mod schema;
mod script;

use std::collections::BTreeMap;

use serde_json::Value;

pub use opt::{ArgExtras, Opt, OptAction};
pub(crate) use parser::assign_short_flags;
pub use parser::{HELP_SHORT, compose_help, long_flag};
pub use schema::{OptionsSchema, OptionsSchemaBuilder};
pub use script::{ScriptOptions, missing_required_message};

/// Per-field default overrides supplied at parse time.
pub type Defaults = BTreeMap<String, Value>;
