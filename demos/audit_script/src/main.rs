//! Audit script entry-point: parse options, then print the planned work.

use std::io;

use audit_script::error::Result;
use audit_script::plan::{AuditRequest, print_plan};
use propertized::{Defaults, ScriptOptions};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let options = ScriptOptions::from_env(audit_script::options()?, &Defaults::new())?;
    tracing::debug!(options = %options, "parsed options");
    let request = AuditRequest::from_options(&options)?;
    print_plan(&mut io::stdout().lock(), &request)
}
