//! Emits documentation metadata for the audit script options.

use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let metadata = audit_script::options()?.doc();
    let json = serde_json::to_string_pretty(&metadata)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
