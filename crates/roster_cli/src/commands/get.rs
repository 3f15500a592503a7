use anyhow::Result;
use roster_core::{Roster, RosterError};
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(name: &str, format: OutputFormat) -> Result<()> {
    info!("Looking up maintainer: {}", name);

    let maintainer = Roster::builtin()
        .find(name)
        .ok_or_else(|| RosterError::not_found(name))?;

    match format {
        OutputFormat::Text => output::print_details(maintainer),
        OutputFormat::Json => output::print_json(&output::contributor_json(maintainer))?,
    }

    Ok(())
}
