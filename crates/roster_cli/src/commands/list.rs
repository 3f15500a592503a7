use anyhow::Result;
use roster_core::{Category, Roster};
use serde_json::Value;
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(category: Option<&str>, format: OutputFormat) -> Result<()> {
    info!("Listing maintainers (category: {:?})", category);

    // Parse before touching stdout so a bad filter prints no records
    let category = category.map(str::parse::<Category>).transpose()?;
    let maintainers = Roster::builtin().list(category);

    match format {
        OutputFormat::Text => {
            if maintainers.is_empty() {
                output::print_info("No maintainers match this role");
            }
            for maintainer in maintainers {
                output::print_summary_line(maintainer);
            }
        }
        OutputFormat::Json => {
            let entries = maintainers
                .into_iter()
                .map(output::contributor_json)
                .collect::<Vec<_>>();
            output::print_json(&Value::Array(entries))?;
        }
    }

    Ok(())
}
