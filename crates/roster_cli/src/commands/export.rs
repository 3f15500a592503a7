use anyhow::Result;
use roster_core::{ReportRenderer, Roster, export_report};
use tracing::info;

use crate::output;

pub fn execute(output_path: &str, title: &str) -> Result<()> {
    info!("Exporting maintainers report to: {}", output_path);

    let roster = Roster::builtin();
    let report = ReportRenderer::new(title).render(&roster.list(None));

    export_report(output_path, &report)?;

    output::print_success(&format!("Maintainers list saved to {}", output_path));
    Ok(())
}
