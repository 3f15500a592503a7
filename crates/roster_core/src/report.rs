//! Markdown report rendering and export.
//!
//! Records are grouped by category in order of first appearance in the
//! input, not in [`Category::ALL`] order. A roster that lists a testing lead
//! before the project lead produces a report with the testing group first.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::{Category, Contributor};

/// Default report title for the BloodHorn roster.
pub const DEFAULT_TITLE: &str = "BloodHorn Bootloader - Maintainers";

/// Separator placed between links on a contributor's link line.
pub const LINK_SEPARATOR: &str = " | ";

/// Renders contributor records as a grouped Markdown document.
///
/// # Example
///
/// ```rust
/// use roster_core::{Category, Contributor, ReportRenderer};
///
/// let lead = Contributor::new("PacHashs", Category::ProjectLead);
/// let doc = ReportRenderer::default().render(&[&lead]);
///
/// assert!(doc.starts_with("# BloodHorn Bootloader - Maintainers\n\n"));
/// assert!(doc.contains("### PacHashs\n"));
/// ```
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    title: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl ReportRenderer {
    /// Creates a renderer with the given top-level title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders `records` into a single Markdown document.
    pub fn render(&self, records: &[&Contributor]) -> String {
        let mut doc = format!("# {}\n\n", self.title);

        let groups = group_by_category(records);
        for (category, members) in &groups {
            doc.push_str(&format!("## {}\n\n", category.display_name()));
            for contributor in members {
                render_entry(&mut doc, contributor);
            }
        }

        debug!(
            "Rendered {} records in {} category groups",
            records.len(),
            groups.len()
        );
        doc
    }
}

fn render_entry(doc: &mut String, contributor: &Contributor) {
    doc.push_str(&format!("### {}\n", contributor.name));
    doc.push_str(&format!(
        "**Role:** {}\n\n",
        contributor.category.display_name()
    ));

    if let Some(bio) = &contributor.bio {
        doc.push_str(&format!("{bio}\n\n"));
    }

    let links = links(contributor);
    if !links.is_empty() {
        doc.push_str(&links.join(LINK_SEPARATOR));
        doc.push_str("\n\n");
    }

    doc.push_str("---\n\n");
}

fn links(contributor: &Contributor) -> Vec<String> {
    let mut links = Vec::new();
    if let Some(url) = contributor.github_url() {
        links.push(format!("[GitHub]({url})"));
    }
    if let Some(url) = contributor.twitter_url() {
        links.push(format!("[Twitter]({url})"));
    }
    if let Some(url) = contributor.mailto() {
        links.push(format!("[Email]({url})"));
    }
    links
}

/// Partitions records by category, keyed in first-seen order.
///
/// Records keep their input order within each group.
pub fn group_by_category<'a>(records: &[&'a Contributor]) -> Vec<(Category, Vec<&'a Contributor>)> {
    let mut groups: Vec<(Category, Vec<&'a Contributor>)> = Vec::new();
    for &record in records {
        match groups.iter_mut().find(|(category, _)| *category == record.category) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.category, vec![record])),
        }
    }
    groups
}

/// Writes a rendered report to `path`, creating or truncating the file.
///
/// The file handle is released before returning on every path.
pub fn export_report(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let write_failure = |source| RosterError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_failure)?;
    file.write_all(contents.as_bytes()).map_err(write_failure)?;
    file.flush().map_err(write_failure)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_renders_title_only() {
        let doc = ReportRenderer::default().render(&[]);
        assert_eq!(doc, "# BloodHorn Bootloader - Maintainers\n\n");
    }

    #[test]
    fn test_full_entry_layout() {
        let c = Contributor::new("PacHashs", Category::ProjectLead)
            .github("PacHashs")
            .twitter("PacHashs")
            .email("pachashs@softwaresforall.eu.cc")
            .bio("Leads the project.");

        let doc = ReportRenderer::new("Team").render(&[&c]);

        assert_eq!(
            doc,
            "# Team\n\n\
             ## Project Lead & Core Developer\n\n\
             ### PacHashs\n\
             **Role:** Project Lead & Core Developer\n\n\
             Leads the project.\n\n\
             [GitHub](https://github.com/PacHashs) | [Twitter](https://twitter.com/PacHashs) | \
             [Email](mailto:pachashs@softwaresforall.eu.cc)\n\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_bare_record_has_no_links_or_bio() {
        let c = Contributor::new("Solo", Category::TestingLead);
        let doc = ReportRenderer::new("Team").render(&[&c]);

        assert_eq!(
            doc,
            "# Team\n\n## Testing Lead\n\n### Solo\n**Role:** Testing Lead\n\n---\n\n"
        );
        assert!(!doc.contains("[GitHub]"));
        assert!(!doc.contains(LINK_SEPARATOR));
    }

    #[test]
    fn test_partial_links_are_joined() {
        let c = Contributor::new("Alex Chen", Category::CoreDeveloper)
            .github("AlexChen")
            .email("alex.chen@softwaresforall.eu.cc");
        let doc = ReportRenderer::default().render(&[&c]);

        assert!(doc.contains(
            "[GitHub](https://github.com/AlexChen) | [Email](mailto:alex.chen@softwaresforall.eu.cc)\n\n"
        ));
        assert!(!doc.contains("[Twitter]"));
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let testing = Contributor::new("Tess", Category::TestingLead);
        let lead = Contributor::new("Lee", Category::ProjectLead);
        let testing_two = Contributor::new("Tom", Category::TestingLead);

        let doc = ReportRenderer::default().render(&[&testing, &lead, &testing_two]);

        let testing_heading = doc.find("## Testing Lead").unwrap();
        let lead_heading = doc.find("## Project Lead").unwrap();
        assert!(testing_heading < lead_heading);
        assert_eq!(doc.matches("## Testing Lead\n").count(), 1);

        let tess = doc.find("### Tess").unwrap();
        let tom = doc.find("### Tom").unwrap();
        assert!(tess < tom && tom < lead_heading);
    }

    #[test]
    fn test_example_roster_grouping() {
        let records = [
            Contributor::new("PacHashs", Category::ProjectLead),
            Contributor::new("Alex Chen", Category::CoreDeveloper),
            Contributor::new("Maria Garcia", Category::CoreDeveloper),
        ];
        let refs: Vec<&Contributor> = records.iter().collect();

        let groups = group_by_category(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::ProjectLead);
        assert_eq!(groups[1].0, Category::CoreDeveloper);
        let core: Vec<&str> = groups[1].1.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(core, vec!["Alex Chen", "Maria Garcia"]);

        let doc = ReportRenderer::default().render(&refs);
        assert!(doc.find("## Project Lead").unwrap() < doc.find("## Core Developer").unwrap());
        assert!(doc.find("### Alex Chen").unwrap() < doc.find("### Maria Garcia").unwrap());
    }

    #[test]
    fn test_export_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MAINTAINERS.md");

        export_report(&path, "# Team\n\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Team\n\n");
    }

    #[test]
    fn test_export_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("MAINTAINERS.md");

        let err = export_report(&path, "# Team\n\n").unwrap_err();
        match err {
            RosterError::WriteFailure { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
