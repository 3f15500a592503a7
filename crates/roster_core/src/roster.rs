//! The roster store: an ordered, read-only collection of contributors.

use std::sync::LazyLock;
use tracing::debug;

use crate::{Category, Contributor};

static BUILTIN: LazyLock<Roster> = LazyLock::new(|| Roster::new(bloodhorn_maintainers()));

/// Ordered sequence of contributor records.
///
/// Declaration order is preserved by every query. A roster is never mutated
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Contributor>,
}

impl Roster {
    /// Creates a roster from records in declaration order.
    pub fn new(records: Vec<Contributor>) -> Self {
        Self { records }
    }

    /// The embedded BloodHorn Bootloader maintainer roster.
    ///
    /// Built on first access and shared for the lifetime of the process.
    pub fn builtin() -> &'static Roster {
        &BUILTIN
    }

    pub fn records(&self) -> &[Contributor] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in `category`, or every record when `None`.
    ///
    /// An unmatched category yields an empty list.
    pub fn list(&self, category: Option<Category>) -> Vec<&Contributor> {
        let matched: Vec<&Contributor> = self
            .records
            .iter()
            .filter(|c| category.is_none_or(|wanted| c.category == wanted))
            .collect();

        debug!(
            "Listed {} of {} contributors (category: {:?})",
            matched.len(),
            self.records.len(),
            category
        );
        matched
    }

    /// Case-insensitive exact lookup by name; first match in roster order.
    pub fn find(&self, name: &str) -> Option<&Contributor> {
        let wanted = name.to_lowercase();
        let found = self
            .records
            .iter()
            .find(|c| c.name.to_lowercase() == wanted);

        debug!("Lookup for '{}' found: {}", name, found.is_some());
        found
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category);
            }
        }
        seen
    }
}

fn bloodhorn_maintainers() -> Vec<Contributor> {
    vec![
        Contributor::new("PacHashs", Category::ProjectLead)
            .github("PacHashs")
            .twitter("PacHashs")
            .email("pachashs@softwaresforall.eu.cc")
            .bio(
                "A seasoned systems programmer with over a decade of experience in low-level \
                 development. Leads the BloodHorn Bootloader project with a focus on security \
                 and performance.",
            ),
        Contributor::new("LinoxGuy", Category::CoFounder)
            .github("LinoxGuy")
            .twitter("LinoxGuy")
            .email("linoxguy@softwaresforall.eu.cc")
            .bio(
                "Founder of BloodyHell Industries, brings extensive experience in system \
                 architecture and open source development. Oversees the technical direction \
                 of all projects.",
            ),
        Contributor::new("UnpopularOpinion", Category::SecurityLead)
            .github("UnpopularOpinion")
            .email("unpopular.opinion@softwaresforall.eu.cc")
            .bio(
                "Security researcher and reverse engineer specializing in bootloader security \
                 and trusted computing. Ensures BloodHorn meets the highest security standards.",
            ),
        Contributor::new("Alex Chen", Category::CoreDeveloper)
            .github("AlexChen")
            .email("alex.chen@softwaresforall.eu.cc")
            .bio(
                "Firmware engineer with expertise in UEFI and Coreboot. Maintains the x86 and \
                 ARM64 ports of BloodHorn Bootloader.",
            ),
        Contributor::new("Maria Garcia", Category::CoreDeveloper)
            .github("MariaGarcia")
            .email("maria.garcia@softwaresforall.eu.cc")
            .bio(
                "Embedded systems specialist focusing on RISC-V architecture and secure boot \
                 implementations.",
            ),
        Contributor::new("James Wilson", Category::BuildMaintainer)
            .github("JamesWilson")
            .email("james.wilson@softwaresforall.eu.cc")
            .bio(
                "Build and release engineer ensuring smooth cross-platform compilation and \
                 packaging.",
            ),
        Contributor::new("Sarah Kim", Category::DocsLead)
            .github("SarahKim")
            .email("sarah.kim@softwaresforall.eu.cc")
            .bio(
                "Technical writer and community educator focusing on making BloodHorn \
                 accessible to all users.",
            ),
        Contributor::new("David Zhang", Category::TestingLead)
            .github("DavidZhang")
            .email("david.zhang@softwaresforall.eu.cc")
            .bio(
                "QA engineer ensuring the reliability and stability of BloodHorn across all \
                 supported platforms.",
            ),
        Contributor::new("Emma Martinez", Category::CommunityManager)
            .github("EmmaMartinez")
            .email("emma.martinez@softwaresforall.eu.cc")
            .bio(
                "Builds and nurtures the BloodHorn community, organizing events and managing \
                 communications.",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Roster {
        Roster::new(vec![
            Contributor::new("PacHashs", Category::ProjectLead),
            Contributor::new("Alex Chen", Category::CoreDeveloper),
            Contributor::new("Maria Garcia", Category::CoreDeveloper),
        ])
    }

    fn names(records: &[&Contributor]) -> Vec<String> {
        records.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_list_by_category_preserves_order() {
        let roster = sample();

        assert_eq!(
            names(&roster.list(Some(Category::CoreDeveloper))),
            vec!["Alex Chen", "Maria Garcia"]
        );
    }

    #[test]
    fn test_list_without_category_returns_everything() {
        let roster = Roster::builtin();
        let all = roster.list(None);

        assert_eq!(all.len(), roster.len());
        for (listed, original) in all.iter().zip(roster.records()) {
            assert_eq!(*listed, original);
        }
    }

    #[test]
    fn test_list_unmatched_category_is_empty() {
        assert!(sample().list(Some(Category::TestingLead)).is_empty());
    }

    #[test]
    fn test_list_every_category_only_returns_that_category() {
        let roster = Roster::builtin();
        for category in Category::ALL {
            let listed = roster.list(Some(category));
            assert!(listed.iter().all(|c| c.category == category));

            let expected: Vec<&Contributor> = roster
                .records()
                .iter()
                .filter(|c| c.category == category)
                .collect();
            assert_eq!(listed, expected);
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let roster = Roster::builtin();

        let lower = roster.find("pachashs").expect("lowercase lookup");
        let mixed = roster.find("PacHashs").expect("mixed-case lookup");
        assert_eq!(lower, mixed);
        assert_eq!(lower.category, Category::ProjectLead);
    }

    #[test]
    fn test_find_requires_exact_name() {
        let roster = Roster::builtin();

        assert!(roster.find("nonexistent").is_none());
        assert!(roster.find("Alex").is_none());
        assert!(roster.find("").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let roster = Roster::new(vec![
            Contributor::new("Dup", Category::DocsLead),
            Contributor::new("dup", Category::TestingLead),
        ]);

        assert_eq!(roster.find("DUP").unwrap().category, Category::DocsLead);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let roster = Roster::new(vec![
            Contributor::new("A", Category::TestingLead),
            Contributor::new("B", Category::ProjectLead),
            Contributor::new("C", Category::TestingLead),
        ]);

        assert_eq!(
            roster.categories(),
            vec![Category::TestingLead, Category::ProjectLead]
        );
    }

    #[test]
    fn test_builtin_roster_contents() {
        let roster = Roster::builtin();

        assert_eq!(roster.len(), 9);
        assert_eq!(roster.records()[0].name, "PacHashs");
        assert_eq!(roster.records()[8].name, "Emma Martinez");
        assert_eq!(roster.categories().len(), 8);

        let security = roster.find("UnpopularOpinion").unwrap();
        assert_eq!(security.twitter, None);
        assert!(security.bio.is_some());
    }
}
