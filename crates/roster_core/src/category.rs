//! The closed set of contributor categories.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Role a contributor plays on the project.
///
/// The set is fixed at compile time. Each variant carries a human-readable
/// display name (used in console output and report headings) and a
/// kebab-case slug (used for serialization and as a CLI shorthand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Project lead, also a core developer
    ProjectLead,
    /// Co-founder, also a core developer
    CoFounder,
    /// Security lead, also a core developer
    SecurityLead,
    /// Core developer
    CoreDeveloper,
    /// Owner of the build system and releases
    BuildMaintainer,
    /// Documentation lead
    DocsLead,
    /// Testing lead
    TestingLead,
    /// Community manager
    CommunityManager,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::ProjectLead,
        Category::CoFounder,
        Category::SecurityLead,
        Category::CoreDeveloper,
        Category::BuildMaintainer,
        Category::DocsLead,
        Category::TestingLead,
        Category::CommunityManager,
    ];

    /// Human-readable role text.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::ProjectLead => "Project Lead & Core Developer",
            Category::CoFounder => "Co-Founder & Core Developer",
            Category::SecurityLead => "Security Lead & Core Developer",
            Category::CoreDeveloper => "Core Developer",
            Category::BuildMaintainer => "Build System Maintainer",
            Category::DocsLead => "Documentation Lead",
            Category::TestingLead => "Testing Lead",
            Category::CommunityManager => "Community Manager",
        }
    }

    /// Kebab-case identifier, matching the serde representation.
    pub fn slug(self) -> &'static str {
        match self {
            Category::ProjectLead => "project-lead",
            Category::CoFounder => "co-founder",
            Category::SecurityLead => "security-lead",
            Category::CoreDeveloper => "core-developer",
            Category::BuildMaintainer => "build-maintainer",
            Category::DocsLead => "docs-lead",
            Category::TestingLead => "testing-lead",
            Category::CommunityManager => "community-manager",
        }
    }

    /// Display names of all categories, for error messages.
    pub fn valid_values() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|c| c.display_name().to_string())
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = RosterError;

    /// Accepts either the display name or the slug, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.display_name().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| RosterError::InvalidCategory {
                value: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}
