//! # Roster Core
//!
//! Contributor roster store and report renderer for the BloodHorn Bootloader
//! maintainers tool.
//!
//! ## Key Concepts
//!
//! - **Roster**: the ordered, immutable collection of all contributor records
//! - **Category**: the closed classification of a contributor's role
//! - **Report**: the grouped Markdown document rendered from a roster view
//!
//! ## Example
//!
//! ```rust
//! use roster_core::{Category, ReportRenderer, Roster};
//!
//! let roster = Roster::builtin();
//! let core_devs = roster.list(Some(Category::CoreDeveloper));
//! assert_eq!(core_devs.len(), 2);
//!
//! let doc = ReportRenderer::default().render(&roster.list(None));
//! assert!(doc.contains("## Core Developer"));
//! ```

pub mod category;
pub mod contributor;
pub mod error;
pub mod report;
pub mod roster;

pub use category::*;
pub use contributor::*;
pub use error::*;
pub use report::*;
pub use roster::*;
