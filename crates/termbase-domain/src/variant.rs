//! Document layout variants

use std::fmt;

/// The layout convention a glossary document follows
///
/// Variants are listed in detection precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// `### Term` entries with a bold `**Definition**:` field and no categories
    ProcessMgmt,
    /// `##`/`###` entries with bare `Key:` fields
    Unbolded,
    /// `## Section` headings grouping `### Term` entries with bold fields
    SectionGrouped,
    /// `## Term` entries with bold fields and `---` separators
    Standard,
}

impl Variant {
    /// Upper snake case tag used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::ProcessMgmt => "PROCESS_MGMT",
            Variant::Unbolded => "UNBOLDED",
            Variant::SectionGrouped => "SECTION_GROUPED",
            Variant::Standard => "STANDARD",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
