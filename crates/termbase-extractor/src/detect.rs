//! Format detection
//!
//! Detection is a priority list, not a classifier: the first rule in
//! [`DETECTION_RULES`] that matches decides the variant, and documents no rule
//! matches are [`Variant::Standard`].

use crate::config::ExtractorConfig;
use crate::frontmatter::content_start;
use crate::line::heading;
use termbase_domain::Variant;

/// The first lines of a document's content, as seen by detection rules
#[derive(Debug, Clone, Copy)]
pub struct DetectionWindow<'a> {
    /// Window lines, frontmatter already skipped
    pub lines: &'a [&'a str],
    /// Extractor settings (heading blocklist)
    pub config: &'a ExtractorConfig,
}

impl<'a> DetectionWindow<'a> {
    /// Window over `lines` starting after frontmatter
    pub fn new(lines: &'a [&'a str], config: &'a ExtractorConfig) -> Self {
        let start = content_start(lines);
        let end = start.saturating_add(config.detection_window).min(lines.len());
        Self {
            lines: &lines[start..end],
            config,
        }
    }

    fn any_line_starts_with(&self, prefix: &str) -> bool {
        self.lines.iter().any(|l| l.trim().starts_with(prefix))
    }
}

/// A structural signal that identifies one variant
pub type DetectionRule = fn(&DetectionWindow<'_>) -> bool;

/// Detection rules in precedence order
pub const DETECTION_RULES: [(Variant, DetectionRule); 3] = [
    (Variant::ProcessMgmt, has_definition_field),
    (Variant::Unbolded, has_only_bare_categories),
    (Variant::SectionGrouped, has_grouped_sections),
];

fn has_definition_field(window: &DetectionWindow<'_>) -> bool {
    window.lines.iter().any(|l| l.contains("**Definition**:"))
}

fn has_only_bare_categories(window: &DetectionWindow<'_>) -> bool {
    window.any_line_starts_with("Categories:") && !window.any_line_starts_with("**Categories**:")
}

fn has_grouped_sections(window: &DetectionWindow<'_>) -> bool {
    if !window.any_line_starts_with("**Categories**:") {
        return false;
    }
    let mut in_section = false;
    for h in window.lines.iter().filter_map(|l| heading(l)) {
        match h.level {
            2 if !window.config.is_blocklisted(h.text) => in_section = true,
            3 if in_section => return true,
            _ => {}
        }
    }
    false
}

/// Apply the rule table to a window
pub fn classify(window: &DetectionWindow<'_>) -> Variant {
    DETECTION_RULES
        .iter()
        .find(|(_, rule)| rule(window))
        .map(|(variant, _)| *variant)
        .unwrap_or(Variant::Standard)
}

/// Detect the variant of a whole document
pub fn detect(lines: &[&str], config: &ExtractorConfig) -> Variant {
    classify(&DetectionWindow::new(lines, config))
}
