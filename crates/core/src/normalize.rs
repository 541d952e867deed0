//! Text normalization for slide content.
//!
//! Slide text arrives as newline-delimited line lists. Each line is trimmed,
//! empty lines are dropped, and a leading bullet marker is stripped. Markup
//! significant characters are left alone: slide content is trusted.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a leading `-` or `•` marker and the whitespace after it.
static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•]\s*").unwrap());

/// Line normalizer for slide content.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Whether to strip leading bullet markers.
    strip_markers: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            strip_markers: true,
        }
    }
}

impl TextNormalizer {
    /// Create a normalizer that strips bullet markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to strip leading bullet markers.
    pub fn with_strip_markers(mut self, strip: bool) -> Self {
        self.strip_markers = strip;
        self
    }

    /// Normalize a single line: trim it and strip a leading bullet marker.
    pub fn normalize_line(&self, line: &str) -> String {
        let trimmed = line.trim();
        if self.strip_markers {
            BULLET_MARKER_REGEX.replace(trimmed, "").into_owned()
        } else {
            trimmed.to_string()
        }
    }

    /// Split text into normalized, non-empty lines.
    ///
    /// Handles `\n`, `\r\n`, and bare `\r` line endings.
    pub fn normalize_to_lines(&self, text: &str) -> Vec<String> {
        text.split(&['\n', '\r'][..])
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.normalize_line(line))
            .collect()
    }
}

/// Zero-padded, one-based ordinal label for a slide index (`0` gives `"01"`).
pub fn ordinal_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_dash_marker() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_line("- Revenue grew 40%"), "Revenue grew 40%");
    }

    #[test]
    fn test_strip_bullet_marker() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_line("• Launch in Q3"), "Launch in Q3");
        assert_eq!(normalizer.normalize_line("•Launch"), "Launch");
    }

    #[test]
    fn test_only_leading_marker_stripped() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_line("- Year-over-year - up"), "Year-over-year - up");
        assert_eq!(normalizer.normalize_line("--double"), "-double");
    }

    #[test]
    fn test_keep_markers_when_disabled() {
        let normalizer = TextNormalizer::new().with_strip_markers(false);
        assert_eq!(normalizer.normalize_line("  - item  "), "- item");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let normalizer = TextNormalizer::new();
        let lines = normalizer.normalize_to_lines("- First\n\n   \n- Second");
        assert_eq!(lines, vec!["First", "Second"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let normalizer = TextNormalizer::new();
        let lines = normalizer.normalize_to_lines("One\r\nTwo\rThree");
        assert_eq!(lines, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_marker_only_line_is_kept_empty() {
        // The line is not blank before stripping, so it survives as an empty item.
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_to_lines("-"), vec![""]);
    }

    #[test]
    fn test_markup_not_escaped() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_line("<b>bold</b> & co"), "<b>bold</b> & co");
    }

    #[test]
    fn test_ordinal_label() {
        assert_eq!(ordinal_label(0), "01");
        assert_eq!(ordinal_label(8), "09");
        assert_eq!(ordinal_label(11), "12");
        assert_eq!(ordinal_label(99), "100");
    }
}
