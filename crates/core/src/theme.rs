//! Theme descriptors.
//!
//! A theme carries the visual tokens the renderer interpolates into the
//! document: colours, chart palette, font stacks, and a few layout switches.
//! One renderer serves every theme.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered chart colours, indexed by series or segment position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }

    /// Colour for position `index`, cycling when the palette is shorter.
    ///
    /// Returns `None` only for an empty palette.
    pub fn color(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0[index % self.0.len()])
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Chart colours resolved against an accent, so lookups never come back empty.
#[derive(Debug, Clone, Copy)]
pub struct ChartColors<'a> {
    palette: &'a Palette,
    accent: &'a str,
}

impl<'a> ChartColors<'a> {
    pub fn new(palette: &'a Palette, accent: &'a str) -> Self {
        Self { palette, accent }
    }

    /// Colour for series or segment `index`. Falls back to the accent.
    pub fn color(&self, index: usize) -> &'a str {
        self.palette.color(index).unwrap_or(self.accent)
    }
}

/// A theme descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Preset name, or any label for custom themes.
    pub name: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted_text: String,
    /// Accent colour, overridden by a deck's `accentColor`.
    pub accent: String,
    pub palette: Palette,
    pub heading_font: String,
    pub body_font: String,
    /// Stylesheet link for web fonts. Navigation works without it.
    pub font_url: Option<String>,
    /// Render slide 0 with the title layout when it is a bullets slide.
    pub title_first_slide: bool,
    /// Show the `01`-style ordinal on each slide.
    pub show_ordinals: bool,
    /// Appended verbatim after the generated stylesheet.
    pub extra_css: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

const BUILTIN_NAMES: &[&str] = &["classic", "midnight", "minimal"];

impl Theme {
    /// Look up a built-in theme by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "midnight" => Ok(Self::midnight()),
            "minimal" => Ok(Self::minimal()),
            _ => Err(Error::UnknownTheme(name.to_string())),
        }
    }

    /// Names accepted by [`Theme::builtin`].
    pub fn builtin_names() -> &'static [&'static str] {
        BUILTIN_NAMES
    }

    /// Parse a theme from JSON. Missing fields take the classic theme's values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Light background, blue accent.
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f4f6fa".to_string(),
            text: "#111827".to_string(),
            muted_text: "#6b7280".to_string(),
            accent: "#2563eb".to_string(),
            palette: Palette::new(["#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4"]),
            heading_font: "\"Inter\", system-ui, -apple-system, sans-serif".to_string(),
            body_font: "\"Inter\", system-ui, -apple-system, sans-serif".to_string(),
            font_url: None,
            title_first_slide: false,
            show_ordinals: true,
            extra_css: String::new(),
        }
    }

    /// Dark background with a bright palette.
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            background: "#05090f".to_string(),
            surface: "#111a26".to_string(),
            text: "#e6edf7".to_string(),
            muted_text: "#7f8ba0".to_string(),
            accent: "#5cb0ff".to_string(),
            palette: Palette::new(["#5cb0ff", "#3fb68b", "#f7c843", "#f0635c", "#c084fc"]),
            heading_font: "\"Space Grotesk\", system-ui, sans-serif".to_string(),
            body_font: "\"Inter\", system-ui, sans-serif".to_string(),
            font_url: None,
            title_first_slide: true,
            show_ordinals: true,
            extra_css: String::new(),
        }
    }

    /// Monochrome, no ordinals.
    pub fn minimal() -> Self {
        Self {
            name: "minimal".to_string(),
            background: "#fafafa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#171717".to_string(),
            muted_text: "#737373".to_string(),
            accent: "#171717".to_string(),
            palette: Palette::new(["#171717", "#525252", "#a3a3a3"]),
            heading_font: "Georgia, \"Times New Roman\", serif".to_string(),
            body_font: "system-ui, sans-serif".to_string(),
            font_url: None,
            title_first_slide: false,
            show_ordinals: false,
            extra_css: String::new(),
        }
    }

    /// The accent to use for a deck: its own colour if given, else the theme's.
    pub fn resolve_accent<'a>(&'a self, deck_accent: &'a str) -> &'a str {
        if deck_accent.trim().is_empty() {
            &self.accent
        } else {
            deck_accent.trim()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::new(["red", "green"]);
        assert_eq!(palette.color(0), Some("red"));
        assert_eq!(palette.color(1), Some("green"));
        assert_eq!(palette.color(2), Some("red"));
        assert_eq!(palette.color(5), Some("green"));
    }

    #[test]
    fn test_empty_palette_falls_back_to_accent() {
        let palette = Palette::new(Vec::<String>::new());
        assert_eq!(palette.color(0), None);

        let colors = ChartColors::new(&palette, "#abcdef");
        assert_eq!(colors.color(3), "#abcdef");
    }

    #[test]
    fn test_builtin_lookup() {
        for name in Theme::builtin_names() {
            let theme = Theme::builtin(name).unwrap();
            assert_eq!(&theme.name, name);
            assert!(!theme.palette.is_empty());
        }
        assert_eq!(Theme::builtin("MIDNIGHT").unwrap().name, "midnight");
        assert!(matches!(
            Theme::builtin("neon"),
            Err(Error::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_theme_from_partial_json() {
        let theme = Theme::from_json(
            r##"{"name": "brand", "accent": "#ff0000", "palette": ["#ff0000", "#00ff00"], "titleFirstSlide": true}"##,
        )
        .unwrap();

        assert_eq!(theme.name, "brand");
        assert_eq!(theme.accent, "#ff0000");
        assert_eq!(theme.palette.len(), 2);
        assert!(theme.title_first_slide);
        // Unspecified fields come from the classic theme.
        assert_eq!(theme.background, Theme::classic().background);
    }

    #[test]
    fn test_resolve_accent() {
        let theme = Theme::classic();
        assert_eq!(theme.resolve_accent(""), "#2563eb");
        assert_eq!(theme.resolve_accent(" #123456 "), "#123456");
    }
}
