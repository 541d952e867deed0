//! Document shell: the standalone page around the slide fragments.

use crate::chart::svg::fmt_num;
use crate::navigation::{progress_percent, NavigationConfig};
use crate::script::navigation_script;
use crate::style::stylesheet;
use crate::theme::Theme;
use std::fmt::{self, Write};

/// A finished, self-contained document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
    slide_count: usize,
}

impl Document {
    /// The document text.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Number of slide fragments in the document.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl From<Document> for String {
    fn from(document: Document) -> Self {
        document.html
    }
}

/// Promotional footer contents.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Watermark<'a> {
    pub text: &'a str,
    pub url: Option<&'a str>,
}

/// Everything the shell needs besides the fragments themselves.
pub(crate) struct Shell<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub accent: &'a str,
    pub navigation: &'a NavigationConfig,
    pub fragments: &'a [String],
    pub watermark: Option<Watermark<'a>>,
}

/// Wrap rendered fragments in the document shell.
pub(crate) fn assemble(shell: Shell<'_>) -> Document {
    let count = shell.fragments.len();
    let title = if shell.title.trim().is_empty() {
        "Presentation"
    } else {
        shell.title.trim()
    };

    let body_len: usize = shell.fragments.iter().map(String::len).sum();
    let mut html = String::with_capacity(body_len + 16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", title);
    if let Some(url) = shell.theme.font_url.as_deref() {
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", url);
    }
    let _ = writeln!(
        html,
        "<style>\n{}</style>",
        stylesheet(shell.theme, shell.accent)
    );
    html.push_str("</head>\n<body>\n");

    write_scaffold(&mut html, count);

    html.push_str("<main class=\"deck\" id=\"deck\">\n");
    for fragment in shell.fragments {
        html.push_str(fragment);
    }
    html.push_str("</main>\n");

    if let Some(watermark) = shell.watermark {
        html.push_str("<footer class=\"watermark\">");
        match watermark.url {
            Some(url) => {
                let _ = write!(html, "<a href=\"{}\">{}</a>", url, watermark.text);
            }
            None => html.push_str(watermark.text),
        }
        html.push_str("</footer>\n");
    }

    let _ = writeln!(
        html,
        "<script>\n{}\n</script>",
        navigation_script(shell.navigation)
    );
    html.push_str("</body>\n</html>\n");

    Document {
        html,
        slide_count: count,
    }
}

/// Progress bar, counter, and one dot per slide, in their slide-0 state.
fn write_scaffold(html: &mut String, count: usize) {
    let _ = writeln!(
        html,
        "<div class=\"progress\" aria-hidden=\"true\"><div class=\"progress-bar\" id=\"progress-bar\" style=\"width: {}%\"></div></div>",
        fmt_num(progress_percent(0, count))
    );
    let _ = writeln!(
        html,
        "<div class=\"counter\" id=\"slide-counter\"><span id=\"counter-current\">{}</span> / <span id=\"counter-total\">{}</span></div>",
        count.min(1),
        count
    );

    html.push_str("<nav class=\"dots\" id=\"slide-dots\" aria-label=\"Slides\">");
    for index in 0..count {
        let active = index == 0;
        let _ = write!(
            html,
            "<button class=\"dot{}\" type=\"button\" data-index=\"{}\" aria-label=\"Go to slide {}\" aria-current=\"{}\"></button>",
            if active { " active" } else { "" },
            index,
            index + 1,
            active
        );
    }
    html.push_str("</nav>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell<'a>(theme: &'a Theme, nav: &'a NavigationConfig, fragments: &'a [String]) -> Shell<'a> {
        Shell {
            title: "Acme",
            theme,
            accent: "#123456",
            navigation: nav,
            fragments,
            watermark: None,
        }
    }

    #[test]
    fn test_scaffold_for_three_slides() {
        let theme = Theme::classic();
        let nav = NavigationConfig::default();
        let fragments = vec!["<section>a</section>".to_string(); 3];

        let doc = assemble(shell(&theme, &nav, &fragments));
        let html = doc.as_str();

        assert_eq!(doc.slide_count(), 3);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains("style=\"width: 33.33%\""));
        assert!(html.contains("<span id=\"counter-current\">1</span> / <span id=\"counter-total\">3</span>"));
        assert_eq!(html.matches("class=\"dot").count(), 3);
        assert_eq!(html.matches("class=\"dot active\"").count(), 1);
        assert!(html.contains("data-index=\"2\" aria-label=\"Go to slide 3\""));
        assert!(html.contains("--accent: #123456;"));
        assert!(html.contains("<script>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_no_external_fetch_without_font_url() {
        let theme = Theme::classic();
        let nav = NavigationConfig::default();
        let fragments = vec!["x".to_string()];

        let html = assemble(shell(&theme, &nav, &fragments)).into_string();
        assert!(!html.contains("<link"));
        assert!(!html.contains("src=\"http"));

        let mut themed = Theme::classic();
        themed.font_url = Some("https://fonts.example/inter.css".to_string());
        let html = assemble(shell(&themed, &nav, &fragments)).into_string();
        assert!(html.contains("<link rel=\"stylesheet\" href=\"https://fonts.example/inter.css\">"));
    }

    #[test]
    fn test_watermark_variants() {
        let theme = Theme::classic();
        let nav = NavigationConfig::default();
        let fragments = vec!["x".to_string()];

        let mut plain = shell(&theme, &nav, &fragments);
        plain.watermark = Some(Watermark {
            text: "Made here",
            url: None,
        });
        let html = assemble(plain).into_string();
        assert!(html.contains("<footer class=\"watermark\">Made here</footer>"));

        let mut linked = shell(&theme, &nav, &fragments);
        linked.watermark = Some(Watermark {
            text: "Made here",
            url: Some("https://example.com"),
        });
        let html = assemble(linked).into_string();
        assert!(html.contains("<a href=\"https://example.com\">Made here</a>"));

        let html = assemble(shell(&theme, &nav, &fragments)).into_string();
        assert!(!html.contains("class=\"watermark\""));
    }

    #[test]
    fn test_empty_title_and_no_slides() {
        let theme = Theme::classic();
        let nav = NavigationConfig::default();

        let mut empty = shell(&theme, &nav, &[]);
        empty.title = "  ";
        let doc = assemble(empty);

        assert_eq!(doc.slide_count(), 0);
        assert!(doc.as_str().contains("<title>Presentation</title>"));
        assert!(doc.as_str().contains("style=\"width: 0%\""));
        assert!(doc.as_str().contains("<span id=\"counter-current\">0</span>"));
    }
}
