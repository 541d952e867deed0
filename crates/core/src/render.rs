//! Slide renderer.
//!
//! Maps each slide to a markup fragment by its layout type and wraps the
//! fragments in the document shell. Rendering is a pure function of the
//! deck and the renderer's configuration: no clock, no randomness, no I/O.
//!
//! Slide text is inserted as given. Content is trusted and is not escaped.

use crate::chart::{self, svg, ChartGeometry};
use crate::document::{self, Document, Watermark};
use crate::navigation::NavigationConfig;
use crate::normalize::{ordinal_label, TextNormalizer};
use crate::theme::{ChartColors, Theme};
use crate::types::{DeckDescription, ImageLayout, Metric, Slide, SlideKind};
use std::fmt::Write;

const NO_DATA: &str = "No data available";

const DEFAULT_WATERMARK_TEXT: &str = "Made with deck-render";

/// Compiles deck descriptions into standalone documents.
#[derive(Debug, Clone)]
pub struct DeckRenderer {
    theme: Theme,
    navigation: NavigationConfig,
    normalizer: TextNormalizer,
    watermark_text: String,
    watermark_url: Option<String>,
}

impl Default for DeckRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl DeckRenderer {
    /// Create a renderer for the given theme with default navigation settings.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            navigation: NavigationConfig::default(),
            normalizer: TextNormalizer::new(),
            watermark_text: DEFAULT_WATERMARK_TEXT.to_string(),
            watermark_url: None,
        }
    }

    /// Set the navigation thresholds baked into the document script.
    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    /// Set the watermark footer text.
    pub fn with_watermark_text(mut self, text: impl Into<String>) -> Self {
        self.watermark_text = text.into();
        self
    }

    /// Set the watermark footer link.
    pub fn with_watermark_url(mut self, url: impl Into<String>) -> Self {
        self.watermark_url = Some(url.into());
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    /// Render a deck into a document.
    ///
    /// Never fails. Malformed slides degrade to empty lists or "no data"
    /// placeholders without affecting the other slides.
    pub fn render(&self, deck: &DeckDescription) -> Document {
        let accent = self.theme.resolve_accent(&deck.accent_color);
        let colors = ChartColors::new(&self.theme.palette, accent);

        log::debug!(
            "rendering deck {:?}: {} slides, theme {}",
            deck.company_name,
            deck.slides.len(),
            self.theme.name
        );

        let fragments: Vec<String> = deck
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.render_slide(index, slide, colors))
            .collect();

        let watermark = deck.watermark.then(|| Watermark {
            text: &self.watermark_text,
            url: self.watermark_url.as_deref(),
        });

        document::assemble(document::Shell {
            title: &deck.company_name,
            theme: &self.theme,
            accent,
            navigation: &self.navigation,
            fragments: &fragments,
            watermark,
        })
    }

    /// Render one slide at position `index` into its fragment.
    pub fn render_slide(&self, index: usize, slide: &Slide, colors: ChartColors<'_>) -> String {
        let mut buf = String::with_capacity(1024);

        // Themes may promote a plain first slide to the title layout.
        let promote = index == 0
            && self.theme.title_first_slide
            && matches!(slide, Slide::Bullets { .. } | Slide::Fallback { .. });
        let kind = if promote { SlideKind::Title } else { slide.kind() };

        log::debug!("slide {}: {} layout", index, kind.as_str());

        self.open_section(&mut buf, index, kind);

        match slide {
            Slide::Title { title, content } => self.write_title(&mut buf, title, content),
            Slide::Bullets { title, content } if promote => {
                self.write_title(&mut buf, title, content)
            }
            Slide::Bullets { title, content } => {
                write_heading(&mut buf, title);
                self.write_list(&mut buf, content);
            }
            Slide::Fallback {
                declared_type,
                title,
                content,
            } => {
                match declared_type {
                    Some(declared) => log::warn!(
                        "slide {}: unrecognized type {:?}, rendering as bullets",
                        index,
                        declared
                    ),
                    None => log::debug!("slide {}: no type given, rendering as bullets", index),
                }
                if promote {
                    self.write_title(&mut buf, title, content);
                } else {
                    write_heading(&mut buf, title);
                    self.write_list(&mut buf, content);
                }
            }
            Slide::TwoColumn {
                title,
                left_column,
                right_column,
            } => {
                write_heading(&mut buf, title);
                buf.push_str("<div class=\"columns\"><div class=\"column\">");
                self.write_list(&mut buf, left_column);
                buf.push_str("</div><div class=\"column\">");
                self.write_list(&mut buf, right_column);
                buf.push_str("</div></div>");
            }
            Slide::Stats { title, metrics } => {
                write_heading(&mut buf, title);
                write_metrics(&mut buf, index, metrics);
            }
            Slide::Quote {
                title,
                quote,
                attribution,
            } => {
                write_heading(&mut buf, title);
                let _ = write!(buf, "<blockquote class=\"quote\"><p>\u{201c}{}\u{201d}</p>", quote.trim());
                if !attribution.trim().is_empty() {
                    let _ = write!(buf, "<cite>{}</cite>", attribution.trim());
                }
                buf.push_str("</blockquote>");
            }
            Slide::Table { title, rows } => {
                write_heading(&mut buf, title);
                write_table(&mut buf, index, rows);
            }
            Slide::BarChart { title, series } => {
                write_heading(&mut buf, title);
                write_chart(&mut buf, index, "bar", title, chart::layout_bar_chart(series, colors));
            }
            Slide::LineChart { title, series } => {
                write_heading(&mut buf, title);
                write_chart(&mut buf, index, "line", title, chart::layout_line_chart(series, colors));
            }
            Slide::PieChart { title, segments } => {
                write_heading(&mut buf, title);
                write_chart(&mut buf, index, "pie", title, chart::layout_pie_chart(segments, colors));
            }
            Slide::ImageText {
                title,
                image_url,
                description,
                layout,
            } => self.write_image_text(&mut buf, title, image_url, description, *layout),
        }

        buf.push_str("</div>\n</section>\n");
        buf
    }

    fn open_section(&self, buf: &mut String, index: usize, kind: SlideKind) {
        let _ = write!(
            buf,
            "<section class=\"slide slide-{}\" id=\"slide-{}\" data-index=\"{}\">\n<div class=\"slide-inner\">",
            kind.as_str(),
            index,
            index
        );
        if self.theme.show_ordinals {
            let _ = write!(buf, "<span class=\"slide-ordinal\">{}</span>", ordinal_label(index));
        }
    }

    fn write_title(&self, buf: &mut String, title: &str, content: &str) {
        let _ = write!(buf, "<h1>{}</h1>", title.trim());
        for line in self.normalizer.normalize_to_lines(content) {
            let _ = write!(buf, "<p class=\"subtitle\">{}</p>", line);
        }
    }

    fn write_list(&self, buf: &mut String, content: &str) {
        buf.push_str("<ul class=\"bullets\">");
        for line in self.normalizer.normalize_to_lines(content) {
            let _ = write!(buf, "<li>{}</li>", line);
        }
        buf.push_str("</ul>");
    }

    fn write_image_text(
        &self,
        buf: &mut String,
        title: &str,
        image_url: &str,
        description: &str,
        layout: ImageLayout,
    ) {
        let _ = write!(buf, "<div class=\"image-text {}\"><div class=\"image\">", layout.as_str());
        if image_url.trim().is_empty() {
            buf.push_str("<div class=\"image-placeholder\"></div>");
        } else {
            let _ = write!(buf, "<img src=\"{}\" alt=\"{}\">", image_url.trim(), title.trim());
        }
        buf.push_str("</div><div class=\"text\">");
        write_heading(buf, title);
        for line in self.normalizer.normalize_to_lines(description) {
            let _ = write!(buf, "<p>{}</p>", line);
        }
        buf.push_str("</div></div>");
    }
}

fn write_heading(buf: &mut String, title: &str) {
    let title = title.trim();
    if !title.is_empty() {
        let _ = write!(buf, "<h2>{}</h2>", title);
    }
}

fn write_no_data(buf: &mut String, class: &str) {
    let _ = write!(buf, "<div class=\"{}\">{}</div>", class, NO_DATA);
}

fn write_metrics(buf: &mut String, index: usize, metrics: &[Metric]) {
    if metrics.is_empty() {
        log::warn!("slide {}: stats slide without metrics", index);
        write_no_data(buf, "no-data");
        return;
    }

    buf.push_str("<div class=\"stats-grid\">");
    for metric in metrics {
        let _ = write!(
            buf,
            "<div class=\"stat\"><span class=\"stat-number\">{}</span><span class=\"stat-label\">{}</span></div>",
            metric.number.trim(),
            metric.label.trim()
        );
    }
    buf.push_str("</div>");
}

fn write_table(buf: &mut String, index: usize, rows: &[Vec<String>]) {
    let Some((header, body)) = rows.split_first() else {
        log::warn!("slide {}: table without rows", index);
        write_no_data(buf, "no-data");
        return;
    };

    buf.push_str("<table class=\"data-table\"><thead><tr>");
    for cell in header {
        let _ = write!(buf, "<th>{}</th>", cell.trim());
    }
    buf.push_str("</tr></thead><tbody>");
    for row in body {
        buf.push_str("<tr>");
        for cell in row {
            let _ = write!(buf, "<td>{}</td>", cell.trim());
        }
        buf.push_str("</tr>");
    }
    buf.push_str("</tbody></table>");
}

fn write_chart(
    buf: &mut String,
    index: usize,
    variant: &str,
    title: &str,
    geometry: Option<ChartGeometry>,
) {
    let Some(geometry) = geometry else {
        log::warn!("slide {}: {} chart without data", index, variant);
        write_no_data(buf, "chart-empty");
        return;
    };

    let _ = write!(buf, "<div class=\"chart chart-{}\">", variant);
    svg::write_svg(buf, &geometry, title.trim());
    svg::write_legend(buf, &geometry.legend);
    buf.push_str("</div>");
}
