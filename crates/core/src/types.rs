//! Domain types for deck descriptions.
//!
//! Slides are read leniently: a slide record with missing or mistyped fields
//! still becomes a [`Slide`], degrading to empty text or an empty data list
//! rather than rejecting the whole deck.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The top-level input: a company's deck, in presentation order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDescription {
    /// Display label used for the document title.
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: String,

    /// Accent colour token. Overrides the theme accent when non-empty.
    #[serde(default, deserialize_with = "lenient_text")]
    pub accent_color: String,

    /// Slides in presentation order. Never reordered by the renderer.
    #[serde(default, deserialize_with = "lenient_slides")]
    pub slides: Vec<Slide>,

    /// Whether to append the promotional footer.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub watermark: bool,
}

impl DeckDescription {
    /// Create an empty deck for the given company.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }

    /// Set the accent colour.
    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }

    /// Set whether the watermark footer is emitted.
    pub fn with_watermark(mut self, watermark: bool) -> Self {
        self.watermark = watermark;
        self
    }

    /// Append a slide.
    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    /// Parse a single deck from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse JSON text holding either one deck object or an array of decks.
    ///
    /// Only unparsable text fails as a whole. Each deck of an array is read
    /// on its own, so one malformed entry leaves the others usable.
    pub fn from_json_batch(json: &str) -> Result<Vec<Result<Self>>> {
        let value: Value = serde_json::from_str(json)?;
        let items = match value {
            Value::Array(items) => items,
            other => vec![other],
        };
        Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect())
    }

    /// Check the deck invariants: a non-empty company name and at least one slide.
    ///
    /// The renderer accepts decks that fail this check; callers decide whether
    /// a violation is worth reporting.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(Error::InvalidDeck("companyName is empty".to_string()));
        }
        if self.slides.is_empty() {
            return Err(Error::InvalidDeck("deck has no slides".to_string()));
        }
        Ok(())
    }
}

/// One unit of presentation content, tagged by layout type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Slide {
    Title {
        title: String,
        content: String,
    },
    Bullets {
        title: String,
        content: String,
    },
    TwoColumn {
        title: String,
        left_column: String,
        right_column: String,
    },
    Stats {
        title: String,
        metrics: Vec<Metric>,
    },
    Quote {
        title: String,
        quote: String,
        attribution: String,
    },
    Table {
        title: String,
        /// Row 0 is the header.
        rows: Vec<Vec<String>>,
    },
    BarChart {
        title: String,
        series: Vec<Series>,
    },
    LineChart {
        title: String,
        series: Vec<Series>,
    },
    PieChart {
        title: String,
        segments: Vec<Segment>,
    },
    ImageText {
        title: String,
        image_url: String,
        description: String,
        layout: ImageLayout,
    },
    /// A slide whose type was missing or unrecognized. Rendered as bullets.
    Fallback {
        declared_type: Option<String>,
        title: String,
        content: String,
    },
}

impl Slide {
    fn empty_fallback() -> Self {
        Slide::Fallback {
            declared_type: None,
            title: String::new(),
            content: String::new(),
        }
    }

    /// The layout this slide is rendered with.
    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Title { .. } => SlideKind::Title,
            Slide::Bullets { .. } | Slide::Fallback { .. } => SlideKind::Bullets,
            Slide::TwoColumn { .. } => SlideKind::TwoColumn,
            Slide::Stats { .. } => SlideKind::Stats,
            Slide::Quote { .. } => SlideKind::Quote,
            Slide::Table { .. } => SlideKind::Table,
            Slide::BarChart { .. } => SlideKind::BarChart,
            Slide::LineChart { .. } => SlideKind::LineChart,
            Slide::PieChart { .. } => SlideKind::PieChart,
            Slide::ImageText { .. } => SlideKind::ImageText,
        }
    }

    /// The slide heading, empty if none was given.
    pub fn title(&self) -> &str {
        match self {
            Slide::Title { title, .. }
            | Slide::Bullets { title, .. }
            | Slide::TwoColumn { title, .. }
            | Slide::Stats { title, .. }
            | Slide::Quote { title, .. }
            | Slide::Table { title, .. }
            | Slide::BarChart { title, .. }
            | Slide::LineChart { title, .. }
            | Slide::PieChart { title, .. }
            | Slide::ImageText { title, .. }
            | Slide::Fallback { title, .. } => title,
        }
    }
}

/// Layout types, as named in deck descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Bullets,
    TwoColumn,
    Stats,
    Quote,
    Table,
    BarChart,
    LineChart,
    PieChart,
    ImageText,
}

impl SlideKind {
    /// Parse a `type` string. Returns `None` for anything unrecognized.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.trim() {
            "title" => Some(Self::Title),
            "bullets" => Some(Self::Bullets),
            "two-column" => Some(Self::TwoColumn),
            "stats" => Some(Self::Stats),
            "quote" => Some(Self::Quote),
            "table" => Some(Self::Table),
            "bar-chart" => Some(Self::BarChart),
            "line-chart" => Some(Self::LineChart),
            "pie-chart" => Some(Self::PieChart),
            "image-text" => Some(Self::ImageText),
            _ => None,
        }
    }

    /// The `type` string, also used as the fragment's CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Bullets => "bullets",
            Self::TwoColumn => "two-column",
            Self::Stats => "stats",
            Self::Quote => "quote",
            Self::Table => "table",
            Self::BarChart => "bar-chart",
            Self::LineChart => "line-chart",
            Self::PieChart => "pie-chart",
            Self::ImageText => "image-text",
        }
    }
}

/// Which side of an image-text slide the image sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageLayout {
    #[default]
    ImageLeft,
    ImageRight,
}

impl ImageLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageLeft => "image-left",
            Self::ImageRight => "image-right",
        }
    }
}

/// A headline figure on a stats slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub number: String,
    pub label: String,
}

/// A named numeric series for bar and line charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// One point of a series: a category (or x) label and a non-negative value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: sanitize_magnitude(value),
        }
    }
}

/// A labelled share of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: sanitize_magnitude(value),
        }
    }
}

/// Raw slide record as it appears in the input, before dispatch on `type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SlideRecord {
    #[serde(rename = "type")]
    kind: Value,
    title: Value,
    content: Value,
    left_column: Value,
    right_column: Value,
    metrics: Value,
    quote: Value,
    attribution: Value,
    table_data: Value,
    series: Value,
    segments: Value,
    image_url: Value,
    description: Value,
    layout: Value,
}

impl From<Value> for Slide {
    fn from(value: Value) -> Self {
        if !value.is_object() {
            log::warn!("slide entry is not an object ({}), rendering as empty bullets", value);
            return Slide::empty_fallback();
        }
        match serde_json::from_value::<SlideRecord>(value) {
            Ok(record) => Slide::from(record),
            Err(e) => {
                log::warn!("unreadable slide entry: {}", e);
                Slide::empty_fallback()
            }
        }
    }
}

impl From<SlideRecord> for Slide {
    fn from(record: SlideRecord) -> Self {
        let title = read_text(&record.title);
        let declared = read_text(&record.kind);

        let Some(kind) = SlideKind::from_type_name(&declared) else {
            let declared = declared.trim();
            return Slide::Fallback {
                declared_type: (!declared.is_empty()).then(|| declared.to_string()),
                title,
                content: read_text(&record.content),
            };
        };

        match kind {
            SlideKind::Title => Slide::Title {
                title,
                content: read_text(&record.content),
            },
            SlideKind::Bullets => Slide::Bullets {
                title,
                content: read_text(&record.content),
            },
            SlideKind::TwoColumn => Slide::TwoColumn {
                title,
                left_column: read_text(&record.left_column),
                right_column: read_text(&record.right_column),
            },
            SlideKind::Stats => Slide::Stats {
                title,
                metrics: read_metrics(&record.metrics),
            },
            SlideKind::Quote => Slide::Quote {
                title,
                quote: read_text(&record.quote),
                attribution: read_text(&record.attribution),
            },
            SlideKind::Table => Slide::Table {
                title,
                rows: read_rows(&record.table_data),
            },
            SlideKind::BarChart => Slide::BarChart {
                title,
                series: read_series(&record.series),
            },
            SlideKind::LineChart => Slide::LineChart {
                title,
                series: read_series(&record.series),
            },
            SlideKind::PieChart => Slide::PieChart {
                title,
                segments: read_segments(&record.segments),
            },
            SlideKind::ImageText => Slide::ImageText {
                title,
                image_url: read_text(&record.image_url),
                description: read_text(&record.description),
                layout: match read_text(&record.layout).trim() {
                    "image-right" => ImageLayout::ImageRight,
                    _ => ImageLayout::ImageLeft,
                },
            },
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| read_text(&value))
}

/// `true`, or the string `"true"`. Anything else reads as `false`.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Every array entry becomes a slide; a non-array reads as no slides.
fn lenient_slides<'de, D>(deserializer: D) -> std::result::Result<Vec<Slide>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(Slide::from).collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("slides is not an array ({}), reading no slides", other);
            Vec::new()
        }
    })
}

/// Read a text field. Arrays of lines are joined with newlines.
fn read_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_label(n),
        Value::Array(items) => items
            .iter()
            .map(read_text)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

/// Shortest display form of a JSON number (`2020`, not `2020.0`).
fn number_label(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        n.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/// Read a numeric magnitude. Numbers and numeric strings are accepted.
fn read_magnitude(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    sanitize_magnitude(raw)
}

fn sanitize_magnitude(value: f64) -> f64 {
    if value.is_finite() {
        value.abs()
    } else {
        0.0
    }
}

/// The first present, non-null field among `keys`.
fn field<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|v| !v.is_null())
}

fn read_metrics(value: &Value) -> Vec<Metric> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| Metric {
            number: field(item, &["number"]).map(read_text).unwrap_or_default(),
            label: field(item, &["label"]).map(read_text).unwrap_or_default(),
        })
        .collect()
}

fn read_rows(value: &Value) -> Vec<Vec<String>> {
    let Value::Array(rows) = value else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| match row {
            Value::Array(cells) => Some(cells.iter().map(read_text).collect()),
            _ => None,
        })
        .collect()
}

fn read_series(value: &Value) -> Vec<Series> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .enumerate()
        .map(|(idx, item)| {
            let name = field(item, &["name"]).map(read_text).unwrap_or_default();
            let name = if name.trim().is_empty() {
                format!("Series {}", idx + 1)
            } else {
                name
            };

            let data = match field(item, &["data"]) {
                Some(Value::Array(points)) => points
                    .iter()
                    .filter(|p| p.is_object())
                    .map(|p| DataPoint {
                        label: field(p, &["label", "x"]).map(read_text).unwrap_or_default(),
                        value: read_magnitude(field(p, &["value", "y"])),
                    })
                    .collect(),
                _ => Vec::new(),
            };

            Series { name, data }
        })
        .collect()
}

fn read_segments(value: &Value) -> Vec<Segment> {
    let Value::Array(items) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| Segment {
            label: field(item, &["label"]).map(read_text).unwrap_or_default(),
            value: read_magnitude(field(item, &["value"])),
        })
        .collect()
}
