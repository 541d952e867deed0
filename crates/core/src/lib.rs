//! Deck model, slide rendering, chart geometry, and navigation for
//! self-contained presentation documents.
//!
//! [`DeckRenderer::render`] turns a [`DeckDescription`] into a [`Document`]:
//! one HTML page with every slide, its charts as inline SVG, embedded
//! styling, and a navigation script that needs no further network fetch.

pub mod chart;
pub mod document;
pub mod error;
pub mod navigation;
pub mod normalize;
pub mod render;
pub mod script;
pub mod style;
pub mod theme;
pub mod types;

pub use document::Document;
pub use error::{Error, Result};
pub use navigation::{Command, Effect, NavEvent, NavigationConfig, NavigationController, NavigationState};
pub use normalize::TextNormalizer;
pub use render::DeckRenderer;
pub use theme::{Palette, Theme};
pub use types::{DataPoint, DeckDescription, ImageLayout, Metric, Segment, Series, Slide, SlideKind};
