//! Embedded stylesheet.
//!
//! Theme tokens become CSS custom properties on `:root`; the structural
//! rules below only ever reference the properties.

use crate::theme::Theme;
use std::fmt::Write;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
html { scroll-snap-type: y mandatory; scroll-behavior: smooth; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}
h1, h2 { font-family: var(--font-heading); margin: 0 0 0.6em; line-height: 1.15; }
h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); }
h2 { font-size: clamp(1.75rem, 4vw, 3rem); }

.progress { position: fixed; top: 0; left: 0; right: 0; height: 4px; background: var(--surface); z-index: 20; }
.progress-bar { height: 100%; background: var(--accent); transition: width 0.3s ease; }
.counter {
  position: fixed; right: 24px; bottom: 20px; z-index: 20;
  font-size: 0.85rem; color: var(--muted); font-variant-numeric: tabular-nums;
}
.dots {
  position: fixed; right: 20px; top: 50%; transform: translateY(-50%); z-index: 20;
  display: flex; flex-direction: column; gap: 10px;
}
.dot {
  width: 10px; height: 10px; padding: 0; border: 0; border-radius: 50%;
  background: var(--muted); opacity: 0.4; cursor: pointer; transition: opacity 0.2s, transform 0.2s;
}
.dot.active { background: var(--accent); opacity: 1; transform: scale(1.3); }

.slide {
  position: relative; min-height: 100vh; scroll-snap-align: start;
  display: flex; align-items: center; justify-content: center;
  padding: 64px 8vw;
}
.slide-inner { width: 100%; max-width: 1100px; opacity: 0; transform: translateY(24px); }
.slide.is-visible .slide-inner { animation: slide-enter 0.6s ease forwards; }
@keyframes slide-enter { to { opacity: 1; transform: none; } }
.slide-ordinal { display: block; font-size: 0.85rem; letter-spacing: 0.2em; color: var(--accent); margin-bottom: 1rem; }

.slide-title { text-align: center; }
.slide-title .subtitle { font-size: 1.35rem; color: var(--muted); margin: 0.25em 0; }
.bullets { list-style: none; padding: 0; margin: 0; }
.bullets li { position: relative; padding-left: 1.5em; margin: 0.6em 0; font-size: 1.25rem; }
.bullets li::before { content: ""; position: absolute; left: 0; top: 0.6em; width: 0.5em; height: 0.5em; border-radius: 50%; background: var(--accent); }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 24px; }
.stat { background: var(--surface); border-radius: 12px; padding: 28px; }
.stat-number { display: block; font-family: var(--font-heading); font-size: 2.75rem; color: var(--accent); }
.stat-label { display: block; color: var(--muted); }
.quote { margin: 0; padding-left: 1.5em; border-left: 4px solid var(--accent); }
.quote p { font-family: var(--font-heading); font-size: clamp(1.5rem, 3.5vw, 2.5rem); margin: 0 0 0.75em; }
.quote cite { color: var(--muted); font-style: normal; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { text-align: left; padding: 12px 16px; border-bottom: 1px solid var(--surface); }
.data-table th { color: var(--accent); font-weight: 600; }
.chart { width: 100%; }
.chart-svg { width: 100%; height: auto; max-height: 60vh; }
.slide-pie-chart .chart-svg { max-width: 360px; display: block; margin: 0 auto; }
.chart-axis { stroke: var(--muted); stroke-width: 1; }
.chart-grid { stroke: var(--surface); stroke-width: 1; }
.chart-tick, .chart-category { fill: var(--muted); font-size: 11px; font-family: var(--font-body); }
.chart-legend { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-top: 16px; }
.legend-item { display: inline-flex; align-items: center; gap: 6px; }
.legend-swatch { width: 12px; height: 12px; border-radius: 3px; display: inline-block; }
.legend-value { color: var(--muted); }
.chart-empty, .no-data { padding: 48px; text-align: center; color: var(--muted); background: var(--surface); border-radius: 12px; }
.image-text { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.image-text.image-right .image { order: 2; }
.image-text img { width: 100%; border-radius: 12px; display: block; }
.image-placeholder { aspect-ratio: 4 / 3; background: var(--surface); border-radius: 12px; }
.watermark { text-align: center; padding: 16px; font-size: 0.8rem; color: var(--muted); }
.watermark a { color: inherit; }

@media (max-width: 720px) {
  .columns, .image-text { grid-template-columns: 1fr; }
  .dots { display: none; }
}

@page { size: landscape; margin: 0; }
@media print {
  html { scroll-snap-type: none; }
  .progress, .dots, .counter { display: none; }
  .slide { min-height: 100vh; page-break-after: always; break-after: page; }
  .slide-inner { opacity: 1; transform: none; animation: none; }
}
"#;

/// Build the document stylesheet for a theme and resolved accent colour.
pub fn stylesheet(theme: &Theme, accent: &str) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + 512);
    let _ = write!(
        css,
        ":root {{\n  --bg: {};\n  --surface: {};\n  --text: {};\n  --muted: {};\n  --accent: {};\n  --font-heading: {};\n  --font-body: {};\n}}",
        theme.background,
        theme.surface,
        theme.text,
        theme.muted_text,
        accent,
        theme.heading_font,
        theme.body_font
    );
    css.push_str(BASE_CSS);
    if !theme.extra_css.is_empty() {
        css.push_str(&theme.extra_css);
        css.push('\n');
    }
    css
}
