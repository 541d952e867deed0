//! Grouped bar chart layout.

use super::{
    distinct_labels, max_value, ChartGeometry, LegendEntry, Margin, Primitive, CANVAS_HEIGHT,
    CANVAS_WIDTH, MIN_BAR_WIDTH,
};
use crate::theme::ChartColors;
use crate::types::Series;
use std::collections::HashMap;

/// Lay out a grouped bar chart.
///
/// Categories are the distinct point labels in first-seen order. Each
/// category gets an equal group width; series sit side by side inside the
/// group in series order. Heights scale linearly against the largest value.
pub fn layout_bar_chart(series: &[Series], colors: ChartColors<'_>) -> Option<ChartGeometry> {
    let categories = distinct_labels(series);
    if categories.is_empty() {
        return None;
    }

    let mut geometry = ChartGeometry::new(CANVAS_WIDTH, CANVAS_HEIGHT, Margin::CARTESIAN);
    let max_val = max_value(series);
    let group_width = geometry.plot_width() / categories.len() as f64;
    let bar_width = (group_width / series.len() as f64).max(MIN_BAR_WIDTH);
    let baseline = geometry.baseline();

    log::debug!(
        "bar chart: {} series, {} categories, max {}",
        series.len(),
        categories.len(),
        max_val
    );

    geometry.push_value_axis(max_val);

    let slots: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(idx, label)| (*label, idx))
        .collect();

    for (series_idx, s) in series.iter().enumerate() {
        let color = colors.color(series_idx);
        for point in &s.data {
            let Some(&category_idx) = slots.get(point.label.as_str()) else {
                continue;
            };
            let height = geometry.scaled_height(point.value, max_val);
            let x = geometry.margin.left
                + category_idx as f64 * group_width
                + series_idx as f64 * bar_width;

            geometry.primitives.push(Primitive::Rect {
                x,
                y: baseline - height,
                width: bar_width,
                height,
                fill: color.to_string(),
                tooltip: format!("{} · {}: {}", s.name, point.label, super::svg::fmt_num(point.value)),
            });
        }

        geometry.legend.push(LegendEntry {
            label: s.name.clone(),
            color: color.to_string(),
            detail: None,
        });
    }

    for (idx, label) in categories.iter().enumerate() {
        let center = geometry.margin.left + (idx as f64 + 0.5) * group_width;
        geometry.push_category_label(center, label);
    }

    Some(geometry)
}
