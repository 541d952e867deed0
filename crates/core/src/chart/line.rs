//! Multi-series line chart layout.
//!
//! The x axis is ordinal: distinct x values are spaced evenly in first-seen
//! order, whatever their numeric distance. `2019, 2020, 2024` are drawn one
//! step apart each. Existing decks rely on these proportions, so the axis
//! stays ordinal.

use super::{
    distinct_labels, max_value, ChartGeometry, LegendEntry, Margin, Point, Primitive,
    CANVAS_HEIGHT, CANVAS_WIDTH, POINT_RADIUS,
};
use crate::theme::ChartColors;
use crate::types::Series;
use std::collections::HashMap;

/// Lay out a line chart: one polyline per series plus a marker per point.
pub fn layout_line_chart(series: &[Series], colors: ChartColors<'_>) -> Option<ChartGeometry> {
    let positions = distinct_labels(series);
    if positions.is_empty() {
        return None;
    }

    let mut geometry = ChartGeometry::new(CANVAS_WIDTH, CANVAS_HEIGHT, Margin::CARTESIAN);
    let max_y = max_value(series);
    let left = geometry.margin.left;
    let plot_width = geometry.plot_width();
    let baseline = geometry.baseline();

    // A single position has no spacing; centre it.
    let step = if positions.len() > 1 {
        plot_width / (positions.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |idx: usize| {
        if positions.len() > 1 {
            left + idx as f64 * step
        } else {
            left + plot_width / 2.0
        }
    };

    log::debug!(
        "line chart: {} series, {} x positions, max {}",
        series.len(),
        positions.len(),
        max_y
    );

    geometry.push_value_axis(max_y);

    let slots: HashMap<&str, usize> = positions
        .iter()
        .enumerate()
        .map(|(idx, label)| (*label, idx))
        .collect();

    for (series_idx, s) in series.iter().enumerate() {
        let color = colors.color(series_idx);
        let points: Vec<(Point, &str, f64)> = s
            .data
            .iter()
            .filter_map(|point| {
                let idx = *slots.get(point.label.as_str())?;
                let y = baseline - geometry.scaled_height(point.value, max_y);
                Some((Point { x: x_at(idx), y }, point.label.as_str(), point.value))
            })
            .collect();

        if points.len() > 1 {
            geometry.primitives.push(Primitive::Polyline {
                points: points.iter().map(|(p, _, _)| *p).collect(),
                stroke: color.to_string(),
            });
        }

        for (p, label, value) in &points {
            geometry.primitives.push(Primitive::Circle {
                cx: p.x,
                cy: p.y,
                r: POINT_RADIUS,
                fill: color.to_string(),
                tooltip: format!("{} · {}: {}", s.name, label, super::svg::fmt_num(*value)),
            });
        }

        geometry.legend.push(LegendEntry {
            label: s.name.clone(),
            color: color.to_string(),
            detail: None,
        });
    }

    for (idx, label) in positions.iter().enumerate() {
        geometry.push_category_label(x_at(idx), label);
    }

    Some(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palette;
    use crate::types::DataPoint;

    fn layout(series: &[Series]) -> ChartGeometry {
        let palette = Palette::new(["red", "green"]);
        layout_line_chart(series, ChartColors::new(&palette, "blue")).unwrap()
    }

    fn circles(geometry: &ChartGeometry) -> Vec<(f64, f64)> {
        geometry
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ordinal_x_spacing() {
        let series = vec![Series::new(
            "Users",
            vec![
                DataPoint::new("2019", 10.0),
                DataPoint::new("2020", 20.0),
                DataPoint::new("2024", 40.0),
            ],
        )];

        let geometry = layout(&series);
        let xs: Vec<f64> = circles(&geometry).iter().map(|(x, _)| *x).collect();

        // Even spacing across 530 units, regardless of the gap between 2020 and 2024.
        assert_eq!(xs, vec![50.0, 315.0, 580.0]);
    }

    #[test]
    fn test_y_scales_against_max() {
        let series = vec![Series::new(
            "A",
            vec![DataPoint::new("a", 0.0), DataPoint::new("b", 40.0), DataPoint::new("c", 20.0)],
        )];

        let geometry = layout(&series);
        let ys: Vec<f64> = circles(&geometry).iter().map(|(_, y)| *y).collect();
        assert_eq!(ys, vec![260.0, 20.0, 140.0]);
    }

    #[test]
    fn test_single_point_series_is_centered() {
        let series = vec![Series::new("A", vec![DataPoint::new("Only", 5.0)])];

        let geometry = layout(&series);
        assert_eq!(circles(&geometry), vec![(315.0, 20.0)]);
        assert!(!geometry
            .primitives
            .iter()
            .any(|p| matches!(p, Primitive::Polyline { .. })));
    }

    #[test]
    fn test_all_zero_values_sit_on_baseline() {
        let series = vec![Series::new(
            "A",
            vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)],
        )];

        let geometry = layout(&series);
        for (_, y) in circles(&geometry) {
            assert_eq!(y, geometry.baseline());
        }
    }

    #[test]
    fn test_polyline_per_series() {
        let series = vec![
            Series::new("A", vec![DataPoint::new("x1", 1.0), DataPoint::new("x2", 2.0)]),
            Series::new("B", vec![DataPoint::new("x2", 3.0), DataPoint::new("x3", 1.0)]),
        ];

        let geometry = layout(&series);
        let strokes: Vec<&str> = geometry
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Polyline { stroke, .. } => Some(stroke.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(strokes, vec!["red", "green"]);
        assert_eq!(geometry.legend.len(), 2);
    }

    #[test]
    fn test_empty_input_has_no_layout() {
        let palette = Palette::new(["red"]);
        assert!(layout_line_chart(&[], ChartColors::new(&palette, "blue")).is_none());
    }
}
