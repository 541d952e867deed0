//! Pie chart layout.

use super::{ChartGeometry, LegendEntry, Margin, Primitive, PIE_SIZE};
use crate::theme::ChartColors;
use crate::types::Segment;

/// Angle of the first wedge's leading edge: 12 o'clock.
const START_ANGLE: f64 = -90.0;

const PIE_MARGIN: f64 = 10.0;

/// Lay out a pie chart.
///
/// Wedges run clockwise from 12 o'clock in segment order. Every segment gets
/// a legend entry with its share of the total; a zero total draws no wedges.
pub fn layout_pie_chart(segments: &[Segment], colors: ChartColors<'_>) -> Option<ChartGeometry> {
    if segments.is_empty() {
        return None;
    }

    let mut geometry = ChartGeometry::new(PIE_SIZE, PIE_SIZE, Margin::uniform(PIE_MARGIN));
    let cx = PIE_SIZE / 2.0;
    let cy = PIE_SIZE / 2.0;
    let r = PIE_SIZE / 2.0 - PIE_MARGIN;
    // Values near f64::MAX overflow the plain sum; scale by the largest
    // value in that case so shares stay finite.
    let mut scale = 1.0;
    let mut total: f64 = segments.iter().map(|s| s.value).sum();
    if total.is_infinite() {
        scale = segments.iter().map(|s| s.value).fold(0.0, f64::max);
        total = segments.iter().map(|s| s.value / scale).sum();
    }

    log::debug!(
        "pie chart: {} segments, total {} (scale {})",
        segments.len(),
        total,
        scale
    );

    let mut cursor = START_ANGLE;
    for (idx, segment) in segments.iter().enumerate() {
        let color = colors.color(idx);
        let share = if total > 0.0 {
            segment.value / scale / total
        } else {
            0.0
        };
        let percentage = format_percentage(share);

        geometry.legend.push(LegendEntry {
            label: segment.label.clone(),
            color: color.to_string(),
            detail: Some(percentage.clone()),
        });

        if share <= 0.0 {
            continue;
        }

        let tooltip = format!("{}: {}", segment.label, percentage);
        if share >= 1.0 {
            // An arc cannot start and end on the same point.
            geometry.primitives.push(Primitive::Circle {
                cx,
                cy,
                r,
                fill: color.to_string(),
                tooltip,
            });
            continue;
        }

        let sweep = share * 360.0;
        geometry.primitives.push(Primitive::Wedge {
            cx,
            cy,
            r,
            start_angle: cursor,
            end_angle: cursor + sweep,
            fill: color.to_string(),
            tooltip,
        });
        cursor += sweep;
    }

    Some(geometry)
}

/// Format a share in `[0, 1]` as a percentage with one decimal place.
pub fn format_percentage(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palette;

    fn layout(segments: &[Segment]) -> ChartGeometry {
        let palette = Palette::new(["red", "green", "blue"]);
        layout_pie_chart(segments, ChartColors::new(&palette, "black")).unwrap()
    }

    fn wedge_angles(geometry: &ChartGeometry) -> Vec<(f64, f64)> {
        geometry
            .wedges()
            .filter_map(|p| match p {
                Primitive::Wedge {
                    start_angle,
                    end_angle,
                    ..
                } => Some((*start_angle, *end_angle)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_legend_percentages() {
        let geometry = layout(&[Segment::new("A", 1.0), Segment::new("B", 3.0)]);
        let details: Vec<&str> = geometry
            .legend
            .iter()
            .filter_map(|e| e.detail.as_deref())
            .collect();
        assert_eq!(details, vec!["25.0%", "75.0%"]);
    }

    #[test]
    fn test_wedges_clockwise_from_twelve() {
        let geometry = layout(&[Segment::new("A", 1.0), Segment::new("B", 3.0)]);
        assert_eq!(wedge_angles(&geometry), vec![(-90.0, 0.0), (0.0, 270.0)]);
    }

    #[test]
    fn test_zero_total_draws_no_wedges() {
        let geometry = layout(&[Segment::new("X", 0.0)]);
        assert_eq!(geometry.wedges().count(), 0);
        assert!(geometry.primitives.is_empty());
        assert_eq!(geometry.legend[0].detail.as_deref(), Some("0.0%"));
    }

    #[test]
    fn test_zero_segment_skipped_among_others() {
        let geometry = layout(&[
            Segment::new("A", 1.0),
            Segment::new("Nothing", 0.0),
            Segment::new("B", 1.0),
        ]);
        assert_eq!(wedge_angles(&geometry), vec![(-90.0, 90.0), (90.0, 270.0)]);
        assert_eq!(geometry.legend.len(), 3);
        assert_eq!(geometry.legend[2].color, "blue");
    }

    #[test]
    fn test_single_full_segment_is_a_circle() {
        let geometry = layout(&[Segment::new("All", 7.0), Segment::new("None", 0.0)]);
        assert_eq!(geometry.wedges().count(), 0);
        assert!(matches!(
            geometry.primitives.as_slice(),
            [Primitive::Circle { r, .. }] if *r == 140.0
        ));
        assert_eq!(geometry.legend[0].detail.as_deref(), Some("100.0%"));
    }

    #[test]
    fn test_huge_values_keep_their_shares() {
        let geometry = layout(&[Segment::new("A", f64::MAX), Segment::new("B", f64::MAX)]);
        let details: Vec<&str> = geometry
            .legend
            .iter()
            .filter_map(|e| e.detail.as_deref())
            .collect();
        assert_eq!(details, vec!["50.0%", "50.0%"]);
        assert_eq!(wedge_angles(&geometry), vec![(-90.0, 90.0), (90.0, 270.0)]);
    }

    #[test]
    fn test_empty_segments_have_no_layout() {
        let palette = Palette::new(["red"]);
        assert!(layout_pie_chart(&[], ChartColors::new(&palette, "black")).is_none());
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.25), "25.0%");
        assert_eq!(format_percentage(1.0 / 3.0), "33.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }
}
