//! Chart geometry engine.
//!
//! Converts series and segment data into drawing primitives on a fixed
//! logical canvas. Geometry is computed per chart slide and dropped once
//! the fragment is written; nothing here is cached.
//!
//! Every layout returns `None` when there is nothing to draw, which the
//! renderer turns into a "no data" placeholder.

mod bar;
mod line;
mod pie;
pub mod svg;

pub use bar::layout_bar_chart;
pub use line::layout_line_chart;
pub use pie::{format_percentage, layout_pie_chart};

use crate::types::Series;
use std::collections::HashSet;

/// Logical canvas width for bar and line charts.
pub const CANVAS_WIDTH: f64 = 600.0;

/// Logical canvas height for bar and line charts.
pub const CANVAS_HEIGHT: f64 = 300.0;

/// Logical canvas size (both dimensions) for pie charts.
pub const PIE_SIZE: f64 = 300.0;

/// Narrowest bar, regardless of how many series share a group.
pub const MIN_BAR_WIDTH: f64 = 10.0;

/// Number of horizontal grid lines above the baseline.
pub const GRID_LINES: usize = 4;

/// Radius of the point markers on line charts.
pub const POINT_RADIUS: f64 = 4.0;

/// Space between the canvas edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Margin box for bar and line charts. Leaves room for tick and category labels.
    pub const CARTESIAN: Margin = Margin {
        top: 20.0,
        right: 20.0,
        bottom: 40.0,
        left: 50.0,
    };

    pub const fn uniform(size: f64) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Horizontal text alignment, as SVG `text-anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// What a line or text primitive is for. Maps to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Axis,
    Grid,
    Tick,
    Category,
}

/// A single drawing instruction in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        tooltip: String,
    },
    Polyline {
        points: Vec<Point>,
        stroke: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        tooltip: String,
    },
    /// A pie wedge. Angles are in degrees, clockwise from 3 o'clock.
    Wedge {
        cx: f64,
        cy: f64,
        r: f64,
        start_angle: f64,
        end_angle: f64,
        fill: String,
        tooltip: String,
    },
    Line {
        from: Point,
        to: Point,
        role: Role,
    },
    Text {
        at: Point,
        content: String,
        anchor: Anchor,
        role: Role,
    },
}

/// One legend row: a coloured swatch, a label, and an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub detail: Option<String>,
}

/// Output of a layout: canvas, margin box, primitives, and legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub primitives: Vec<Primitive>,
    pub legend: Vec<LegendEntry>,
}

impl ChartGeometry {
    pub(crate) fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
            primitives: Vec::new(),
            legend: Vec::new(),
        }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Y coordinate of the value baseline.
    pub fn baseline(&self) -> f64 {
        self.margin.top + self.plot_height()
    }

    /// Scale a value against `max` into a height within the plot area.
    ///
    /// A zero maximum yields zero height for every value.
    pub(crate) fn scaled_height(&self, value: f64, max: f64) -> f64 {
        if max > 0.0 {
            (value / max) * self.plot_height()
        } else {
            0.0
        }
    }

    /// Draw the axes, grid lines, and value ticks for a cartesian chart.
    pub(crate) fn push_value_axis(&mut self, max: f64) {
        let left = self.margin.left;
        let right = left + self.plot_width();
        let top = self.margin.top;
        let baseline = self.baseline();

        // Grid lines are meaningless without a positive maximum.
        let steps = if max > 0.0 { GRID_LINES } else { 0 };
        for step in 0..=steps {
            let fraction = step as f64 / GRID_LINES as f64;
            let y = baseline - fraction * self.plot_height();
            if step > 0 {
                self.primitives.push(Primitive::Line {
                    from: Point { x: left, y },
                    to: Point { x: right, y },
                    role: Role::Grid,
                });
            }
            self.primitives.push(Primitive::Text {
                at: Point { x: left - 8.0, y: y + 4.0 },
                content: svg::fmt_num(max * fraction),
                anchor: Anchor::End,
                role: Role::Tick,
            });
        }

        self.primitives.push(Primitive::Line {
            from: Point { x: left, y: top },
            to: Point { x: left, y: baseline },
            role: Role::Axis,
        });
        self.primitives.push(Primitive::Line {
            from: Point { x: left, y: baseline },
            to: Point { x: right, y: baseline },
            role: Role::Axis,
        });
    }

    /// Label a category below the baseline.
    pub(crate) fn push_category_label(&mut self, x: f64, label: &str) {
        let y = self.baseline() + 20.0;
        self.primitives.push(Primitive::Text {
            at: Point { x, y },
            content: label.to_string(),
            anchor: Anchor::Middle,
            role: Role::Category,
        });
    }

    /// Bars in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Rect { .. }))
    }

    /// Pie wedges in drawing order.
    pub fn wedges(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Wedge { .. }))
    }
}

/// Distinct point labels across all series, in first-seen order.
pub(crate) fn distinct_labels(series: &[Series]) -> Vec<&str> {
    let mut seen = HashSet::new();
    series
        .iter()
        .flat_map(|s| s.data.iter())
        .map(|point| point.label.as_str())
        .filter(|label| seen.insert(*label))
        .collect()
}

/// Largest value across all series, or 0 when there are none.
pub(crate) fn max_value(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.data.iter())
        .map(|point| point.value)
        .fold(0.0, f64::max)
}
