//! SVG and legend markup for chart geometry.
//!
//! All writers append to a `&mut String`. Coordinates are written with at
//! most two decimals and no trailing zeros, so output is stable across runs.

use super::{Anchor, ChartGeometry, LegendEntry, Point, Primitive, Role};
use std::fmt::Write;

/// Write a number with at most two decimals and no trailing zeros.
#[inline]
pub fn write_num(buf: &mut String, n: f64) {
    if n.fract() == 0.0 && n.abs() < 1e10 {
        let _ = write!(buf, "{}", n as i64);
        return;
    }

    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e10 {
        let _ = write!(buf, "{}", rounded as i64);
        return;
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format(rounded);
    if s.contains('.') && !s.contains('e') {
        buf.push_str(s.trim_end_matches('0').trim_end_matches('.'));
    } else {
        buf.push_str(s);
    }
}

/// Format a number the way [`write_num`] writes it.
#[inline]
pub fn fmt_num(n: f64) -> String {
    let mut s = String::with_capacity(16);
    write_num(&mut s, n);
    s
}

/// Point on a circle of radius `r` around `(cx, cy)` at `angle` degrees.
///
/// Angles grow clockwise because SVG's y axis points down.
pub fn polar_point(cx: f64, cy: f64, r: f64, angle: f64) -> Point {
    let radians = angle.to_radians();
    Point {
        x: cx + r * radians.cos(),
        y: cy + r * radians.sin(),
    }
}

/// Whether a wedge spanning these angles needs the SVG large-arc flag.
pub fn is_large_arc(start_angle: f64, end_angle: f64) -> bool {
    end_angle - start_angle > 180.0
}

/// Path data for a pie wedge: centre, out to the arc start, arc, close.
pub fn wedge_path(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let start = polar_point(cx, cy, r, start_angle);
    let end = polar_point(cx, cy, r, end_angle);
    let large_arc = if is_large_arc(start_angle, end_angle) { 1 } else { 0 };

    let mut d = String::with_capacity(64);
    d.push('M');
    write_num(&mut d, cx);
    d.push(' ');
    write_num(&mut d, cy);
    d.push_str(" L");
    write_num(&mut d, start.x);
    d.push(' ');
    write_num(&mut d, start.y);
    d.push_str(" A");
    write_num(&mut d, r);
    d.push(' ');
    write_num(&mut d, r);
    let _ = write!(d, " 0 {} 1 ", large_arc);
    write_num(&mut d, end.x);
    d.push(' ');
    write_num(&mut d, end.y);
    d.push_str(" Z");
    d
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::Axis => "chart-axis",
        Role::Grid => "chart-grid",
        Role::Tick => "chart-tick",
        Role::Category => "chart-category",
    }
}

/// Write a `name="value"` attribute with a numeric value.
fn write_attr(buf: &mut String, name: &str, value: f64) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    write_num(buf, value);
    buf.push('"');
}

fn write_primitive(buf: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
            tooltip,
        } => {
            buf.push_str("<rect class=\"chart-bar\"");
            write_attr(buf, "x", *x);
            write_attr(buf, "y", *y);
            write_attr(buf, "width", *width);
            write_attr(buf, "height", *height);
            let _ = write!(buf, " fill=\"{}\"><title>{}</title></rect>", fill, tooltip);
        }
        Primitive::Polyline { points, stroke } => {
            buf.push_str("<polyline class=\"chart-line\" points=\"");
            for (idx, point) in points.iter().enumerate() {
                if idx > 0 {
                    buf.push(' ');
                }
                write_num(buf, point.x);
                buf.push(',');
                write_num(buf, point.y);
            }
            let _ = write!(
                buf,
                "\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\" stroke-linejoin=\"round\"/>",
                stroke
            );
        }
        Primitive::Circle {
            cx,
            cy,
            r,
            fill,
            tooltip,
        } => {
            buf.push_str("<circle class=\"chart-point\"");
            write_attr(buf, "cx", *cx);
            write_attr(buf, "cy", *cy);
            write_attr(buf, "r", *r);
            let _ = write!(buf, " fill=\"{}\"><title>{}</title></circle>", fill, tooltip);
        }
        Primitive::Wedge {
            cx,
            cy,
            r,
            start_angle,
            end_angle,
            fill,
            tooltip,
        } => {
            let _ = write!(
                buf,
                "<path class=\"chart-wedge\" d=\"{}\" fill=\"{}\"><title>{}</title></path>",
                wedge_path(*cx, *cy, *r, *start_angle, *end_angle),
                fill,
                tooltip
            );
        }
        Primitive::Line { from, to, role } => {
            let _ = write!(buf, "<line class=\"{}\"", role_class(*role));
            write_attr(buf, "x1", from.x);
            write_attr(buf, "y1", from.y);
            write_attr(buf, "x2", to.x);
            write_attr(buf, "y2", to.y);
            buf.push_str("/>");
        }
        Primitive::Text {
            at,
            content,
            anchor,
            role,
        } => {
            let _ = write!(buf, "<text class=\"{}\"", role_class(*role));
            write_attr(buf, "x", at.x);
            write_attr(buf, "y", at.y);
            let _ = write!(
                buf,
                " text-anchor=\"{}\">{}</text>",
                anchor_attr(*anchor),
                content
            );
        }
    }
}

/// Write the geometry as an inline `<svg>` element.
pub fn write_svg(buf: &mut String, geometry: &ChartGeometry, label: &str) {
    buf.push_str("<svg class=\"chart-svg\" viewBox=\"0 0 ");
    write_num(buf, geometry.width);
    buf.push(' ');
    write_num(buf, geometry.height);
    let _ = write!(
        buf,
        "\" preserveAspectRatio=\"xMidYMid meet\" role=\"img\" aria-label=\"{}\">",
        label
    );
    for primitive in &geometry.primitives {
        write_primitive(buf, primitive);
    }
    buf.push_str("</svg>");
}

/// Write the legend as HTML: one swatch, label, and optional value per entry.
pub fn write_legend(buf: &mut String, legend: &[LegendEntry]) {
    if legend.is_empty() {
        return;
    }

    buf.push_str("<div class=\"chart-legend\">");
    for entry in legend {
        let _ = write!(
            buf,
            "<span class=\"legend-item\"><span class=\"legend-swatch\" style=\"background:{}\"></span><span class=\"legend-label\">{}</span>",
            entry.color, entry.label
        );
        if let Some(detail) = &entry.detail {
            let _ = write!(buf, "<span class=\"legend-value\">{}</span>", detail);
        }
        buf.push_str("</span>");
    }
    buf.push_str("</div>");
}
