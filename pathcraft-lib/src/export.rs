//! Rendering a path to SVG.
//!
//! This is the same picture an interactive editor draws: the curve itself,
//! a line from each anchor to its control points, and a marker for every
//! point.

use std::io;

use kurbo::{PathEl, Rect, Shape};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path as SvgPath};
use svg::Document;

use crate::consts;
use crate::design_space::DPoint;
use crate::path::Path;
use crate::point::is_anchor;
use crate::settings::EditorSettings;

/// The region of design space covered by the path and all of its handles.
pub fn bounds(path: &Path) -> Rect {
    let bez = path.to_bezpath();
    path.points()
        .iter()
        .fold(bez.bounding_box(), |rect, pt| rect.union_pt(pt.to_raw()))
}

/// Build an SVG document showing `path`.
///
/// Design space is y-up, so the drawing is flipped to read the right way
/// up in SVG's y-down space.
pub fn svg_document(path: &Path, settings: &EditorSettings) -> Document {
    let bbox = bounds(path).inflate(settings.svg_padding, settings.svg_padding);

    let mut group = Group::new().set("transform", "scale(1 -1)");
    group = group.add(curve(path, settings));

    for seg in path.iter_segments() {
        group = group
            .add(handle_line(seg.p0, seg.p1, settings))
            .add(handle_line(seg.p3, seg.p2, settings));
    }

    for (idx, pt) in path.points().iter().enumerate() {
        let color = if is_anchor(idx) {
            consts::SVG_ANCHOR_COLOR
        } else {
            consts::SVG_CONTROL_COLOR
        };
        let marker = Circle::new()
            .set("cx", pt.x)
            .set("cy", pt.y)
            .set("r", settings.svg_point_radius)
            .set("fill", color)
            .set("stroke", consts::SVG_HANDLE_COLOR)
            .set("stroke-width", settings.svg_stroke_width * 0.5);
        group = group.add(marker);
    }

    Document::new()
        .set(
            "viewBox",
            (bbox.x0, -bbox.y1, bbox.width(), bbox.height()),
        )
        .add(group)
}

/// Write `path` as SVG to `writer`.
pub fn write_svg(
    path: &Path,
    settings: &EditorSettings,
    writer: impl io::Write,
) -> io::Result<()> {
    svg::write(writer, &svg_document(path, settings))
}

/// The SVG for `path`, as bytes.
pub fn make_svg_data(path: &Path, settings: &EditorSettings) -> Option<Vec<u8>> {
    let mut data = Vec::new();
    if let Err(e) = write_svg(path, settings, &mut data) {
        log::warn!("error writing svg data: '{}'", e);
        None
    } else {
        Some(data)
    }
}

fn curve(path: &Path, settings: &EditorSettings) -> SvgPath {
    let mut data = Data::new();
    for element in path.to_bezpath().elements() {
        data = match element {
            PathEl::MoveTo(p) => data.move_to((p.x, p.y)),
            PathEl::LineTo(p) => data.line_to((p.x, p.y)),
            PathEl::QuadTo(p1, p2) => data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y)),
            PathEl::CurveTo(p1, p2, p3) => {
                data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y))
            }
            PathEl::ClosePath => data.close(),
        };
    }

    SvgPath::new()
        .set("fill", "none")
        .set("stroke", consts::SVG_CURVE_COLOR)
        .set("stroke-width", settings.svg_stroke_width)
        .set("d", data)
}

fn handle_line(anchor: DPoint, control: DPoint, settings: &EditorSettings) -> Line {
    Line::new()
        .set("x1", anchor.x)
        .set("y1", anchor.y)
        .set("x2", control.x)
        .set("y2", control.y)
        .set("stroke", consts::SVG_HANDLE_COLOR)
        .set("stroke-width", settings.svg_stroke_width * 0.5)
}
