//! shared constants

/// How close (in design units) a point must be to a segment's curve for
/// that segment to count as hovered.
pub const SEGMENT_SELECT_DISTANCE: f64 = 0.1;

/// How close a point must be to an anchor to pick it for deletion.
pub const ANCHOR_SELECT_DISTANCE: f64 = 0.05;

/// Accuracy used when measuring the distance from a point to a curve.
pub const NEAREST_ACCURACY: f64 = 1e-4;

/// The finest accuracy a nearest-point query will use; smaller (or
/// non-positive) requests are raised to this.
pub const MIN_NEAREST_ACCURACY: f64 = 1e-9;

pub const SVG_STROKE_WIDTH: f64 = 0.02;
pub const SVG_PADDING: f64 = 0.5;
pub const SVG_CURVE_COLOR: &str = "#2a9d4b";
pub const SVG_HANDLE_COLOR: &str = "#202020";
pub const SVG_ANCHOR_COLOR: &str = "#d33a2c";
pub const SVG_CONTROL_COLOR: &str = "#f5f5f5";
/// Radius of the markers drawn for anchor and control points.
pub const SVG_POINT_RADIUS: f64 = 0.06;
