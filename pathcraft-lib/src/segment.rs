//! Cubic segments, as seen by renderers and hit-testing.

use kurbo::{CubicBez, ParamCurve, ParamCurveNearest};

use super::consts;
use super::design_space::DPoint;
use super::point::loop_index;
use super::point_list::PathPoints;

/// One cubic bezier arc: start anchor, two control points, end anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// The segment's position in the path.
    pub index: usize,
    pub p0: DPoint,
    pub p1: DPoint,
    pub p2: DPoint,
    pub p3: DPoint,
}

/// The result of a nearest-segment query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub segment: usize,
    /// The curve parameter of the nearest point, in `0.0..=1.0`.
    pub t: f64,
    pub distance: f64,
}

/// An iterator over the segments in a path.
pub struct Segments<'a> {
    points: &'a PathPoints,
    idx: usize,
    count: usize,
}

impl Segment {
    pub(crate) fn from_points(points: &PathPoints, index: usize) -> Segment {
        let pts = points.as_slice();
        let start = index * 3;
        Segment {
            index,
            p0: pts[start],
            p1: pts[start + 1],
            p2: pts[start + 2],
            p3: pts[loop_index(start as isize + 3, pts.len())],
        }
    }

    /// The four points, in curve order.
    pub fn points(&self) -> [DPoint; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    pub fn to_kurbo(&self) -> CubicBez {
        CubicBez::new(
            self.p0.to_raw(),
            self.p1.to_raw(),
            self.p2.to_raw(),
            self.p3.to_raw(),
        )
    }

    /// The point on the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> DPoint {
        DPoint::from_raw(self.to_kurbo().eval(t))
    }

    /// The parameter and distance of the point on this curve closest to `pt`.
    ///
    /// `accuracy` is clamped to at least [`MIN_NEAREST_ACCURACY`]; a NaN
    /// accuracy is treated as that minimum.
    ///
    /// [`MIN_NEAREST_ACCURACY`]: crate::consts::MIN_NEAREST_ACCURACY
    pub fn nearest(&self, pt: DPoint, accuracy: f64) -> (f64, f64) {
        let accuracy = accuracy.max(consts::MIN_NEAREST_ACCURACY);
        let nearest = self.to_kurbo().nearest(pt.to_raw(), accuracy);
        (nearest.t, nearest.distance_sq.sqrt())
    }
}

impl<'a> Segments<'a> {
    pub(crate) fn new(points: &'a PathPoints) -> Self {
        Segments {
            points,
            idx: 0,
            count: points.segment_count(),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.idx >= self.count {
            return None;
        }
        let seg = Segment::from_points(self.points, self.idx);
        self.idx += 1;
        Some(seg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}
