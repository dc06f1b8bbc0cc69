use std::convert::TryFrom;

use kurbo::BezPath;

use super::auto_control;
use super::design_space::{DPoint, DVec2};
use super::error::PathError;
use super::point::{is_anchor, Handle, PointKind};
use super::point_list::PathPoints;
use super::segment::{Segment, SegmentHit, Segments};

/// The fewest segments a closed path may be reduced to by deletion.
const MIN_CLOSED_SEGMENTS: usize = 3;
/// The fewest segments an open path may be reduced to by deletion.
const MIN_OPEN_SEGMENTS: usize = 2;

/// A chain of cubic bezier segments, editable in place.
///
/// The points are stored as a single flat list: indices divisible by three
/// are anchors, and the two points between consecutive anchors are the
/// control points of the segment joining them. An open path has `4 + 3k`
/// points. A closed path has two more: the control points of the implicit
/// segment running from the last anchor back to the first.
///
/// All edits preserve that layout. Edits that would break it are either
/// rejected with a [`PathError`] (bad indices) or refused as a no-op
/// (shrinking a path below its minimum size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathData", into = "PathData")]
pub struct Path {
    points: PathPoints,
    auto_set_control_points: bool,
}

/// The plain data behind a [`Path`], as handed to and from a host for
/// snapshots and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub points: Vec<DPoint>,
    pub closed: bool,
    #[serde(default)]
    pub auto_set_control_points: bool,
}

impl Path {
    /// A single open segment, arcing from one unit left of `center` to one
    /// unit right of it.
    pub fn new(center: impl Into<DPoint>) -> Path {
        let center = center.into();
        let left = DVec2::new(-1.0, 0.0);
        let right = DVec2::new(1.0, 0.0);
        let up = DVec2::new(0.0, 1.0);
        let down = DVec2::new(0.0, -1.0);
        let points = vec![
            center + left,
            center + (left + up) * 0.5,
            center + (right + down) * 0.5,
            center + right,
        ];
        Path {
            points: PathPoints::from_raw_parts(points, false),
            auto_set_control_points: false,
        }
    }

    /// Rebuild a path from raw points, such as a host snapshot.
    ///
    /// The points are taken as-is: even with `auto_set_control_points` set,
    /// no control points are recomputed.
    pub fn from_raw_parts(
        points: Vec<DPoint>,
        closed: bool,
        auto_set_control_points: bool,
    ) -> Result<Path, PathError> {
        if !PathPoints::valid_len(points.len(), closed) {
            return Err(PathError::InvalidPointCount {
                len: points.len(),
                closed,
            });
        }
        Ok(Path {
            points: PathPoints::from_raw_parts(points, closed),
            auto_set_control_points,
        })
    }

    pub fn to_data(&self) -> PathData {
        PathData {
            points: self.points.as_slice().to_owned(),
            closed: self.is_closed(),
            auto_set_control_points: self.auto_set_control_points,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        self.points.segment_count()
    }

    pub fn points(&self) -> &[DPoint] {
        self.points.as_slice()
    }

    pub fn point(&self, idx: usize) -> Result<DPoint, PathError> {
        self.points.get(idx).ok_or(PathError::IndexOutOfRange {
            index: idx,
            len: self.point_count(),
        })
    }

    /// `true` if the point at `idx` is (or would be) an anchor.
    pub fn is_anchor(&self, idx: usize) -> bool {
        is_anchor(idx)
    }

    pub fn point_kind(&self, idx: usize) -> Result<PointKind, PathError> {
        self.point(idx).map(|_| PointKind::for_index(idx))
    }

    pub fn is_closed(&self) -> bool {
        self.points.closed()
    }

    pub fn auto_set_control_points(&self) -> bool {
        self.auto_set_control_points
    }

    /// The start anchor, both control points, and end anchor of a segment.
    pub fn segment_points(&self, segment: usize) -> Result<[DPoint; 4], PathError> {
        self.segment(segment).map(|seg| seg.points())
    }

    pub fn segment(&self, segment: usize) -> Result<Segment, PathError> {
        self.check_segment(segment)?;
        Ok(Segment::from_points(&self.points, segment))
    }

    pub fn iter_segments(&self) -> Segments {
        Segments::new(&self.points)
    }

    /// Append a segment ending at `anchor_pos` to an open path.
    ///
    /// The new segment leaves the current end anchor along the reflection of
    /// its incoming handle, so the join is smooth.
    pub fn add_segment(&mut self, anchor_pos: impl Into<DPoint>) -> Result<(), PathError> {
        if self.is_closed() {
            return Err(PathError::ClosedPath);
        }
        let anchor_pos = anchor_pos.into();
        let pts = self.points.as_slice();
        let last = pts[pts.len() - 1];
        let last2 = pts[pts.len() - 2];

        let ctrl1 = last.reflect(last2);
        let ctrl2 = ctrl1.midpoint(anchor_pos);
        self.points
            .points_mut()
            .extend_from_slice(&[ctrl1, ctrl2, anchor_pos]);

        self.after_topology_change();
        Ok(())
    }

    /// Insert a new anchor at `anchor_pos` within `segment`.
    ///
    /// The handles of the new anchor and of its two neighbouring anchors are
    /// placed automatically, whether or not auto mode is on.
    pub fn split_segment(
        &mut self,
        anchor_pos: impl Into<DPoint>,
        segment: usize,
    ) -> Result<(), PathError> {
        self.check_segment(segment)?;
        let insert_idx = segment * 3 + 2;
        self.points.points_mut().splice(
            insert_idx..insert_idx,
            [DPoint::ZERO, anchor_pos.into(), DPoint::ZERO].iter().copied(),
        );
        auto_control::set_affected(&mut self.points, insert_idx + 1);
        Ok(())
    }

    /// Remove the anchor at `anchor_idx` and its control points.
    ///
    /// Returns `Ok(false)` without changing anything if the path is already
    /// as small as it is allowed to get: three segments when closed, two
    /// when open.
    pub fn delete_segment(&mut self, anchor_idx: usize) -> Result<bool, PathError> {
        self.check_anchor(anchor_idx)?;
        let min_segments = if self.is_closed() {
            MIN_CLOSED_SEGMENTS
        } else {
            MIN_OPEN_SEGMENTS
        };
        if self.segment_count() <= min_segments {
            log::debug!(
                "refusing to delete anchor {}: path has only {} segments",
                anchor_idx,
                self.segment_count()
            );
            return Ok(false);
        }

        let closed = self.is_closed();
        let last_idx = self.point_count() - 1;
        let pts = self.points.points_mut();
        if anchor_idx == 0 {
            // the first anchor's incoming handle lives in the last slot;
            // hand it the next anchor's incoming handle before that goes.
            if closed {
                pts[last_idx] = pts[2];
            }
            pts.drain(0..3);
        } else if anchor_idx == last_idx && !closed {
            pts.drain(anchor_idx - 2..=anchor_idx);
        } else {
            pts.drain(anchor_idx - 1..=anchor_idx + 1);
        }

        self.after_topology_change();
        Ok(true)
    }

    /// Move the point at `idx` to `new_pos`, carrying linked points along.
    ///
    /// Moving an anchor moves both of its control points by the same amount.
    /// Moving a control point swings the control point on the other side of
    /// its anchor so the two stay collinear through the anchor, keeping that
    /// other point's distance from the anchor.
    ///
    /// In auto mode control points cannot be moved by hand, and moving an
    /// anchor recomputes the handles around it.
    pub fn move_point(&mut self, idx: usize, new_pos: impl Into<DPoint>) -> Result<(), PathError> {
        let old_pos = self.point(idx)?;
        let new_pos = new_pos.into();
        let handle = Handle::for_control(idx);

        if handle.is_some() && self.auto_set_control_points {
            log::debug!("ignoring drag of control point {} in auto mode", idx);
            return Ok(());
        }

        let delta = new_pos - old_pos;
        let mut cursor = self.points.cursor();
        cursor.set(idx as isize, new_pos);

        match handle {
            None => {
                let anchor = idx as isize;
                cursor.update(anchor - 1, |pt| *pt += delta);
                cursor.update(anchor + 1, |pt| *pt += delta);
                if self.auto_set_control_points {
                    auto_control::set_affected(&mut self.points, idx);
                }
            }
            Some(Handle { anchor, mirror }) => {
                if let (Some(anchor_pos), Some(mirror_pos)) =
                    (cursor.get(anchor), cursor.get(mirror))
                {
                    let dir = (anchor_pos - new_pos).normalize();
                    // a handle dragged onto its anchor has no direction
                    if !dir.is_zero() {
                        let dist = anchor_pos.distance(mirror_pos);
                        cursor.set(mirror, anchor_pos + dir * dist);
                    }
                }
            }
        }
        Ok(())
    }

    /// Open a closed path or close an open one.
    ///
    /// Closing adds the two control points of the new closing segment,
    /// mirroring the handles of the last and first anchors; opening removes
    /// them again.
    pub fn toggle_closed(&mut self) {
        let closed = !self.is_closed();
        let pts = self.points.points_mut();
        if closed {
            let last_anchor = pts[pts.len() - 1];
            let last_ctrl = pts[pts.len() - 2];
            let first_anchor = pts[0];
            let first_ctrl = pts[1];
            pts.push(last_anchor.reflect(last_ctrl));
            pts.push(first_anchor.reflect(first_ctrl));
        } else {
            let new_len = pts.len() - 2;
            pts.truncate(new_len);
        }
        self.points.set_closed(closed);
        self.after_topology_change();
    }

    pub fn set_closed(&mut self, closed: bool) {
        if closed != self.is_closed() {
            self.toggle_closed();
        }
    }

    /// Turn automatic control point placement on or off.
    ///
    /// Turning it on immediately recomputes every control point.
    pub fn set_auto_set_control_points(&mut self, auto: bool) {
        if auto != self.auto_set_control_points {
            self.auto_set_control_points = auto;
            if auto {
                self.recompute_all_control_points();
            }
        }
    }

    /// Place every control point automatically.
    pub fn recompute_all_control_points(&mut self) {
        auto_control::set_all(&mut self.points);
    }

    /// Place the control points of `anchor_idx` and its two neighbouring
    /// anchors automatically.
    pub fn recompute_affected_control_points(&mut self, anchor_idx: usize) -> Result<(), PathError> {
        self.check_anchor(anchor_idx)?;
        auto_control::set_affected(&mut self.points, anchor_idx);
        Ok(())
    }

    /// The closest anchor strictly nearer to `pos` than `max_dist`.
    pub fn nearest_anchor(&self, pos: impl Into<DPoint>, max_dist: f64) -> Option<usize> {
        let pos = pos.into();
        let mut best = None;
        let mut best_dist = max_dist;
        for idx in (0..self.point_count()).step_by(3) {
            let dist = self.points.as_slice()[idx].distance(pos);
            if dist < best_dist {
                best_dist = dist;
                best = Some(idx);
            }
        }
        best
    }

    /// The segment whose curve passes closest to `pos`, if that is within
    /// `max_dist`.
    ///
    /// `accuracy` bounds the error of the curve distance computation; it is
    /// raised to at least [`MIN_NEAREST_ACCURACY`].
    ///
    /// [`MIN_NEAREST_ACCURACY`]: crate::consts::MIN_NEAREST_ACCURACY
    pub fn nearest_segment(
        &self,
        pos: impl Into<DPoint>,
        max_dist: f64,
        accuracy: f64,
    ) -> Option<SegmentHit> {
        let pos = pos.into();
        self.iter_segments()
            .map(|seg| {
                let (t, distance) = seg.nearest(pos, accuracy);
                SegmentHit {
                    segment: seg.index,
                    t,
                    distance,
                }
            })
            .filter(|hit| hit.distance < max_dist)
            .fold(None, |best: Option<SegmentHit>, hit| match best {
                Some(best) if best.distance <= hit.distance => Some(best),
                _ => Some(hit),
            })
    }

    /// The path as a kurbo `BezPath`, for drawing.
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        self.append_to_bezier(&mut bez);
        bez
    }

    pub fn append_to_bezier(&self, bez: &mut BezPath) {
        bez.move_to(self.points.first().to_raw());
        for seg in self.iter_segments() {
            bez.curve_to(seg.p1.to_raw(), seg.p2.to_raw(), seg.p3.to_raw());
        }
        if self.is_closed() {
            bez.close_path();
        }
    }

    fn after_topology_change(&mut self) {
        debug_assert!(self.points.debug_validate(), "{:?}", self.points);
        if self.auto_set_control_points {
            self.recompute_all_control_points();
        }
    }

    fn check_segment(&self, segment: usize) -> Result<(), PathError> {
        if segment < self.segment_count() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange {
                index: segment,
                len: self.segment_count(),
            })
        }
    }

    fn check_anchor(&self, idx: usize) -> Result<(), PathError> {
        self.point(idx)?;
        if is_anchor(idx) {
            Ok(())
        } else {
            Err(PathError::NotAnAnchor(idx))
        }
    }
}

impl TryFrom<PathData> for Path {
    type Error = PathError;

    fn try_from(data: PathData) -> Result<Path, PathError> {
        Path::from_raw_parts(data.points, data.closed, data.auto_set_control_points)
    }
}

impl From<Path> for PathData {
    fn from(path: Path) -> PathData {
        path.to_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn assert_near(a: DPoint, b: DPoint) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPSILON);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPSILON);
    }

    fn cross(a: DVec2, b: DVec2) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// An open path with anchors at (0,0), (5,0), (10,0), (15,0).
    fn four_anchor_path() -> Path {
        let mut path = Path::new((0.0, 0.0));
        path.move_point(0, (0.0, 0.0)).unwrap();
        path.move_point(3, (5.0, 0.0)).unwrap();
        path.add_segment((10.0, 0.0)).unwrap();
        path.add_segment((15.0, 0.0)).unwrap();
        path
    }

    #[test]
    fn new_path() {
        let path = Path::new((0.0, 0.0));
        assert_eq!(
            path.points(),
            &[
                DPoint::new(-1.0, 0.0),
                DPoint::new(-0.5, 0.5),
                DPoint::new(0.5, -0.5),
                DPoint::new(1.0, 0.0),
            ]
        );
        assert_eq!(path.segment_count(), 1);
        assert!(!path.is_closed());
        assert!(!path.auto_set_control_points());

        let offset = Path::new((10.0, -2.0));
        assert_eq!(offset.point(1), Ok(DPoint::new(9.5, -1.5)));
    }

    #[test]
    fn point_access() {
        let path = Path::new((0.0, 0.0));
        assert_eq!(
            path.point(4),
            Err(PathError::IndexOutOfRange { index: 4, len: 4 })
        );
        for idx in 0..12 {
            assert_eq!(path.is_anchor(idx), idx % 3 == 0);
        }
        assert_eq!(
            path.segment_points(1),
            Err(PathError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(path.point_kind(3), Ok(PointKind::Anchor));
        assert_eq!(path.point_kind(2), Ok(PointKind::Control));
        assert!(path.point_kind(4).is_err());
    }

    #[test]
    fn add_segment() {
        let mut path = Path::new((0.0, 0.0));
        path.add_segment((3.0, 0.0)).unwrap();
        assert_eq!(path.point_count(), 7);
        assert_eq!(path.segment_count(), 2);
        // reflection of (0.5, -0.5) through (1, 0)
        assert_eq!(path.point(4), Ok(DPoint::new(1.5, 0.5)));
        assert_eq!(path.point(5), Ok(DPoint::new(2.25, 0.25)));
        assert_eq!(path.point(6), Ok(DPoint::new(3.0, 0.0)));

        path.toggle_closed();
        assert_eq!(path.add_segment((9.0, 9.0)), Err(PathError::ClosedPath));
        assert_eq!(path.point_count(), 9);
    }

    #[test]
    fn segment_count_formula() {
        let mut path = Path::new((0.0, 0.0));
        for k in 0..5 {
            assert_eq!(path.point_count(), 4 + 3 * k);
            assert_eq!(path.segment_count(), (path.point_count() - 4) / 3 + 1);
            path.toggle_closed();
            assert_eq!(path.segment_count(), (path.point_count() - 6) / 3 + 2);
            assert_eq!(path.segment_count(), k + 2);
            path.toggle_closed();
            path.add_segment((k as f64 * 2.0 + 3.0, 1.0)).unwrap();
        }
    }

    #[test]
    fn closed_segment_wraps() {
        let mut path = Path::new((0.0, 0.0));
        path.toggle_closed();
        let [p0, c1, c2, p1] = path.segment_points(1).unwrap();
        assert_eq!(p0, DPoint::new(1.0, 0.0));
        assert_eq!(c1, DPoint::new(1.5, 0.5));
        assert_eq!(c2, DPoint::new(-1.5, -0.5));
        assert_eq!(p1, DPoint::new(-1.0, 0.0));
    }

    #[test]
    fn toggle_closed_round_trip() {
        let mut path = four_anchor_path();
        let before = path.points().to_owned();
        path.toggle_closed();
        assert!(path.is_closed());
        assert_eq!(path.point_count(), before.len() + 2);
        path.toggle_closed();
        assert!(!path.is_closed());
        assert_eq!(path.points(), &before[..]);

        path.set_closed(false);
        assert_eq!(path.point_count(), before.len());
        path.set_closed(true);
        path.set_closed(true);
        assert_eq!(path.point_count(), before.len() + 2);
    }

    #[test]
    fn move_anchor_moves_handles() {
        let mut path = four_anchor_path();
        let before = path.points().to_owned();
        let delta = DVec2::new(1.25, -3.0);
        path.move_point(3, before[3] + delta).unwrap();
        assert_eq!(path.point(2).unwrap(), before[2] + delta);
        assert_eq!(path.point(4).unwrap(), before[4] + delta);
        assert_eq!(path.point(1).unwrap(), before[1]);
        assert_eq!(path.point(5).unwrap(), before[5]);
    }

    #[test]
    fn move_end_anchors() {
        let mut path = Path::new((0.0, 0.0));
        path.move_point(0, (-2.0, 0.0)).unwrap();
        assert_eq!(path.point(1), Ok(DPoint::new(-1.5, 0.5)));
        assert_eq!(path.point(3), Ok(DPoint::new(1.0, 0.0)));

        path.toggle_closed();
        let last = path.point(5).unwrap();
        path.move_point(0, (-2.0, 1.0)).unwrap();
        assert_eq!(path.point(5).unwrap(), last + DVec2::new(0.0, 1.0));
    }

    #[test]
    fn move_control_mirrors_direction() {
        let mut path = four_anchor_path();
        let anchor = path.point(3).unwrap();
        let other_before = path.point(4).unwrap();
        let other_dist = anchor.distance(other_before);

        path.move_point(2, (3.0, 2.0)).unwrap();
        let moved = path.point(2).unwrap();
        let other = path.point(4).unwrap();

        assert_abs_diff_eq!(anchor.distance(other), other_dist, epsilon = EPSILON);
        assert_abs_diff_eq!(cross(moved - anchor, other - anchor), 0.0, epsilon = EPSILON);
        let dot = (moved - anchor).x * (other - anchor).x + (moved - anchor).y * (other - anchor).y;
        assert!(dot < 0.0);

        // outgoing handle drives the incoming one too
        let incoming_dist = anchor.distance(path.point(2).unwrap());
        path.move_point(4, (5.0, 7.0)).unwrap();
        let incoming = path.point(2).unwrap();
        assert_abs_diff_eq!(anchor.distance(incoming), incoming_dist, epsilon = EPSILON);
        assert_near(incoming, anchor + DVec2::new(0.0, -incoming_dist));
    }

    #[test]
    fn move_control_at_open_end() {
        let mut path = Path::new((0.0, 0.0));
        let before = path.points().to_owned();
        path.move_point(1, (-1.0, 2.0)).unwrap();
        assert_eq!(path.point(1), Ok(DPoint::new(-1.0, 2.0)));
        assert_eq!(path.point(2).unwrap(), before[2]);
        assert_eq!(path.point(3).unwrap(), before[3]);
    }

    #[test]
    fn move_control_wraps_when_closed() {
        let mut path = Path::new((0.0, 0.0));
        path.toggle_closed();
        let anchor = path.point(0).unwrap();
        let dist = anchor.distance(path.point(5).unwrap());
        path.move_point(1, (-1.0, 2.0)).unwrap();
        assert_near(path.point(5).unwrap(), anchor + DVec2::new(0.0, -dist));
    }

    #[test]
    fn move_control_onto_anchor() {
        let mut path = four_anchor_path();
        let other = path.point(4).unwrap();
        let anchor = path.point(3).unwrap();
        path.move_point(2, anchor).unwrap();
        assert_eq!(path.point(2).unwrap(), anchor);
        assert_eq!(path.point(4).unwrap(), other);
    }

    #[test]
    fn move_out_of_range() {
        let mut path = Path::new((0.0, 0.0));
        assert_eq!(
            path.move_point(4, (0.0, 0.0)),
            Err(PathError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn delete_closed() {
        let mut path = Path::new((0.0, 0.0));
        path.add_segment((2.0, 2.0)).unwrap();
        path.toggle_closed();
        assert_eq!(path.segment_count(), 3);
        let before = path.points().to_owned();
        assert_eq!(path.delete_segment(3), Ok(false));
        assert_eq!(path.points(), &before[..]);

        path.toggle_closed();
        path.add_segment((0.0, 4.0)).unwrap();
        path.toggle_closed();
        assert_eq!(path.segment_count(), 4);
        assert_eq!(path.point_count(), 12);
        assert_eq!(path.delete_segment(6), Ok(true));
        assert_eq!(path.point_count(), 9);
        assert_eq!(path.segment_count(), 3);
    }

    #[test]
    fn delete_first_anchor_of_closed_path() {
        let mut path = four_anchor_path();
        path.toggle_closed();
        let before = path.points().to_owned();
        assert_eq!(path.delete_segment(0), Ok(true));
        let after = path.points();
        assert_eq!(after.len(), 9);
        assert_eq!(after[0], before[3]);
        // the closing segment now ends at the old second anchor, arriving
        // along that anchor's old incoming handle
        assert_eq!(after[8], before[2]);
        assert_eq!(after[7], before[10]);
        assert_eq!(path.segment_points(2).unwrap()[3], before[3]);
    }

    #[test]
    fn delete_last_anchor_of_closed_path() {
        let mut path = four_anchor_path();
        path.toggle_closed();
        let before = path.points().to_owned();
        assert_eq!(path.delete_segment(9), Ok(true));
        let after = path.points();
        assert_eq!(&after[..8], &before[..8]);
        assert_eq!(after[8], before[11]);
    }

    #[test]
    fn delete_open() {
        let mut path = four_anchor_path();
        let before = path.points().to_owned();

        let mut first = path.clone();
        assert_eq!(first.delete_segment(0), Ok(true));
        assert_eq!(first.points(), &before[3..]);

        let mut last = path.clone();
        assert_eq!(last.delete_segment(9), Ok(true));
        assert_eq!(last.points(), &before[..7]);

        assert_eq!(path.delete_segment(3), Ok(true));
        assert_eq!(path.point_count(), 7);
        assert_eq!(path.point(0).unwrap(), before[0]);
        assert_eq!(path.point(1).unwrap(), before[1]);
        assert_eq!(path.point(2).unwrap(), before[5]);
        assert_eq!(path.point(3).unwrap(), before[6]);

        // two segments is the floor for an open path
        assert_eq!(path.delete_segment(3), Ok(false));
        assert_eq!(path.point_count(), 7);
    }

    #[test]
    fn delete_bad_index() {
        let mut path = four_anchor_path();
        assert_eq!(path.delete_segment(4), Err(PathError::NotAnAnchor(4)));
        assert_eq!(
            path.delete_segment(12),
            Err(PathError::IndexOutOfRange { index: 12, len: 10 })
        );
    }

    #[test]
    fn split_segment() {
        let mut path = four_anchor_path();
        path.split_segment((7.5, 1.0), 1).unwrap();
        assert_eq!(path.point_count(), 13);
        assert_eq!(path.segment_count(), 4);
        assert_eq!(path.point(6), Ok(DPoint::new(7.5, 1.0)));
        assert_eq!(path.point(3), Ok(DPoint::new(5.0, 0.0)));
        assert_eq!(path.point(9), Ok(DPoint::new(10.0, 0.0)));

        // the new anchor's handles are tangent and half the neighbour distance
        let anchor = path.point(6).unwrap();
        let c_in = path.point(5).unwrap();
        let c_out = path.point(7).unwrap();
        assert_abs_diff_eq!(cross(c_in - anchor, c_out - anchor), 0.0, epsilon = EPSILON);
        let half_prev = anchor.distance(DPoint::new(5.0, 0.0)) * 0.5;
        assert_abs_diff_eq!(anchor.distance(c_in), half_prev, epsilon = EPSILON);
        assert!(!path.auto_set_control_points());

        assert_eq!(
            path.split_segment((0.0, 0.0), 4),
            Err(PathError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn split_only_touches_neighbouring_anchors() {
        let mut path = four_anchor_path();
        path.add_segment((20.0, 3.0)).unwrap();
        path.move_point(7, (11.0, 2.0)).unwrap();
        let before = path.points().to_owned();
        assert_eq!(before.len(), 13);

        path.split_segment((2.5, 1.0), 0).unwrap();
        let after = path.points();
        assert_eq!(after.len(), 16);
        // anchors two or more steps from the new one keep their handles
        assert_eq!(&after[8..=13], &before[5..=10]);
        assert_eq!(after[15], before[12]);
        // the neighbour on the far side was recomputed
        assert_ne!(after[5], before[2]);
    }

    #[test]
    fn split_closing_segment() {
        let mut path = Path::new((0.0, 0.0));
        path.toggle_closed();
        path.split_segment((0.0, -1.0), 1).unwrap();
        assert_eq!(path.point_count(), 9);
        assert_eq!(path.segment_count(), 3);
        assert_eq!(path.point(6), Ok(DPoint::new(0.0, -1.0)));
        assert_eq!(path.segment_points(2).unwrap()[3], DPoint::new(-1.0, 0.0));
    }

    #[test]
    fn auto_mode_three_anchor_open_path() {
        let mut path = Path::new((0.0, 0.0));
        path.add_segment((3.0, 2.0)).unwrap();
        path.set_auto_set_control_points(true);
        let pts = path.points();
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[1], pts[0].midpoint(pts[2]));
        assert_eq!(pts[5], pts[6].midpoint(pts[4]));

        // the middle anchor's handles follow its neighbours
        let anchor = pts[3];
        let prev = (pts[0] - anchor).normalize();
        let next = (pts[6] - anchor).normalize();
        let dir = (prev - next).normalize();
        assert_near(pts[2], anchor + dir * (pts[0].distance(anchor) * 0.5));
        assert_near(pts[4], anchor + dir * (-pts[6].distance(anchor) * 0.5));
    }

    #[test]
    fn auto_mode_tracks_anchor_moves() {
        let mut path = four_anchor_path();
        path.set_auto_set_control_points(true);
        path.move_point(6, (10.0, 5.0)).unwrap();

        let mut expected = path.clone();
        expected.recompute_all_control_points();
        for (a, b) in path.points().iter().zip(expected.points()) {
            assert_near(*a, *b);
        }

        // control points belong to the algorithm now
        let before = path.points().to_owned();
        path.move_point(4, (100.0, 100.0)).unwrap();
        assert_eq!(path.points(), &before[..]);
    }

    #[test]
    fn auto_mode_after_topology_change() {
        let mut path = Path::new((0.0, 0.0));
        path.set_auto_set_control_points(true);
        path.add_segment((2.0, 3.0)).unwrap();
        let mut expected = path.clone();
        expected.recompute_all_control_points();
        assert_eq!(path.points(), expected.points());

        path.toggle_closed();
        let mut expected = path.clone();
        expected.recompute_all_control_points();
        assert_eq!(path.points(), expected.points());
    }

    #[test]
    fn recompute_affected_checks_index() {
        let mut path = four_anchor_path();
        assert_eq!(
            path.recompute_affected_control_points(2),
            Err(PathError::NotAnAnchor(2))
        );
        assert_eq!(
            path.recompute_affected_control_points(30),
            Err(PathError::IndexOutOfRange { index: 30, len: 10 })
        );
        assert!(path.recompute_affected_control_points(9).is_ok());
    }

    #[test]
    fn nearest_anchor() {
        let path = four_anchor_path();
        assert_eq!(path.nearest_anchor((5.01, 0.0), 0.05), Some(3));
        assert_eq!(path.nearest_anchor((5.1, 0.0), 0.05), None);
        assert_eq!(path.nearest_anchor((7.4, 0.0), 5.0), Some(3));
    }

    #[test]
    fn nearest_segment() {
        let path = four_anchor_path();
        let target = path.segment(2).unwrap().eval(0.5) + DVec2::new(0.0, 0.05);
        let hit = path.nearest_segment(target, 0.1, 1e-9).unwrap();
        assert_eq!(hit.segment, 2);
        assert!(hit.distance <= 0.05 + 1e-6);
        assert!(path.nearest_segment((12.5, 3.0), 0.1, 1e-6).is_none());
    }

    #[test]
    fn nearest_segment_zero_accuracy() {
        let path = four_anchor_path();
        let on_curve = path.segment(1).unwrap().eval(0.5);
        let hit = path.nearest_segment(on_curve, 0.1, 0.0).unwrap();
        assert_eq!(hit.segment, 1);
        assert!(hit.distance < 1e-6);
    }

    #[test]
    fn bezpath() {
        use kurbo::PathEl;
        let mut path = Path::new((0.0, 0.0));
        path.toggle_closed();
        let els: Vec<_> = path.to_bezpath().elements().to_vec();
        assert_eq!(els.len(), 4);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[2], PathEl::CurveTo(_, _, p) if p == kurbo::Point::new(-1.0, 0.0)));
        assert_eq!(els[3], PathEl::ClosePath);
    }

    #[test]
    fn raw_parts() {
        let path = four_anchor_path();
        let data = path.to_data();
        assert_eq!(Path::try_from(data.clone()), Ok(path));

        let bad = PathData {
            points: data.points[..5].to_owned(),
            ..data
        };
        assert_eq!(
            Path::try_from(bad),
            Err(PathError::InvalidPointCount {
                len: 5,
                closed: false
            })
        );
    }

    #[test]
    fn serde_round_trip() {
        let mut path = four_anchor_path();
        path.toggle_closed();
        let json = serde_json::to_string(&path).unwrap();
        let loaded: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, path);

        let bad = r#"{"points":[{"x":0.0,"y":0.0}],"closed":false}"#;
        assert!(serde_json::from_str::<Path>(bad).is_err());
    }

    #[test]
    fn snapshots_are_independent() {
        let mut path = four_anchor_path();
        let snapshot = path.clone();
        path.move_point(3, (5.0, 5.0)).unwrap();
        assert_eq!(snapshot.point(3), Ok(DPoint::new(5.0, 0.0)));
        assert_ne!(snapshot, path);
    }
}
