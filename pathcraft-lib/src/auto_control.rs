//! Automatic (smooth) control point placement.
//!
//! Each anchor's handles are laid along a tangent built from the directions
//! to its neighbouring anchors, with each handle half as long as the
//! distance to the neighbour on its side. The ends of an open path have only
//! one neighbour, so their outer handles are instead pinned to the midpoint
//! between the end anchor and the next control point in.

use super::design_space::DVec2;
use super::point_list::PathPoints;

/// Recompute the handles of every anchor.
pub(crate) fn set_all(points: &mut PathPoints) {
    for anchor in (0..points.len()).step_by(3) {
        set_for_anchor(points, anchor);
    }
    set_open_ends(points);
}

/// Recompute the handles of `anchor` and of the anchors on either side.
///
/// `anchor` must be a valid anchor index.
pub(crate) fn set_affected(points: &mut PathPoints, anchor: usize) {
    let anchor = anchor as isize;
    for neighbour in &[anchor - 3, anchor, anchor + 3] {
        if let Some(idx) = points.resolve(*neighbour) {
            set_for_anchor(points, idx);
        }
    }
    set_open_ends(points);
}

fn set_for_anchor(points: &mut PathPoints, anchor: usize) {
    let mut cursor = points.cursor();
    let anchor_idx = anchor as isize;
    let anchor_pos = match cursor.get(anchor_idx) {
        Some(pt) => pt,
        None => return,
    };

    let mut dir = DVec2::ZERO;
    let mut neighbour_distances = [0.0f64; 2];

    if let Some(prev) = cursor.get(anchor_idx - 3) {
        let offset = prev - anchor_pos;
        dir += offset.normalize();
        neighbour_distances[0] = offset.hypot();
    }
    if let Some(next) = cursor.get(anchor_idx + 3) {
        let offset = next - anchor_pos;
        dir -= offset.normalize();
        neighbour_distances[1] = -offset.hypot();
    }

    let dir = dir.normalize();
    for (i, dist) in neighbour_distances.iter().enumerate() {
        let control_idx = anchor_idx + i as isize * 2 - 1;
        cursor.set(control_idx, anchor_pos + dir * (dist * 0.5));
    }
}

fn set_open_ends(points: &mut PathPoints) {
    if points.closed() {
        return;
    }
    let len = points.len();
    let pts = points.points_mut();
    pts[1] = pts[0].midpoint(pts[2]);
    pts[len - 2] = pts[len - 1].midpoint(pts[len - 3]);
}
