//! Point roles within a flat cubic point list.
//!
//! A path stores its points in a single list where position alone decides
//! what a point is: every third point (starting at zero) is an anchor that
//! the curve passes through, and the two points between each pair of
//! anchors are that segment's control points.

/// What a point in the list is, derived from its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    Anchor,
    Control,
}

/// For a control point, the anchor that owns it and the control point on
/// the other side of that anchor.
///
/// These are raw (possibly negative or past-the-end) indices; resolving
/// them against the path's length and topology is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    pub anchor: isize,
    pub mirror: isize,
}

impl PointKind {
    pub fn for_index(idx: usize) -> PointKind {
        if is_anchor(idx) {
            PointKind::Anchor
        } else {
            PointKind::Control
        }
    }

    pub fn is_anchor(self) -> bool {
        matches!(self, PointKind::Anchor)
    }

    pub fn is_control(self) -> bool {
        matches!(self, PointKind::Control)
    }
}

/// `true` if the point at `idx` is an anchor.
#[inline]
pub fn is_anchor(idx: usize) -> bool {
    idx % 3 == 0
}

/// Resolve `idx` into `0..len` by wrapping around in either direction.
///
/// # Panics
///
/// Panics if `len` is zero.
#[inline]
pub fn loop_index(idx: isize, len: usize) -> usize {
    idx.rem_euclid(len as isize) as usize
}

impl Handle {
    /// The owning anchor and mirrored control for the control point at `idx`.
    ///
    /// A control point immediately before an anchor is that anchor's
    /// incoming handle; otherwise it is the outgoing handle of the anchor
    /// before it. Returns `None` for anchors.
    pub fn for_control(idx: usize) -> Option<Handle> {
        if is_anchor(idx) {
            return None;
        }
        let idx = idx as isize;
        let handle = if (idx + 1) % 3 == 0 {
            Handle {
                anchor: idx + 1,
                mirror: idx + 2,
            }
        } else {
            Handle {
                anchor: idx - 1,
                mirror: idx - 2,
            }
        };
        Some(handle)
    }
}
