//! Raw storage for the points that make up a cubic path.
use std::sync::Arc;

use super::design_space::DPoint;
use super::point::loop_index;

/// The flat list of anchor and control points, plus the open/closed flag.
///
/// This type knows how to resolve neighbours (wrapping for closed paths,
/// bounds-checked for open ones) but enforces none of the editing rules;
/// those live on [`Path`].
///
/// The points are shared copy-on-write, so cloning a `PathPoints` (for an
/// undo snapshot, say) is cheap; the first mutation after a clone copies
/// the buffer.
///
/// [`Path`]: crate::Path
#[derive(Clone, PartialEq)]
pub(crate) struct PathPoints {
    points: Arc<Vec<DPoint>>,
    closed: bool,
}

/// A cursor for reading and writing points by possibly-out-of-range index.
pub(crate) struct Cursor<'a> {
    inner: &'a mut PathPoints,
}

impl PathPoints {
    pub(crate) fn from_raw_parts(points: Vec<DPoint>, closed: bool) -> Self {
        PathPoints {
            points: Arc::new(points),
            closed,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub(crate) fn as_slice(&self) -> &[DPoint] {
        &self.points
    }

    /// All mutable access goes through here.
    pub(crate) fn points_mut(&mut self) -> &mut Vec<DPoint> {
        Arc::make_mut(&mut self.points)
    }

    pub(crate) fn get(&self, idx: usize) -> Option<DPoint> {
        self.points.get(idx).copied()
    }

    /// Resolve a raw index to a real one.
    ///
    /// In a closed path every index wraps; in an open path anything outside
    /// the list has no point.
    pub(crate) fn resolve(&self, idx: isize) -> Option<usize> {
        if self.points.is_empty() {
            None
        } else if self.closed {
            Some(loop_index(idx, self.len()))
        } else if idx >= 0 && (idx as usize) < self.len() {
            Some(idx as usize)
        } else {
            None
        }
    }

    pub(crate) fn first(&self) -> DPoint {
        self.points[0]
    }

    /// Returns a cursor for edits that follow the neighbour rules.
    pub(crate) fn cursor(&mut self) -> Cursor {
        Cursor { inner: self }
    }

    /// The number of cubic segments these points describe.
    pub(crate) fn segment_count(&self) -> usize {
        let open_count = (self.len().saturating_sub(4)) / 3 + 1;
        if self.closed {
            open_count + 1
        } else {
            open_count
        }
    }

    /// `true` if `len` points can describe an open (or closed) cubic chain.
    pub(crate) fn valid_len(len: usize, closed: bool) -> bool {
        if closed {
            len >= 6 && len % 3 == 0
        } else {
            len >= 4 && len % 3 == 1
        }
    }

    pub(crate) fn debug_validate(&self) -> bool {
        Self::valid_len(self.len(), self.closed)
    }
}

impl Cursor<'_> {
    pub(crate) fn get(&self, idx: isize) -> Option<DPoint> {
        self.inner
            .resolve(idx)
            .and_then(|idx| self.inner.points.get(idx))
            .copied()
    }

    /// Apply `f` to the point at `idx`, if that point exists.
    ///
    /// Returns `true` if the point was updated.
    pub(crate) fn update(&mut self, idx: isize, f: impl FnOnce(&mut DPoint)) -> bool {
        match self.inner.resolve(idx) {
            Some(idx) => {
                f(&mut self.inner.points_mut()[idx]);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set(&mut self, idx: isize, pt: DPoint) -> bool {
        self.update(idx, |p| *p = pt)
    }
}

impl std::fmt::Debug for PathPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let closed = if self.closed { "Closed" } else { "Open" };
        writeln!(f, "PathPoints ({}):", closed)?;
        for (i, pt) in self.points.iter().enumerate() {
            let kind = if i % 3 == 0 { "anchor" } else { "ctrl" };
            writeln!(f, "\t{}: {:?} {}", i, pt, kind)?;
        }
        Ok(())
    }
}
