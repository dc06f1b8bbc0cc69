//! Translating host input into path edits.
//!
//! The host owns the viewport: it turns pointer events into design-space
//! positions and decides which gesture they are. This module takes it from
//! there, doing the hit-testing and choosing the path operation.

use crate::design_space::DPoint;
use crate::error::PathError;
use crate::path::Path;
use crate::segment::SegmentHit;
use crate::settings::EditorSettings;

/// An input event, already converted to design space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditEvent {
    /// The pointer moved.
    Hover { pos: DPoint },
    /// Split the segment under `pos`, or extend an open path to `pos`.
    AddPoint { pos: DPoint },
    /// Delete the anchor under `pos`.
    Delete { pos: DPoint },
    /// A point's handle was dragged to `pos`.
    Drag { index: usize, pos: DPoint },
    SetClosed { closed: bool },
    SetAutoControl { auto: bool },
    /// Throw the current path away and start a new one.
    Reset { center: DPoint },
}

/// Whether an event changed the path.
///
/// Hosts use this to decide whether to keep the undo snapshot they took
/// before the event, and whether to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Unchanged,
}

/// A path being edited, with the state needed to interpret input.
#[derive(Debug, Clone)]
pub struct EditSession {
    path: Path,
    settings: EditorSettings,
    hovered: Option<SegmentHit>,
}

impl EditSession {
    pub fn new(center: impl Into<DPoint>, settings: EditorSettings) -> Self {
        EditSession::from_path(Path::new(center), settings)
    }

    pub fn from_path(path: Path, settings: EditorSettings) -> Self {
        EditSession {
            path,
            settings,
            hovered: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// The segment under the pointer, as of the last hover or add.
    pub fn hovered_segment(&self) -> Option<SegmentHit> {
        self.hovered
    }

    /// Apply one input event.
    pub fn apply(&mut self, event: &EditEvent) -> Result<EditOutcome, PathError> {
        let before = self.path.clone();
        match *event {
            EditEvent::Hover { pos } => {
                self.update_hover(pos);
            }
            EditEvent::AddPoint { pos } => self.add_point(pos)?,
            EditEvent::Delete { pos } => self.delete_nearest(pos)?,
            EditEvent::Drag { index, pos } => {
                self.path.move_point(index, pos)?;
                self.hovered = None;
            }
            EditEvent::SetClosed { closed } => self.path.set_closed(closed),
            EditEvent::SetAutoControl { auto } => self.path.set_auto_set_control_points(auto),
            EditEvent::Reset { center } => {
                self.path = Path::new(center);
                self.hovered = None;
            }
        }

        if self.path == before {
            Ok(EditOutcome::Unchanged)
        } else {
            Ok(EditOutcome::Changed)
        }
    }

    fn update_hover(&mut self, pos: DPoint) {
        self.hovered = self.path.nearest_segment(
            pos,
            self.settings.segment_select_distance,
            self.settings.nearest_accuracy,
        );
    }

    fn add_point(&mut self, pos: DPoint) -> Result<(), PathError> {
        self.update_hover(pos);
        match self.hovered.take() {
            Some(hit) => self.path.split_segment(pos, hit.segment),
            None if !self.path.is_closed() => self.path.add_segment(pos),
            None => {
                log::debug!("no segment under {} on closed path; ignoring", pos);
                Ok(())
            }
        }
    }

    fn delete_nearest(&mut self, pos: DPoint) -> Result<(), PathError> {
        let anchor = self
            .path
            .nearest_anchor(pos, self.settings.anchor_select_distance);
        if let Some(anchor) = anchor {
            self.hovered = None;
            self.path.delete_segment(anchor)?;
        }
        Ok(())
    }
}
