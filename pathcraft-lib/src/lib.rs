//! Editable chains of cubic bezier segments.
//!
//! The core type is [`Path`]: a flat list of points in which every third
//! point is an anchor and the points between anchors are control points.
//! It supports the edits an interactive path tool needs (appending,
//! splitting and deleting segments, dragging points with linked handles,
//! opening and closing, and automatic smooth handle placement) while
//! keeping that layout intact.
//!
//! [`EditSession`] sits on top, turning design-space input events into
//! path edits, and [`export`] renders a path to SVG.

#[macro_use]
extern crate serde_derive;

mod auto_control;
mod design_space;
mod edit_session;
mod error;
mod path;
mod point;
mod point_list;
mod segment;
mod settings;

pub mod consts;
pub mod export;

pub use design_space::{DPoint, DVec2};
pub use edit_session::{EditEvent, EditOutcome, EditSession};
pub use error::PathError;
pub use path::{Path, PathData};
pub use point::{is_anchor, loop_index, PointKind};
pub use segment::{Segment, SegmentHit, Segments};
pub use settings::EditorSettings;
