//! Errors returned by path queries and edits.

/// A type for errors that occur when querying or editing a [`Path`].
///
/// Edits that are merely *refused* (such as deleting an anchor from a path
/// that is already at its minimum size) are not errors; they are reported
/// through the operation's return value instead, so that interactive
/// editing stays forgiving.
///
/// [`Path`]: crate::Path
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// An index outside of the current valid range.
    IndexOutOfRange { index: usize, len: usize },
    /// An anchor-only operation was given the index of a control point.
    NotAnAnchor(usize),
    /// Segments can only be appended to an open path.
    ClosedPath,
    /// Raw points that cannot describe a chain of cubic segments.
    InvalidPointCount { len: usize, closed: bool },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range (len {})", index, len)
            }
            Self::NotAnAnchor(idx) => write!(f, "point {} is not an anchor point", idx),
            Self::ClosedPath => write!(f, "cannot append a segment to a closed path"),
            Self::InvalidPointCount { len, closed } => {
                let kind = if *closed { "closed" } else { "open" };
                write!(f, "{} points cannot form a {} cubic path", len, kind)
            }
        }
    }
}

impl std::error::Error for PathError {}
