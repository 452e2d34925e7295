use std::fmt;

use thiserror::Error;

use crate::bounds::Bounds;
use crate::id::ShapeId;

/// Canvas axis a move was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A rejected [`crate::Board::move_shape`] call. The shape is left exactly
/// where it was; callers may clamp the delta to the reported interval and
/// retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The delta would push the shape past a canvas edge. `lo..=hi` is the
    /// interval of deltas the shape's bounding box permits on that axis.
    #[error("{axis} delta {delta} is outside the permitted range {lo}..={hi}")]
    OutOfRange {
        axis: Axis,
        delta: isize,
        lo: isize,
        hi: isize,
    },
    /// A zero-length delta that nonetheless failed range validation. This
    /// cannot happen while the board is consistent; it is reported as a
    /// warning-class no-op rather than silently ignored.
    #[error("zero-length {axis} delta failed range validation")]
    Degenerate { axis: Axis },
}

/// A violation found by [`crate::Board::check_consistency`].
///
/// These indicate a bug in whatever mutated the board, not a runtime
/// condition to recover from; the check reports and never auto-corrects.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The occupancy grid and a shape's raster disagree at a cell.
    #[error(
        "shape {id} at ({x}, {y}): raster occupied = {raster}, grid occupied = {grid}"
    )]
    OccupancyMismatch {
        id: ShapeId,
        x: usize,
        y: usize,
        raster: bool,
        grid: bool,
    },
    /// A shape's cached bounding box is not the tight box of its raster.
    #[error("shape {id} bounds {cached:?} differ from tight bounds {tight:?}")]
    LooseBounds {
        id: ShapeId,
        cached: Bounds,
        tight: Bounds,
    },
}
