use std::fmt;

/// A stable handle to a shape tracked by a [`crate::Board`].
///
/// Shapes live in an arena keyed by `ShapeId`; the occupancy grid stores
/// handles rather than owning references, so deleting or splitting one shape
/// never invalidates handles to the others. A handle to a shape that has been
/// cut away simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
