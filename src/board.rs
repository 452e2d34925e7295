//! The `board` module owns the whole engine state: the shape arena, the
//! occupancy grid, and the mutating operations (shape creation, boundary-
//! constrained moves, cut-through). Every mutating operation takes
//! `&mut Board` and completes synchronously, so read-only passes over
//! `&Board` (rendering, hit-testing) can never observe a half-applied
//! mutation.

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use tracing::{debug, warn};

use crate::bounds::Bounds;
use crate::color::Color;
use crate::components::{ComponentMap, Connectivity};
use crate::error::{Axis, ConsistencyError, MoveError};
use crate::grid::Grid;
use crate::id::ShapeId;
use crate::shape::Shape;

/// A fixed-size canvas of tracked shapes.
///
/// The board maintains, for every cell, the ordered list of shapes occupying
/// it (front = topmost), and for every shape a sparse raster plus a tight
/// bounding box. Shapes are addressed through stable [`ShapeId`] handles.
///
/// # Examples
///
/// ```
/// use recorte::{Board, Color};
///
/// let mut board = Board::new(10, 10);
/// let square = board.make_new_shape_with_color(
///     |x, y| x < 3 && y < 3,
///     Color::rgb(200, 40, 40),
/// );
///
/// board.move_shape(square, 2, 2).unwrap();
/// assert_eq!(board.topmost_shape_at(4, 4), Some(square));
/// assert_eq!(board.topmost_color_at(4, 4), Some(Color::rgb(200, 40, 40)));
/// assert_eq!(board.topmost_shape_at(0, 0), None);
/// ```
///
/// Overlaps are resolved destructively by [`cut_through`](Board::cut_through):
///
/// ```
/// use recorte::{Board, Color};
///
/// let mut board = Board::new(10, 10);
/// // Created first, so it stays on top where the two overlap.
/// let top = board.make_new_shape_with_color(|x, y| x < 3 && y < 3, Color::BLACK);
/// let bottom = board.make_new_shape_with_color(
///     |x, y| (2..5).contains(&x) && (2..5).contains(&y),
///     Color::WHITE,
/// );
///
/// board.cut_through();
///
/// assert!(board.shape_raster_at(top, 2, 2));
/// assert!(!board.shape_raster_at(bottom, 2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    connectivity: Connectivity,
    shapes: HashMap<ShapeId, Shape>,
    /// Insertion-ordered live handles. Splits remove the original and append
    /// the parts, so positions are not stable across [`Board::cut_through`].
    order: Vec<ShapeId>,
    next_id: u64,
    grid: Grid,
}

impl Board {
    /// Creates an empty board with the default four-connectivity labeling.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_connectivity(width, height, Connectivity::default())
    }

    /// Creates an empty board with an explicit [`Connectivity`] choice for
    /// component labeling.
    pub fn with_connectivity(width: usize, height: usize, connectivity: Connectivity) -> Self {
        Self {
            width,
            height,
            connectivity,
            shapes: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
            grid: Grid::new(width, height),
        }
    }

    /// Canvas width, fixed at construction.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height, fixed at construction.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The connectivity used when re-deriving components after a cut.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Creates a shape from a membership predicate with a random color.
    ///
    /// See [`make_new_shape_with_color`](Board::make_new_shape_with_color).
    pub fn make_new_shape(&mut self, predicate: impl Fn(usize, usize) -> bool) -> ShapeId {
        self.make_new_shape_with_color(predicate, Color::random())
    }

    /// Creates a shape from a membership predicate, evaluated once per
    /// canvas cell, and registers it in the occupancy grid.
    ///
    /// At cells already occupied, the new shape slides underneath the
    /// existing occupants: earlier-created shapes stay topmost until a move
    /// re-surfaces something else.
    pub fn make_new_shape_with_color(
        &mut self,
        predicate: impl Fn(usize, usize) -> bool,
        color: Color,
    ) -> ShapeId {
        let shape = Shape::from_predicate(self.width, self.height, color, predicate);
        self.insert_shape(shape)
    }

    /// Translates a shape by `(dx, dy)`, updating its raster in place and
    /// the occupancy grid cell by cell.
    ///
    /// The delta must keep the shape's bounding box inside the canvas:
    /// `-x_min <= dx <= width - x_max`, and likewise for `dy`. A violating
    /// delta is rejected with [`MoveError::OutOfRange`] and nothing is
    /// mutated; the error carries the permitted interval so the caller can
    /// clamp and retry. A successful move never changes the shape's
    /// component count.
    ///
    /// A handle that no longer resolves (the shape was cut away) is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use recorte::{Axis, Board, Color, MoveError};
    ///
    /// let mut board = Board::new(10, 10);
    /// let square = board.make_new_shape_with_color(
    ///     |x, y| (2..5).contains(&x) && (2..5).contains(&y),
    ///     Color::BLACK,
    /// );
    ///
    /// assert_eq!(
    ///     board.move_shape(square, -5, 0),
    ///     Err(MoveError::OutOfRange { axis: Axis::X, delta: -5, lo: -2, hi: 5 })
    /// );
    /// board.move_shape(square, -2, 0).unwrap();
    /// assert!(board.shape_raster_at(square, 0, 2));
    /// ```
    pub fn move_shape(&mut self, id: ShapeId, dx: isize, dy: isize) -> Result<(), MoveError> {
        let Some(shape) = self.shapes.get_mut(&id) else {
            debug!(%id, "move requested for a shape that no longer exists");
            return Ok(());
        };
        let before = shape.bounds();
        if before.is_empty() {
            return Ok(());
        }

        validate_axis(Axis::X, dx, -(before.x_min as isize), (self.width - before.x_max) as isize)?;
        validate_axis(Axis::Y, dy, -(before.y_min as isize), (self.height - before.y_max) as isize)?;

        let after = before.translated(dx, dy);

        // Per-axis scan direction chosen so a source cell is always read
        // before anything overwrites it; the raster is translated in place
        // without a scratch buffer.
        for x in axis_order(before.x_min, before.x_max, dx) {
            for y in axis_order(before.y_min, before.y_max, dy) {
                let to_x = (x as isize + dx) as usize;
                let to_y = (y as isize + dy) as usize;
                let cell = shape.cell(x, y);
                shape.set_cell(to_x, to_y, cell);
                if !after.contains(x, y) {
                    shape.set_cell(x, y, None);
                }
                if self.grid.remove(id, x, y) {
                    self.grid.insert_front(id, to_x, to_y);
                }
            }
        }

        // Translation preserves topology, so the box shifts with no rescan.
        shape.set_bounds(after);
        Ok(())
    }

    /// Flattens every overlap: each cell keeps only its topmost occupant,
    /// losing shapes have the cell cleared from their raster, and every
    /// affected shape is re-analyzed over its pre-cut bounding box.
    ///
    /// Re-analysis can leave a shape intact, delete it (no cells left), or
    /// split it into one new shape per connected component; split parts keep
    /// the original color but get fresh handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use recorte::{Board, Color};
    ///
    /// let mut board = Board::new(10, 10);
    /// let bar = board.make_new_shape_with_color(|x, y| x == 2 && y < 5, Color::BLACK);
    /// let blade = board.make_new_shape_with_color(|x, y| y == 2 && x < 5, Color::WHITE);
    /// // Surface the blade so it wins the overlap at (2, 2).
    /// board.move_shape(blade, 0, 0).unwrap();
    ///
    /// board.cut_through();
    ///
    /// // The bar was severed into two one-cell-wide parts.
    /// assert!(board.shape(bar).is_none());
    /// assert_eq!(board.shapes().count(), 3);
    /// ```
    pub fn cut_through(&mut self) {
        let mut affected: HashSet<ShapeId> = HashSet::new();
        for y in 0..self.height {
            for x in 0..self.width {
                for id in self.grid.collapse_to_top(x, y) {
                    if let Some(shape) = self.shapes.get_mut(&id) {
                        shape.set_cell(x, y, None);
                    }
                    affected.insert(id);
                }
            }
        }
        if affected.is_empty() {
            return;
        }
        debug!(affected = affected.len(), "cut-through flattened overlaps");

        for id in affected {
            let Some(shape) = self.shapes.get_mut(&id) else {
                continue;
            };
            let pre_cut = shape.bounds();
            let map = shape.calculate_params(pre_cut, self.connectivity);
            match map.len() {
                0 => {
                    debug!(%id, "shape fully cut away");
                    self.remove_shape(id);
                }
                1 => {}
                parts => {
                    debug!(%id, parts, "shape severed into parts");
                    self.split_shape(id, pre_cut, &map);
                }
            }
        }
    }

    /// The visible shape at a cell, if any. Out-of-canvas coordinates
    /// answer `None`.
    pub fn topmost_shape_at(&self, x: usize, y: usize) -> Option<ShapeId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.grid.occupants(x, y).first().copied()
    }

    /// The visible color at a cell: what a renderer paints there, if any
    /// shape is present.
    pub fn topmost_color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.topmost_shape_at(x, y)
            .and_then(|id| self.shape_color(id))
    }

    /// The color of a shape, or `None` for a dead handle.
    pub fn shape_color(&self, id: ShapeId) -> Option<Color> {
        self.shapes.get(&id).map(Shape::color)
    }

    /// Whether a shape occupies a cell. Dead handles and out-of-canvas
    /// coordinates answer `false`.
    pub fn shape_raster_at(&self, id: ShapeId, x: usize, y: usize) -> bool {
        self.shapes.get(&id).is_some_and(|shape| shape.raster_at(x, y))
    }

    /// Borrows a shape, or `None` for a dead handle.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// All live handles in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.order.iter().copied()
    }

    /// Verifies the board's structural invariants: the occupancy grid and
    /// every shape's raster agree at every cell, and every cached bounding
    /// box is tight. Returns the first violation found.
    ///
    /// A violation means some mutation upstream has a bug; the check never
    /// repairs anything.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for y in 0..self.height {
            for x in 0..self.width {
                let occupants = self.grid.occupants(x, y);
                for (&id, shape) in &self.shapes {
                    let in_grid = occupants.contains(&id);
                    let in_raster = shape.raster_at(x, y);
                    if in_grid != in_raster {
                        return Err(ConsistencyError::OccupancyMismatch {
                            id,
                            x,
                            y,
                            raster: in_raster,
                            grid: in_grid,
                        });
                    }
                }
            }
        }
        for (&id, shape) in &self.shapes {
            let tight = shape.tight_bounds();
            if shape.bounds() != tight {
                return Err(ConsistencyError::LooseBounds {
                    id,
                    cached: shape.bounds(),
                    tight,
                });
            }
        }
        Ok(())
    }

    /// Registers a shape in the arena and the grid. Creation and split
    /// synthesis share this path.
    fn insert_shape(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        let bounds = shape.bounds();
        for y in bounds.y_min..bounds.y_max {
            for x in bounds.x_min..bounds.x_max {
                if shape.raster_at(x, y) {
                    self.grid.push_back(id, x, y);
                }
            }
        }
        self.shapes.insert(id, shape);
        self.order.push(id);
        id
    }

    /// Drops a shape whose grid entries are already gone.
    fn remove_shape(&mut self, id: ShapeId) {
        self.shapes.remove(&id);
        self.order.retain(|&live| live != id);
    }

    /// Replaces a multi-component shape with one shape per component. The
    /// parts are built from a read-only scan first; the arena and grid are
    /// only mutated afterwards.
    fn split_shape(&mut self, id: ShapeId, rect: Bounds, map: &ComponentMap) {
        let parts: Vec<Shape> = {
            let parent = &self.shapes[&id];
            (0..map.len())
                .map(|component| Shape::from_component(parent, rect, map, component))
                .collect()
        };
        // The rescan rectangle may not cover every stale reference, so the
        // original handle is purged canvas-wide.
        self.grid.purge(id);
        self.remove_shape(id);
        for part in parts {
            self.insert_shape(part);
        }
    }
}

fn validate_axis(axis: Axis, delta: isize, lo: isize, hi: isize) -> Result<(), MoveError> {
    if (lo..=hi).contains(&delta) {
        return Ok(());
    }
    if delta == 0 {
        warn!(%axis, lo, hi, "zero-length move failed range validation");
        return Err(MoveError::Degenerate { axis });
    }
    Err(MoveError::OutOfRange {
        axis,
        delta,
        lo,
        hi,
    })
}

/// Cell visit order along one axis for an in-place translated copy: moving
/// toward negative coordinates scans ascending from the min edge, otherwise
/// descending from the max edge, so no source cell is overwritten before it
/// is read.
fn axis_order(min: usize, max: usize, delta: isize) -> impl Iterator<Item = usize> {
    let ascending = delta < 0;
    let forward = ascending.then(|| min..max);
    let backward = (!ascending).then(|| (min..max).rev());
    forward
        .into_iter()
        .flatten()
        .chain(backward.into_iter().flatten())
}
