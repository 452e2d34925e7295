//! The `shape` module provides the sparse colored raster that every tracked
//! shape owns, together with its cached tight bounding box and the
//! rectangle-restricted rescan that re-derives both the box and the shape's
//! connected components after a mutation.

use crate::bounds::Bounds;
use crate::color::Color;
use crate::components::{self, ComponentMap, Connectivity};
use crate::raster::Raster;

/// A set of canvas cells sharing one color, with a cached tight bounding
/// box.
///
/// A shape's cells need not be connected; the cut-through operation is what
/// splits a shape whose cells have come apart into one shape per connected
/// component. Shapes are usually created through
/// [`crate::Board::make_new_shape`] and addressed by [`crate::ShapeId`], but
/// they work standalone too:
///
/// # Examples
///
/// ```
/// use recorte::{Bounds, Color, Connectivity, Shape};
///
/// let mut square = Shape::from_predicate(10, 10, Color::rgb(200, 40, 40), |x, y| {
///     (2..5).contains(&x) && (2..5).contains(&y)
/// });
///
/// assert_eq!(square.bounds(), Bounds::new(2, 5, 2, 5));
/// assert_eq!(square.occupied_cells(), 9);
///
/// let map = square.calculate_params(Bounds::full(10, 10), Connectivity::Four);
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Shape {
    raster: Raster,
    color: Color,
    bounds: Bounds,
}

impl Shape {
    /// Creates a shape over a `canvas_width` x `canvas_height` canvas from a
    /// membership predicate, evaluated once per cell.
    pub fn from_predicate(
        canvas_width: usize,
        canvas_height: usize,
        color: Color,
        predicate: impl Fn(usize, usize) -> bool,
    ) -> Self {
        let mut raster = Raster::new(canvas_width, canvas_height);
        let mut bounds = Bounds::empty(canvas_width, canvas_height);
        for y in 0..canvas_height {
            for x in 0..canvas_width {
                if predicate(x, y) {
                    raster.set(x, y, Some(color));
                    bounds.include(x, y);
                }
            }
        }
        Self {
            raster,
            color,
            bounds,
        }
    }

    /// Synthesizes the `component`-th component of `parent`'s rescanned
    /// rectangle as a fresh shape with the parent's color.
    pub(crate) fn from_component(
        parent: &Shape,
        rect: Bounds,
        map: &ComponentMap,
        component: usize,
    ) -> Self {
        let mut raster = Raster::new(parent.raster.width(), parent.raster.height());
        let mut bounds = Bounds::empty(parent.raster.width(), parent.raster.height());
        for y in rect.y_min..rect.y_max {
            for x in rect.x_min..rect.x_max {
                if map.contains(x, y, component) {
                    raster.set(x, y, parent.raster.get(x, y));
                    bounds.include(x, y);
                }
            }
        }
        Self {
            raster,
            color: parent.color,
            bounds,
        }
    }

    /// The shape's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The cached tight bounding box, or the empty sentinel if the shape has
    /// no cells.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether the shape occupies cell `(x, y)`. Out-of-canvas coordinates
    /// answer `false`.
    pub fn raster_at(&self, x: usize, y: usize) -> bool {
        x < self.raster.width() && y < self.raster.height() && self.raster.is_occupied(x, y)
    }

    /// The number of occupied cells, counted within the cached bounds.
    pub fn occupied_cells(&self) -> usize {
        let mut count = 0;
        for y in self.bounds.y_min..self.bounds.y_max {
            for x in self.bounds.x_min..self.bounds.x_max {
                if self.raster.is_occupied(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Rescans the given rectangle: recomputes the bounding box restricted
    /// to it and labels the connected components of the occupied cells
    /// within it, in one row-major pass.
    ///
    /// Side effect: this shape's cached bounds are replaced by the
    /// rectangle-restricted result. The caller must pass a rectangle that
    /// bounds every cell that could have changed *and* every cell the shape
    /// still occupies — an optimization precondition, not something this
    /// method can verify. Restricting the rescan to the touched footprint is
    /// what keeps mutations from costing a full-canvas sweep.
    pub fn calculate_params(&mut self, rect: Bounds, connectivity: Connectivity) -> ComponentMap {
        let analysis = components::analyze(&self.raster, rect, connectivity);
        self.bounds = analysis.bounds;
        analysis.components
    }

    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> Option<Color> {
        self.raster.get(x, y)
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Option<Color>) {
        self.raster.set(x, y, cell);
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Recomputes the tight bounds from scratch over the whole canvas.
    /// Consistency-check helper; the hot paths maintain bounds
    /// incrementally.
    pub(crate) fn tight_bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty(self.raster.width(), self.raster.height());
        for y in 0..self.raster.height() {
            for x in 0..self.raster.width() {
                if self.raster.is_occupied(x, y) {
                    bounds.include(x, y);
                }
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;
    use crate::bounds::Bounds;
    use crate::color::Color;
    use crate::components::Connectivity;

    #[test]
    fn from_predicate_computes_tight_bounds() {
        let shape = Shape::from_predicate(10, 10, Color::BLACK, |x, y| x == 7 && y >= 3 && y < 6);
        assert_eq!(shape.bounds(), Bounds::new(7, 8, 3, 6));
        assert_eq!(shape.occupied_cells(), 3);
        assert!(shape.raster_at(7, 4));
        assert!(!shape.raster_at(7, 6));
        assert!(!shape.raster_at(10, 10));
    }

    #[test]
    fn empty_predicate_yields_sentinel_bounds() {
        let shape = Shape::from_predicate(6, 4, Color::BLACK, |_, _| false);
        assert!(shape.bounds().is_empty());
        assert_eq!(shape.bounds(), Bounds::empty(6, 4));
        assert_eq!(shape.occupied_cells(), 0);
    }

    #[test]
    fn calculate_params_restricts_bounds_to_the_rectangle() {
        let mut shape = Shape::from_predicate(8, 8, Color::BLACK, |x, _| x < 6);
        let map = shape.calculate_params(Bounds::new(0, 3, 0, 8), Connectivity::Four);
        assert_eq!(map.len(), 1);
        assert_eq!(shape.bounds(), Bounds::new(0, 3, 0, 8));
    }

    #[test]
    fn calculate_params_after_severing_reports_both_parts() {
        let mut shape = Shape::from_predicate(9, 3, Color::BLACK, |_, y| y == 1);
        shape.set_cell(4, 1, None);
        let map = shape.calculate_params(Bounds::full(9, 3), Connectivity::Four);
        assert_eq!(map.len(), 2);
        assert!(map.contains(0, 1, 0));
        assert!(map.contains(8, 1, 1));
        assert!(!map.contains(4, 1, 0));
        assert!(!map.contains(4, 1, 1));
        assert_eq!(shape.bounds(), Bounds::new(0, 9, 1, 2));
    }

    #[test]
    fn annulus_is_a_single_component() {
        // A ring around (2, 2): left/up lookback alone must still join the
        // two arms around the hole.
        let mut shape = Shape::from_predicate(5, 5, Color::BLACK, |x, y| {
            (1..4).contains(&x) && (1..4).contains(&y)
        });
        shape.set_cell(2, 2, None);
        let map = shape.calculate_params(Bounds::full(5, 5), Connectivity::Four);
        assert_eq!(map.len(), 1);
        assert_eq!(shape.bounds(), Bounds::new(1, 4, 1, 4));
    }
}
