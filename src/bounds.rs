/// An axis-aligned cell rectangle, half-open on the max edges: a cell
/// `(x, y)` is inside iff `x_min <= x < x_max` and `y_min <= y < y_max`.
///
/// `Bounds` serves two roles:
///
/// - the cached bounding box of a [`crate::Shape`], kept *tight*: every
///   occupied cell lies inside it and every edge touches at least one
///   occupied cell, unless the shape is empty, in which case the box is the
///   inverted sentinel produced by [`Bounds::empty`];
/// - the rescan rectangle handed to [`crate::Shape::calculate_params`].
///
/// # Examples
///
/// ```
/// use recorte::Bounds;
///
/// let mut bounds = Bounds::empty(10, 10);
/// assert!(bounds.is_empty());
///
/// bounds.include(3, 4);
/// bounds.include(5, 4);
/// assert_eq!(bounds, Bounds::new(3, 6, 4, 5));
/// assert_eq!(bounds.width(), 3);
/// assert_eq!(bounds.height(), 1);
/// assert!(bounds.contains(5, 4));
/// assert!(!bounds.contains(6, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl Bounds {
    /// Creates bounds from explicit edges, max edges exclusive.
    pub fn new(x_min: usize, x_max: usize, y_min: usize, y_max: usize) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The empty sentinel for a canvas of the given size: `x_min` starts at
    /// the canvas width and `x_max` at zero, so the first [`include`] call
    /// snaps both edges to the included cell.
    ///
    /// [`include`]: Bounds::include
    pub fn empty(canvas_width: usize, canvas_height: usize) -> Self {
        Self {
            x_min: canvas_width,
            x_max: 0,
            y_min: canvas_height,
            y_max: 0,
        }
    }

    /// Bounds covering the whole canvas.
    pub fn full(canvas_width: usize, canvas_height: usize) -> Self {
        Self {
            x_min: 0,
            x_max: canvas_width,
            y_min: 0,
            y_max: canvas_height,
        }
    }

    /// Whether the rectangle contains no cells.
    pub fn is_empty(&self) -> bool {
        self.x_max <= self.x_min || self.y_max <= self.y_min
    }

    pub fn width(&self) -> usize {
        self.x_max.saturating_sub(self.x_min)
    }

    pub fn height(&self) -> usize {
        self.y_max.saturating_sub(self.y_min)
    }

    /// Whether the cell lies inside the rectangle.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
    }

    /// Grows the rectangle to cover the given cell.
    pub fn include(&mut self, x: usize, y: usize) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x + 1);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y + 1);
    }

    /// The rectangle shifted by `(dx, dy)`.
    ///
    /// Callers must have validated that the shifted edges stay inside the
    /// canvas; the mover does this before translating a shape's bounds.
    pub fn translated(&self, dx: isize, dy: isize) -> Self {
        Self {
            x_min: (self.x_min as isize + dx) as usize,
            x_max: (self.x_max as isize + dx) as usize,
            y_min: (self.y_min as isize + dy) as usize,
            y_max: (self.y_max as isize + dy) as usize,
        }
    }
}
