use crate::color::Color;

/// Per-shape cell storage: a flat canvas-sized buffer indexed by
/// `y * width + x`, one `Option<Color>` per cell. `None` means the cell is
/// not part of the shape.
#[derive(Debug, Clone)]
pub(crate) struct Raster {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl Raster {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)].is_some()
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Option<Color>) {
        let index = self.index(x, y);
        self.cells[index] = cell;
    }
}
