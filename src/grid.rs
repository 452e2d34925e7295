use smallvec::SmallVec;

use crate::id::ShapeId;

/// Occupant list for one cell, front = topmost. Shapes rarely stack deep,
/// so the list stays inline in the common case.
type CellList = SmallVec<[ShapeId; 4]>;

/// The occupancy index: for every canvas cell, the ordered list of shapes
/// occupying it. Index 0 is the topmost shape, the one hit-testing and
/// cut-through treat as the visible surface.
///
/// Invariant (maintained by the board): a handle appears in cell `(x, y)`'s
/// list iff that shape's raster is occupied at `(x, y)`.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    width: usize,
    cells: Vec<CellList>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![CellList::new(); width * height],
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub(crate) fn occupants(&self, x: usize, y: usize) -> &[ShapeId] {
        &self.cells[self.index(x, y)]
    }

    /// Prepends the handle, making the shape topmost at the cell. Used by
    /// the mover: a dragged shape surfaces above whatever it lands on.
    pub(crate) fn insert_front(&mut self, id: ShapeId, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index].insert(0, id);
    }

    /// Appends the handle. Used when a shape is created: new shapes slide
    /// underneath existing occupants.
    pub(crate) fn push_back(&mut self, id: ShapeId, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index].push(id);
    }

    /// Removes exactly one matching entry, preserving order. A no-op
    /// returning `false` if the shape is not present at the cell.
    pub(crate) fn remove(&mut self, id: ShapeId, x: usize, y: usize) -> bool {
        let index = self.index(x, y);
        let cell = &mut self.cells[index];
        match cell.iter().position(|&occupant| occupant == id) {
            Some(position) => {
                cell.remove(position);
                true
            }
            None => false,
        }
    }

    /// Truncates the cell's occupant list to its first entry, returning the
    /// evicted tail in stacking order.
    pub(crate) fn collapse_to_top(&mut self, x: usize, y: usize) -> CellList {
        let index = self.index(x, y);
        let cell = &mut self.cells[index];
        if cell.len() <= 1 {
            return CellList::new();
        }
        cell.drain(1..).collect()
    }

    /// Removes every occurrence of the handle across the whole canvas.
    /// Needed when deleting a shape that may still be referenced outside a
    /// rescanned rectangle.
    pub(crate) fn purge(&mut self, id: ShapeId) {
        for cell in &mut self.cells {
            cell.retain(|occupant| *occupant != id);
        }
    }
}
