use crate::bounds::Bounds;
use crate::raster::Raster;

/// Neighbour lookback used while labeling connected components.
///
/// The scan is strictly row-major, so only cells already visited can be
/// linked to: the cell to the left and the cells in the row above.
///
/// - `Four`: left and up only. Two regions that touch solely at a diagonal
///   count as separate components.
/// - `Eight`: additionally links up-left and up-right, so diagonally
///   touching regions stay one component.
///
/// `Four` is the default and matches the classic behavior of this engine;
/// the choice is deliberate configuration, not an accident of the scan
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Left and up links only (default).
    #[default]
    Four,
    /// Left, up, up-left and up-right links.
    Eight,
}

/// The labeling produced by one rescan of a raster rectangle.
///
/// Components are numbered densely from zero in order of their first-seen
/// cell. Queries outside the scanned rectangle return `false`, never an
/// error.
///
/// # Examples
///
/// ```
/// use recorte::{Bounds, Color, Connectivity, Shape};
///
/// // Two 2x2 blocks that only touch diagonally.
/// let mut shape = Shape::from_predicate(10, 10, Color::BLACK, |x, y| {
///     (x < 2 && y < 2) || ((5..7).contains(&x) && (5..7).contains(&y))
/// });
/// let map = shape.calculate_params(Bounds::full(10, 10), Connectivity::Four);
///
/// assert_eq!(map.len(), 2);
/// assert!(map.contains(0, 0, 0));
/// assert!(map.contains(5, 5, 1));
/// assert!(!map.contains(5, 5, 0));
/// assert!(!map.contains(3, 3, 0)); // unoccupied cell
/// ```
#[derive(Debug, Clone)]
pub struct ComponentMap {
    rect: Bounds,
    rect_width: usize,
    /// Provisional label per rectangle cell, row-major.
    labels: Vec<Option<u32>>,
    /// Provisional label -> dense component index.
    resolved: Vec<u32>,
    count: usize,
}

impl ComponentMap {
    /// The number of connected components found in the rectangle.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether cell `(x, y)` belongs to the `component`-th component.
    ///
    /// Cells outside the scanned rectangle, unoccupied cells, and component
    /// indices at or above [`len`](ComponentMap::len) all answer `false`.
    pub fn contains(&self, x: usize, y: usize, component: usize) -> bool {
        if component >= self.count || !self.rect.contains(x, y) {
            return false;
        }
        let index = (y - self.rect.y_min) * self.rect_width + (x - self.rect.x_min);
        match self.labels[index] {
            Some(label) => self.resolved[label as usize] as usize == component,
            None => false,
        }
    }
}

pub(crate) struct RegionAnalysis {
    /// Tight bounds of the occupied cells found inside the rectangle.
    pub(crate) bounds: Bounds,
    pub(crate) components: ComponentMap,
}

/// Union-find over provisional component ids, with path compression and
/// union by size.
#[derive(Default)]
struct LabelForest {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl LabelForest {
    fn make(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        self.size.push(1);
        id
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn find(&mut self, mut id: u32) -> u32 {
        while self.parent[id as usize] != id {
            // Path halving: point at the grandparent as we walk up.
            let grandparent = self.parent[self.parent[id as usize] as usize];
            self.parent[id as usize] = grandparent;
            id = grandparent;
        }
        id
    }

    /// Merges the classes of two roots and returns the surviving root.
    fn union(&mut self, a: u32, b: u32) -> u32 {
        debug_assert!(self.parent[a as usize] == a && self.parent[b as usize] == b);
        let (keep, absorb) = if self.size[a as usize] >= self.size[b as usize] {
            (a, b)
        } else {
            (b, a)
        };
        self.parent[absorb as usize] = keep;
        self.size[keep as usize] += self.size[absorb as usize];
        keep
    }
}

fn adopt(forest: &mut LabelForest, label: &mut Option<u32>, neighbour: u32) {
    let neighbour_root = forest.find(neighbour);
    match *label {
        None => *label = Some(neighbour_root),
        Some(current) => {
            let current_root = forest.find(current);
            if current_root != neighbour_root {
                *label = Some(forest.union(current_root, neighbour_root));
            }
        }
    }
}

/// Scans `rect` of `raster` once, row-major, computing the tight bounds of
/// the occupied cells and their connected components in the same pass.
///
/// Merges resolve immediately: with only already-visited neighbours linked,
/// two provisional components can first touch exactly at the cell under the
/// cursor, so the union happens the moment it is discovered.
pub(crate) fn analyze(raster: &Raster, rect: Bounds, connectivity: Connectivity) -> RegionAnalysis {
    let rect_width = rect.width();
    let mut bounds = Bounds::empty(raster.width(), raster.height());
    let mut labels: Vec<Option<u32>> = vec![None; rect_width * rect.height()];
    let mut forest = LabelForest::default();

    for y in rect.y_min..rect.y_max {
        for x in rect.x_min..rect.x_max {
            if !raster.is_occupied(x, y) {
                continue;
            }
            bounds.include(x, y);

            let index = (y - rect.y_min) * rect_width + (x - rect.x_min);
            let mut label: Option<u32> = None;

            if x > rect.x_min {
                if let Some(left) = labels[index - 1] {
                    adopt(&mut forest, &mut label, left);
                }
            }
            if y > rect.y_min {
                let above = index - rect_width;
                if let Some(up) = labels[above] {
                    adopt(&mut forest, &mut label, up);
                }
                if connectivity == Connectivity::Eight {
                    if x > rect.x_min {
                        if let Some(up_left) = labels[above - 1] {
                            adopt(&mut forest, &mut label, up_left);
                        }
                    }
                    if x + 1 < rect.x_max {
                        if let Some(up_right) = labels[above + 1] {
                            adopt(&mut forest, &mut label, up_right);
                        }
                    }
                }
            }

            labels[index] = Some(label.unwrap_or_else(|| forest.make()));
        }
    }

    // Renumber surviving roots densely, in first-seen order. Provisional ids
    // are allocated in first-seen order, so numbering a class at its
    // smallest member id preserves that order across merges.
    let mut dense_of_root: Vec<Option<u32>> = vec![None; forest.len()];
    let mut resolved = vec![0u32; forest.len()];
    let mut count = 0u32;
    for id in 0..forest.len() as u32 {
        let root = forest.find(id);
        let slot = &mut dense_of_root[root as usize];
        let dense = *slot.get_or_insert_with(|| {
            let next = count;
            count += 1;
            next
        });
        resolved[id as usize] = dense;
    }

    RegionAnalysis {
        bounds,
        components: ComponentMap {
            rect,
            rect_width,
            labels,
            resolved,
            count: count as usize,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{analyze, Connectivity};
    use crate::bounds::Bounds;
    use crate::color::Color;
    use crate::raster::Raster;

    fn raster_from(rows: &[&str]) -> Raster {
        let mut raster = Raster::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == '#' {
                    raster.set(x, y, Some(Color::BLACK));
                }
            }
        }
        raster
    }

    #[test]
    fn empty_raster_has_no_components() {
        let raster = Raster::new(4, 4);
        let analysis = analyze(&raster, Bounds::full(4, 4), Connectivity::Four);
        assert_eq!(analysis.components.len(), 0);
        assert!(analysis.bounds.is_empty());
    }

    #[test]
    fn u_shape_merges_into_one_component() {
        // The two columns get separate provisional ids that merge on the
        // bottom row.
        let raster = raster_from(&[
            "#.#", //
            "#.#", //
            "###",
        ]);
        let analysis = analyze(&raster, Bounds::full(3, 3), Connectivity::Four);
        assert_eq!(analysis.components.len(), 1);
        assert!(analysis.components.contains(0, 0, 0));
        assert!(analysis.components.contains(2, 0, 0));
        assert_eq!(analysis.bounds, Bounds::new(0, 3, 0, 3));
    }

    #[test]
    fn diagonal_blocks_split_under_four_connectivity() {
        let raster = raster_from(&[
            "##..", //
            "##..", //
            "..##", //
            "..##",
        ]);
        let four = analyze(&raster, Bounds::full(4, 4), Connectivity::Four);
        assert_eq!(four.components.len(), 2);
        // First-seen numbering: the top-left block is component 0.
        assert!(four.components.contains(0, 0, 0));
        assert!(four.components.contains(2, 2, 1));

        let eight = analyze(&raster, Bounds::full(4, 4), Connectivity::Eight);
        assert_eq!(eight.components.len(), 1);
    }

    #[test]
    fn up_right_link_merges_under_eight_connectivity() {
        let raster = raster_from(&[
            ".#", //
            "#.",
        ]);
        assert_eq!(
            analyze(&raster, Bounds::full(2, 2), Connectivity::Four)
                .components
                .len(),
            2
        );
        assert_eq!(
            analyze(&raster, Bounds::full(2, 2), Connectivity::Eight)
                .components
                .len(),
            1
        );
    }

    #[test]
    fn membership_outside_rectangle_is_false() {
        let raster = raster_from(&[
            "##", //
            "##",
        ]);
        let rect = Bounds::new(0, 1, 0, 2);
        let analysis = analyze(&raster, rect, Connectivity::Four);
        assert_eq!(analysis.components.len(), 1);
        assert!(analysis.components.contains(0, 0, 0));
        assert!(!analysis.components.contains(1, 0, 0));
        assert!(!analysis.components.contains(0, 0, 1));
        assert_eq!(analysis.bounds, Bounds::new(0, 1, 0, 2));
    }

    #[test]
    fn rescan_restricted_to_rect_sees_only_that_rect() {
        let raster = raster_from(&[
            "#..#", //
            "....", //
            "#..#",
        ]);
        let analysis = analyze(&raster, Bounds::new(0, 4, 0, 1), Connectivity::Four);
        assert_eq!(analysis.components.len(), 2);
        assert_eq!(analysis.bounds, Bounds::new(0, 4, 0, 1));
    }
}
