use std::{cell::RefCell, cmp, rc::Rc};

use crate::defaults::{Cost, NUM_DIMENSIONS};
use crate::grid::HananGrid;
use crate::routing::Label;
use crate::subsets::SubsetIndexer;

use super::FutureCost;

/// Half-perimeter of the axis-aligned bounding box spanned by the label's vertex, the not yet
/// covered terminals and the root.
///
/// Any tree connecting those points crosses every slab of the box at least once per axis.
pub struct BbFutureCost {
    grid: Rc<HananGrid>,
}

impl FutureCost for BbFutureCost {
    fn new(grid: Rc<HananGrid>, _indexer: Rc<RefCell<SubsetIndexer>>) -> BbFutureCost {
        BbFutureCost { grid }
    }

    fn lower_bound(&mut self, label: &Label) -> Cost {
        let mut grid_min = *label.vertex.indices();
        let mut grid_max = grid_min;
        let terminals = self.grid.terminals();
        // Axis indices are ordered like the coordinates they stand for, so the extreme indices
        // yield the extreme coordinates.
        for terminal in label.subset.complement(self.grid.num_terminals()).iter() {
            let indices = terminals[terminal as usize].indices();
            for dimension in 0..NUM_DIMENSIONS {
                grid_min[dimension] = cmp::min(grid_min[dimension], indices[dimension]);
                grid_max[dimension] = cmp::max(grid_max[dimension], indices[dimension]);
            }
        }
        HananGrid::distance(
            &self.grid.to_coordinates(&grid_min),
            &self.grid.to_coordinates(&grid_max),
        )
    }
}
