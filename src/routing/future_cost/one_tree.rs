use std::{cell::RefCell, cmp::Reverse, collections::BinaryHeap, rc::Rc};

use crate::defaults::{capacity::TerminalVec, Cost, TerminalIndex, INVALID_COST, MAX_TERMINALS};
use crate::grid::HananGrid;
use crate::routing::Label;
use crate::subsets::{SubsetIndexer, SubsetMap, TerminalSubset};

use super::FutureCost;

/// Half of a 1-tree cost: an MST over the not yet covered terminals plus the root, extended by
/// the two cheapest edges from the label's vertex into that set.
///
/// Every tree completing the label contains such a 1-tree doubled, hence halving (rounding up)
/// keeps the bound admissible. MST costs are memoized per subset through the shared indexer;
/// terminal-to-terminal distances are sliced out of the grid's table once at construction.
pub struct OneTreeFutureCost {
    grid: Rc<HananGrid>,
    terminal_distances: Vec<TerminalVec<Cost>>,
    known_tree_costs: SubsetMap<Cost>,
}

impl FutureCost for OneTreeFutureCost {
    fn new(grid: Rc<HananGrid>, indexer: Rc<RefCell<SubsetIndexer>>) -> OneTreeFutureCost {
        let terminal_distances = grid
            .terminals()
            .iter()
            .map(|terminal| {
                grid.distances_to_terminals(terminal.global_index())
                    .iter()
                    .copied()
                    .collect()
            })
            .collect();
        OneTreeFutureCost {
            grid,
            terminal_distances,
            known_tree_costs: SubsetMap::new(indexer, INVALID_COST),
        }
    }

    fn lower_bound(&mut self, label: &Label) -> Cost {
        let distances = self.grid.distances_to_terminals(label.vertex.global_index());
        let mut min_edge = INVALID_COST;
        let mut second_min_edge = INVALID_COST;
        for terminal in label.subset.complement(self.grid.num_terminals()).iter() {
            let cost = distances[terminal as usize];
            if cost < second_min_edge {
                if cost <= min_edge {
                    second_min_edge = min_edge;
                    min_edge = cost;
                } else {
                    second_min_edge = cost;
                }
            }
        }

        let tree_cost = self.tree_cost(label.subset);
        if second_min_edge != INVALID_COST {
            (tree_cost + min_edge + second_min_edge + 1) / 2
        } else {
            // Only the root is left, so the MST over it is empty and the cheapest edge closes
            // the tree on its own.
            debug_assert_eq!(tree_cost, 0);
            min_edge
        }
    }
}

impl OneTreeFutureCost {
    fn tree_cost(&mut self, subset: TerminalSubset) -> Cost {
        let known = *self.known_tree_costs.get_or_insert(subset);
        if known != INVALID_COST {
            return known;
        }
        let cost = self.compute_tree_cost(subset);
        *self.known_tree_costs.get_or_insert(subset) = cost;
        cost
    }

    /// Prim's algorithm over the terminals outside of `subset` (the root included).
    fn compute_tree_cost(&self, subset: TerminalSubset) -> Cost {
        let terminals_to_consider: TerminalVec<TerminalIndex> =
            subset.complement(self.grid.num_terminals()).iter().collect();
        if terminals_to_consider.is_empty() {
            return 0;
        }

        let mut heap: BinaryHeap<Reverse<(Cost, TerminalIndex)>> = BinaryHeap::new();
        heap.push(Reverse((0, terminals_to_consider[0])));
        let mut is_connected = [false; MAX_TERMINALS];
        let mut num_connected = 0;
        let mut total_cost = 0;
        while let Some(Reverse((edge_cost, terminal))) = heap.pop() {
            if is_connected[terminal as usize] {
                continue;
            }
            is_connected[terminal as usize] = true;
            total_cost += edge_cost;
            num_connected += 1;
            if num_connected == terminals_to_consider.len() {
                break;
            }
            for &other_terminal in &terminals_to_consider {
                if !is_connected[other_terminal as usize] {
                    heap.push(Reverse((
                        self.terminal_distances[terminal as usize][other_terminal as usize],
                        other_terminal,
                    )));
                }
            }
        }
        total_cost
    }
}
