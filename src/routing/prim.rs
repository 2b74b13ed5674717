//------------------------------------------------------------------------------------------------//
// other modules

use std::{cmp::Reverse, collections::BinaryHeap, rc::Rc};

use log::debug;

use crate::defaults::{Cost, INVALID_COST};
use crate::grid::{GridPoint, HananGrid};

//------------------------------------------------------------------------------------------------//
// PrimSteiner

/// Grows a concrete Steiner tree terminal by terminal, each time attaching the next terminal in
/// input order through a shortest Hanan-grid path to the tree built so far.
///
/// The result is the cost of an actual tree, hence an upper bound on the optimum. One instance
/// serves one instance of the problem; the per-query data-structures are reused across the
/// per-terminal Dijkstra runs to save re-allocations.
pub struct PrimSteiner {
    grid: Rc<HananGrid>,
    costs: Vec<Cost>,
    predecessors: Vec<Option<GridPoint>>,
    is_in_tree: Vec<bool>,
    queue: BinaryHeap<Reverse<PrimEntry>>,
}

impl PrimSteiner {
    pub fn new(grid: Rc<HananGrid>) -> PrimSteiner {
        let num_vertices = grid.num_vertices();
        PrimSteiner {
            grid,
            costs: vec![INVALID_COST; num_vertices],
            predecessors: vec![None; num_vertices],
            is_in_tree: vec![false; num_vertices],
            queue: BinaryHeap::new(),
        }
    }

    pub fn compute_upper_bound(mut self) -> Cost {
        let terminals = self.grid.terminals().to_vec();
        if terminals.len() <= 1 {
            return 0;
        }

        self.is_in_tree[*terminals[0].global_index()] = true;
        let mut total_cost = 0;
        for terminal in terminals.iter().skip(1) {
            total_cost += self.connect(*terminal);
        }
        debug!("Prim-Steiner upper bound: {}", total_cost);
        total_cost
    }

    /// Dijkstra from the terminal until a tree vertex is settled; every vertex on the found path
    /// joins the tree.
    fn connect(&mut self, terminal: GridPoint) -> Cost {
        self.init_query();
        self.costs[*terminal.global_index()] = 0;
        self.queue.push(Reverse(PrimEntry {
            cost: 0,
            point: terminal,
        }));

        let grid = Rc::clone(&self.grid);
        while let Some(Reverse(PrimEntry { cost, point })) = self.queue.pop() {
            // First occurrence has lowest cost.
            if cost > self.costs[*point.global_index()] {
                continue;
            }
            if self.is_in_tree[*point.global_index()] {
                self.mark_path(point);
                return cost;
            }
            grid.for_each_neighbor(point, |neighbor, edge_cost| {
                let new_cost = cost + edge_cost;
                if new_cost < self.costs[*neighbor.global_index()] {
                    self.costs[*neighbor.global_index()] = new_cost;
                    self.predecessors[*neighbor.global_index()] = Some(point);
                    self.queue.push(Reverse(PrimEntry {
                        cost: new_cost,
                        point: neighbor,
                    }));
                }
            });
        }
        panic!("The Hanan grid is connected, so every terminal reaches the tree.");
    }

    /// Resets the query data-structures, saving re-allocations.
    fn init_query(&mut self) {
        self.costs.iter_mut().for_each(|cost| *cost = INVALID_COST);
        self.predecessors.iter_mut().for_each(|pred| *pred = None);
        self.queue.clear();
    }

    fn mark_path(&mut self, meeting_point: GridPoint) {
        let mut current = meeting_point;
        loop {
            self.is_in_tree[*current.global_index()] = true;
            match self.predecessors[*current.global_index()] {
                Some(predecessor) => current = predecessor,
                None => break,
            }
        }
    }
}

//------------------------------------------------------------------------------------------------//
// PrimEntry

#[derive(Copy, Clone)]
struct PrimEntry {
    cost: Cost,
    point: GridPoint,
}

mod entry {
    use super::PrimEntry;
    use std::cmp::Ordering;

    impl Ord for PrimEntry {
        fn cmp(&self, other: &PrimEntry) -> Ordering {
            self.cost
                .cmp(&other.cost)
                .then_with(|| self.point.global_index().cmp(&other.point.global_index()))
        }
    }

    impl PartialOrd for PrimEntry {
        fn partial_cmp(&self, other: &PrimEntry) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Eq for PrimEntry {}

    impl PartialEq for PrimEntry {
        fn eq(&self, other: &PrimEntry) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }
}
