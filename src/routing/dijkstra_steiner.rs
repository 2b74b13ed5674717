//------------------------------------------------------------------------------------------------//
// other modules

use std::{cell::RefCell, cmp::Reverse, collections::BinaryHeap, rc::Rc};

use log::{debug, info};

use crate::defaults::{
    capacity::TerminalVec, Cost, TerminalIndex, DEFAULT_LEMMA15_BOUND, INVALID_COST,
};
use crate::grid::HananGrid;
use crate::subsets::{LabelMap, SubsetIndexer, SubsetMap, TerminalSubset};

use super::future_cost::FutureCost;
use super::prim::PrimSteiner;
use super::Label;

//------------------------------------------------------------------------------------------------//
// DistanceToTerminal

/// A distance together with the terminal realizing it.
#[derive(Copy, Clone, Debug)]
struct DistanceToTerminal {
    distance: Cost,
    terminal: TerminalIndex,
}

impl Default for DistanceToTerminal {
    fn default() -> DistanceToTerminal {
        DistanceToTerminal {
            distance: INVALID_COST,
            terminal: 0,
        }
    }
}

//------------------------------------------------------------------------------------------------//
// DijkstraSteiner

/// The label-setting dynamic program over pairs (grid vertex, sink subset).
///
/// A label's settled cost is the optimum cost of a Steiner tree on its subset plus its vertex,
/// rooted at that vertex. Labels are settled in order of settled cost plus future cost; a label
/// spawns candidates by walking to grid neighbors and by merging with already settled labels on
/// disjoint subsets at the same vertex. Two complementary prunings cut the label space: a global
/// upper bound from the Prim-Steiner heuristic, and a per-subset bound on the cost of any
/// optimal tree containing the subset plus one more vertex (Lemma 15).
///
/// One instance serves one search and is consumed by `get_optimum_cost`.
pub struct DijkstraSteiner<FC: FutureCost> {
    grid: Rc<HananGrid>,
    future_cost: FC,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    best_cost: LabelMap<Cost>,
    fixed: LabelMap<bool>,
    fixed_by_vertex: Vec<Vec<(TerminalSubset, Cost)>>,
    lemma15_bound: SubsetMap<Cost>,
    lemma15_witness: SubsetMap<TerminalSubset>,
    cheapest_complement: SubsetMap<DistanceToTerminal>,
    terminal_distances: Vec<TerminalVec<Cost>>,
    global_upper_bound: Cost,
}

impl<FC: FutureCost> DijkstraSteiner<FC> {
    pub fn new(grid: Rc<HananGrid>) -> DijkstraSteiner<FC> {
        let indexer = Rc::new(RefCell::new(SubsetIndexer::new()));
        let num_vertices = grid.num_vertices();
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
        DijkstraSteiner {
            future_cost: FC::new(Rc::clone(&grid), Rc::clone(&indexer)),
            heap: BinaryHeap::new(),
            best_cost: LabelMap::new(Rc::clone(&indexer), num_vertices, INVALID_COST),
            fixed: LabelMap::new(Rc::clone(&indexer), num_vertices, false),
            fixed_by_vertex: vec![Vec::new(); num_vertices],
            lemma15_bound: SubsetMap::new(Rc::clone(&indexer), DEFAULT_LEMMA15_BOUND),
            lemma15_witness: SubsetMap::new(Rc::clone(&indexer), TerminalSubset::empty()),
            cheapest_complement: SubsetMap::new(indexer, DistanceToTerminal::default()),
            terminal_distances,
            global_upper_bound: INVALID_COST,
            grid,
        }
    }

    pub fn get_optimum_cost(mut self) -> Cost {
        let num_sinks = self.grid.num_non_root_terminals();
        if num_sinks == 0 {
            // A lone terminal (or none at all) is already connected.
            return 0;
        }

        self.global_upper_bound = PrimSteiner::new(Rc::clone(&self.grid)).compute_upper_bound();
        info!(
            "START Search on {} with upper bound {}",
            self.grid, self.global_upper_bound
        );

        let terminals = self.grid.terminals().to_vec();
        for (terminal_id, terminal) in terminals.iter().take(num_sinks).enumerate() {
            let label = Label {
                vertex: *terminal,
                subset: TerminalSubset::singleton(terminal_id as TerminalIndex),
            };
            self.handle_candidate(&label, 0);
        }
        let stop_label = Label {
            vertex: self.grid.root_terminal(),
            subset: TerminalSubset::full(num_sinks),
        };

        while let Some(Reverse(HeapEntry { priority, label })) = self.heap.pop() {
            if label == stop_label {
                // The future cost of the stop label is zero, so its priority is its exact cost.
                debug!("Finished search at priority {}", priority);
                return priority;
            }
            let vertex = label.vertex.global_index();
            if *self.fixed.read_or_default(label.subset, vertex) {
                continue;
            }
            *self.fixed.get_or_insert(label.subset, vertex) = true;
            let cost = *self.best_cost.read_or_default(label.subset, vertex);

            if cost > *self.lemma15_bound.read_or_default(label.subset) {
                continue;
            }
            self.update_lemma15(&label, cost);
            self.fixed_by_vertex[*vertex].push((label.subset, cost));

            let grid = Rc::clone(&self.grid);
            grid.for_each_neighbor(label.vertex, |neighbor, edge_cost| {
                let neighbor_label = Label {
                    vertex: neighbor,
                    subset: label.subset,
                };
                self.handle_candidate(&neighbor_label, cost + edge_cost);
            });

            self.merge_disjoint_sets(&label, cost);
        }
        panic!("The stop label has to leave the heap before it runs dry.");
    }

    /// The relaxation step shared by both update rules.
    fn handle_candidate(&mut self, label: &Label, candidate_cost: Cost) {
        if candidate_cost > self.global_upper_bound {
            return;
        }
        if candidate_cost > *self.lemma15_bound.read_or_default(label.subset) {
            return;
        }
        let vertex = label.vertex.global_index();
        if candidate_cost < *self.best_cost.read_or_default(label.subset, vertex) {
            debug_assert!(
                !*self.fixed.read_or_default(label.subset, vertex),
                "A fixed label must not improve."
            );
            *self.best_cost.get_or_insert(label.subset, vertex) = candidate_cost;
            let priority = candidate_cost + self.future_cost.lower_bound(label);
            // Stale duplicates on the heap are filtered by the fixed-check on pop.
            if priority <= self.global_upper_bound {
                self.heap.push(Reverse(HeapEntry {
                    priority,
                    label: *label,
                }));
            }
        }
    }

    /// Settling (v, I) at cost c yields a tree on I plus one extra vertex of cost at most
    /// c + min distance from v or I to the outside, which bounds every later label on I.
    fn update_lemma15(&mut self, label: &Label, cost: Cost) {
        let mut cheapest = self.cheapest_edge_to_complement(label.subset);
        let grid = Rc::clone(&self.grid);
        let distances = grid.distances_to_terminals(label.vertex.global_index());
        for terminal in label.subset.complement(grid.num_terminals()).iter() {
            let distance = distances[terminal as usize];
            if distance < cheapest.distance {
                cheapest = DistanceToTerminal { distance, terminal };
            }
        }

        let new_bound = cost + cheapest.distance;
        if new_bound < *self.lemma15_bound.read_or_default(label.subset) {
            *self.lemma15_bound.get_or_insert(label.subset) = new_bound;
            *self.lemma15_witness.get_or_insert(label.subset) =
                TerminalSubset::singleton(cheapest.terminal);
        }
    }

    /// Minimum distance between a terminal inside of `subset` and one outside, memoized.
    fn cheapest_edge_to_complement(&mut self, subset: TerminalSubset) -> DistanceToTerminal {
        let known = *self.cheapest_complement.read_or_default(subset);
        if known.distance != INVALID_COST {
            return known;
        }

        let complement = subset.complement(self.grid.num_terminals());
        let mut cheapest = DistanceToTerminal::default();
        if subset.is_empty() || complement.is_empty() {
            return cheapest;
        }
        for inside in subset.iter() {
            for outside in complement.iter() {
                let distance = self.terminal_distances[inside as usize][outside as usize];
                if distance < cheapest.distance {
                    cheapest = DistanceToTerminal {
                        distance,
                        terminal: outside,
                    };
                }
            }
        }
        *self.cheapest_complement.get_or_insert(subset) = cheapest;
        cheapest
    }

    /// The merge step: combine the settled label with every settled disjoint sink set at the
    /// same vertex, propagating Lemma-15 bounds onto the unions along the way.
    fn merge_disjoint_sets(&mut self, label: &Label, cost: Cost) {
        for (other_set, other_cost) in self.collect_fixed_disjoint_sets(label) {
            debug_assert!(other_set.is_disjoint(label.subset));
            let union_label = Label {
                vertex: label.vertex,
                subset: label.subset | other_set,
            };
            self.handle_candidate(&union_label, cost + other_cost);
            self.update_lemma15_for_union(label.subset, other_set);
        }
    }

    /// Two disjoint bounds add up to a bound for the union, as long as at least one witness
    /// does not interfere with the other subset.
    fn update_lemma15_for_union(&mut self, subset: TerminalSubset, other_set: TerminalSubset) {
        let combined = *self.lemma15_bound.read_or_default(subset)
            + *self.lemma15_bound.read_or_default(other_set);
        let union = subset | other_set;
        if combined >= *self.lemma15_bound.read_or_default(union) {
            return;
        }
        let witness = *self.lemma15_witness.read_or_default(subset);
        let other_witness = *self.lemma15_witness.read_or_default(other_set);
        if (witness & other_set).is_empty() || (other_witness & subset).is_empty() {
            *self.lemma15_bound.get_or_insert(union) = combined;
            *self.lemma15_witness.get_or_insert(union) = (witness | other_witness).without(union);
        }
    }

    /// All settled sink sets at the label's vertex disjoint from its subset.
    ///
    /// Either enumerates every subset of the complement and looks it up, or filters the list of
    /// settled sets at the vertex, whichever is expected to touch fewer entries. A map lookup
    /// costs roughly ten times a list step, hence the factor in the comparison.
    fn collect_fixed_disjoint_sets(&self, label: &Label) -> Vec<(TerminalSubset, Cost)> {
        let num_sinks = self.grid.num_non_root_terminals();
        let vertex = label.vertex.global_index();
        let num_fixed = self.fixed_by_vertex[*vertex].len();
        let num_candidates = (1usize << (num_sinks - label.subset.count())) - 1;

        let mut result = Vec::new();
        if 10 * num_candidates <= num_fixed {
            // Count through the subsets of the complement: bits of the base subset are forced
            // to one before the increment and masked off afterwards.
            let complement_mask = label.subset.complement(num_sinks).bits();
            let forced = !complement_mask;
            let mut bits: u32 = 0;
            loop {
                bits = (bits | forced).wrapping_add(1) & complement_mask;
                if bits == 0 {
                    break;
                }
                let other_set = TerminalSubset::from_bits(bits);
                if *self.fixed.read_or_default(other_set, vertex) {
                    let other_cost = *self.best_cost.read_or_default(other_set, vertex);
                    result.push((other_set, other_cost));
                }
            }
        } else {
            for &(other_set, other_cost) in &self.fixed_by_vertex[*vertex] {
                if other_set.is_disjoint(label.subset) {
                    result.push((other_set, other_cost));
                }
            }
        }
        result
    }
}

//------------------------------------------------------------------------------------------------//
// HeapEntry

#[derive(Copy, Clone)]
struct HeapEntry {
    priority: Cost,
    label: Label,
}

mod entry {
    use super::HeapEntry;
    use std::cmp::Ordering;

    impl Ord for HeapEntry {
        fn cmp(&self, other: &HeapEntry) -> Ordering {
            self.priority
                .cmp(&other.priority)
                .then_with(|| self.label.subset.cmp(&other.label.subset))
                .then_with(|| {
                    self.label
                        .vertex
                        .global_index()
                        .cmp(&other.label.vertex.global_index())
                })
        }
    }

    impl PartialOrd for HeapEntry {
        fn partial_cmp(&self, other: &HeapEntry) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Eq for HeapEntry {}

    impl PartialEq for HeapEntry {
        fn eq(&self, other: &HeapEntry) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }
}
