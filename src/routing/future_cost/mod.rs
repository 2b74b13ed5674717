//------------------------------------------------------------------------------------------------//
// other modules

use std::{cell::RefCell, cmp, rc::Rc};

use crate::defaults::Cost;
use crate::grid::HananGrid;
use crate::routing::Label;
use crate::subsets::SubsetIndexer;

//------------------------------------------------------------------------------------------------//
// own modules

mod bounding_box;
mod one_tree;

pub use bounding_box::BbFutureCost;
pub use one_tree::OneTreeFutureCost;

//------------------------------------------------------------------------------------------------//
// FutureCost

/// An admissible lower bound on the cost of completing a label to the full tree, used as the
/// A*-term of the search's priority key.
///
/// Implementations may keep memoization tables and cached rows for repeated calls, which is why
/// `lower_bound` takes `&mut self`; observably they are pure functions of (grid, label), and a
/// memo hit must never change the returned value. The lower bound of the stop label (the root
/// vertex with every sink covered) is zero for every implementation.
pub trait FutureCost {
    fn new(grid: Rc<HananGrid>, indexer: Rc<RefCell<SubsetIndexer>>) -> Self;

    fn lower_bound(&mut self, label: &Label) -> Cost;
}

//------------------------------------------------------------------------------------------------//
// NullFutureCost

/// No estimate at all, reducing the search to a plain Dijkstra-Steiner run.
pub struct NullFutureCost;

impl FutureCost for NullFutureCost {
    fn new(_grid: Rc<HananGrid>, _indexer: Rc<RefCell<SubsetIndexer>>) -> NullFutureCost {
        NullFutureCost
    }

    fn lower_bound(&mut self, _label: &Label) -> Cost {
        0
    }
}

//------------------------------------------------------------------------------------------------//
// MaxFutureCost

/// The pointwise maximum of two estimators, sharing one grid and one subset indexer.
///
/// The maximum of two admissible lower bounds is itself admissible.
pub struct MaxFutureCost<A, B> {
    cost_a: A,
    cost_b: B,
}

impl<A, B> FutureCost for MaxFutureCost<A, B>
where
    A: FutureCost,
    B: FutureCost,
{
    fn new(grid: Rc<HananGrid>, indexer: Rc<RefCell<SubsetIndexer>>) -> MaxFutureCost<A, B> {
        MaxFutureCost {
            cost_a: A::new(Rc::clone(&grid), Rc::clone(&indexer)),
            cost_b: B::new(grid, indexer),
        }
    }

    fn lower_bound(&mut self, label: &Label) -> Cost {
        cmp::max(self.cost_a.lower_bound(label), self.cost_b.lower_bound(label))
    }
}

/// The estimator the end-to-end entry point runs with.
pub type DefaultFutureCost = MaxFutureCost<OneTreeFutureCost, BbFutureCost>;
