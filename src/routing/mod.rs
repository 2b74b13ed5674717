//------------------------------------------------------------------------------------------------//
// other modules

use std::rc::Rc;

use crate::defaults::{Cost, Point};
use crate::err::Error;
use crate::grid::{GridPoint, HananGrid};
use crate::subsets::TerminalSubset;

//------------------------------------------------------------------------------------------------//
// own modules

mod dijkstra_steiner;
pub mod future_cost;
mod prim;

pub use dijkstra_steiner::DijkstraSteiner;
pub use prim::PrimSteiner;

//------------------------------------------------------------------------------------------------//
// Label

/// A partial tree of the search: a Steiner tree on `subset` plus `vertex`, rooted at `vertex`.
///
/// Only sink bits may be set in the subset; the root terminal is never encoded.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Label {
    pub vertex: GridPoint,
    pub subset: TerminalSubset,
}

//------------------------------------------------------------------------------------------------//
// factory

/// One constructor per future-cost estimator, sparing callers the type plumbing.
pub mod factory {
    use std::rc::Rc;

    use crate::grid::HananGrid;

    use super::future_cost::{
        BbFutureCost, DefaultFutureCost, MaxFutureCost, NullFutureCost, OneTreeFutureCost,
    };
    use super::DijkstraSteiner;

    /// Plain Dijkstra-Steiner without any estimate.
    pub fn plain(grid: Rc<HananGrid>) -> DijkstraSteiner<NullFutureCost> {
        DijkstraSteiner::new(grid)
    }

    pub fn bounding_box(grid: Rc<HananGrid>) -> DijkstraSteiner<BbFutureCost> {
        DijkstraSteiner::new(grid)
    }

    pub fn one_tree(grid: Rc<HananGrid>) -> DijkstraSteiner<OneTreeFutureCost> {
        DijkstraSteiner::new(grid)
    }

    pub fn max(
        grid: Rc<HananGrid>,
    ) -> DijkstraSteiner<MaxFutureCost<OneTreeFutureCost, BbFutureCost>> {
        DijkstraSteiner::<DefaultFutureCost>::new(grid)
    }
}

//------------------------------------------------------------------------------------------------//
// end-to-end

/// Builds the Hanan grid for the given terminals and runs the search with the default
/// estimator.
pub fn compute_optimum_cost(terminals: &[Point]) -> Result<Cost, Error> {
    let grid = Rc::new(HananGrid::new(terminals)?);
    Ok(factory::max(grid).get_optimum_cost())
}
