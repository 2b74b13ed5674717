//------------------------------------------------------------------------------------------------//
// compile-time configuration

/// Number of axes of the integer grid.
pub const NUM_DIMENSIONS: usize = 3;
/// Hard bound on the number of terminals per instance.
///
/// Terminal subsets are stored as bit-patterns of this width, so raising it beyond the backing
/// word would need a wider subset representation.
pub const MAX_TERMINALS: usize = 20;

//------------------------------------------------------------------------------------------------//
// scalar types

pub type Coord = u32;
/// Has to hold twice the maximum possible tree cost, see `DEFAULT_LEMMA15_BOUND`.
pub type Cost = u32;
pub type TerminalIndex = u8;
pub type AxisIndex = u8;

pub type Point = [Coord; NUM_DIMENSIONS];

/// Sentinel for "no cost known yet".
pub const INVALID_COST: Cost = std::u32::MAX;
/// Initial value of per-subset upper bounds.
///
/// Two of these bounds are summed when merging disjoint subsets, so the sentinel is half of
/// `INVALID_COST` to keep that sum from wrapping.
pub const DEFAULT_LEMMA15_BOUND: Cost = INVALID_COST / 2;

//------------------------------------------------------------------------------------------------//
// capacities

pub mod capacity {
    use smallvec::SmallVec;

    /// Scratch vectors holding at most one entry per terminal, kept off the heap.
    pub type TerminalVec<T> = SmallVec<[T; super::MAX_TERMINALS]>;
}
