//------------------------------------------------------------------------------------------------//
// other modules

use std::{
    fmt::{self, Display},
    ops::Deref,
};

use log::debug;

use crate::defaults::{AxisIndex, Coord, Cost, Point, MAX_TERMINALS, NUM_DIMENSIONS};
use crate::err::{ConfigError, Error};

//------------------------------------------------------------------------------------------------//
// VertexIndex

/// Dense number of one vertex of the Hanan grid.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct VertexIndex(pub usize);

impl Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for VertexIndex {
    type Target = usize;

    fn deref(&self) -> &usize {
        &self.0
    }
}

//------------------------------------------------------------------------------------------------//
// GridPoint

/// One vertex of the Hanan grid, addressed by its per-axis indices.
///
/// The global index is kept alongside and updated incrementally when stepping to a neighbor,
/// so map lookups never have to re-flatten the index tuple.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct GridPoint {
    indices: [AxisIndex; NUM_DIMENSIONS],
    global_index: VertexIndex,
}

impl GridPoint {
    pub fn indices(&self) -> &[AxisIndex; NUM_DIMENSIONS] {
        &self.indices
    }

    pub fn global_index(&self) -> VertexIndex {
        self.global_index
    }

    fn step_up(&self, dimension: usize, factor: usize) -> GridPoint {
        let mut indices = self.indices;
        indices[dimension] += 1;
        GridPoint {
            indices,
            global_index: VertexIndex(*self.global_index + factor),
        }
    }

    fn step_down(&self, dimension: usize, factor: usize) -> GridPoint {
        let mut indices = self.indices;
        indices[dimension] -= 1;
        GridPoint {
            indices,
            global_index: VertexIndex(*self.global_index - factor),
        }
    }
}

impl Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ indices: {:?}, idx: {} }}", self.indices, self.global_index)
    }
}

//------------------------------------------------------------------------------------------------//
// AxisGrid

/// The sorted distinct coordinates of one axis, plus their consecutive differences and the
/// factor this axis contributes to global vertex indices.
#[derive(Clone, Debug)]
pub struct AxisGrid {
    positions: Vec<Coord>,
    differences: Vec<Coord>,
    factor: usize,
}

impl AxisGrid {
    fn new(points: &[Point], dimension: usize, factor: usize) -> AxisGrid {
        let mut positions: Vec<Coord> = points.iter().map(|point| point[dimension]).collect();
        positions.sort_unstable();
        positions.dedup();
        let differences = positions.windows(2).map(|pair| pair[1] - pair[0]).collect();
        AxisGrid {
            positions,
            differences,
            factor,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    pub fn differences(&self) -> &[Coord] {
        &self.differences
    }

    fn index_for_coord(&self, position: Coord) -> AxisIndex {
        match self.positions.binary_search(&position) {
            Ok(index) => index as AxisIndex,
            // The grid is built from the very points that are looked up afterwards.
            Err(_) => panic!("Coordinate {} is not part of the axis grid.", position),
        }
    }
}

//------------------------------------------------------------------------------------------------//
// HananGrid

/// The axis-aligned grid induced by the terminals, known to contain an optimum rectilinear
/// Steiner tree.
///
/// Immutable after construction. The last terminal is the root by convention; all others are
/// sinks. Distances from every grid vertex to every terminal are precomputed at construction
/// and served from a flat table.
pub struct HananGrid {
    axis_grids: Vec<AxisGrid>,
    terminals: Vec<GridPoint>,
    distances: Vec<Cost>,
}

impl HananGrid {
    pub fn new(points: &[Point]) -> Result<HananGrid, Error> {
        if points.len() > MAX_TERMINALS {
            return Err(ConfigError::TooManyTerminals(points.len()).into());
        }

        let mut axis_grids = Vec::with_capacity(NUM_DIMENSIONS);
        let mut factor = 1;
        for dimension in 0..NUM_DIMENSIONS {
            let axis_grid = AxisGrid::new(points, dimension, factor);
            factor *= axis_grid.len();
            axis_grids.push(axis_grid);
        }

        let terminals = points
            .iter()
            .map(|point| Self::locate(&axis_grids, point))
            .collect();

        let mut grid = HananGrid {
            axis_grids,
            terminals,
            distances: Vec::new(),
        };
        grid.distances = grid.build_distance_table();
        debug!("Built {}", grid);
        Ok(grid)
    }

    fn locate(axis_grids: &[AxisGrid], point: &Point) -> GridPoint {
        let mut indices = [0 as AxisIndex; NUM_DIMENSIONS];
        let mut global_index = 0;
        for (dimension, axis_grid) in axis_grids.iter().enumerate() {
            let index = axis_grid.index_for_coord(point[dimension]);
            indices[dimension] = index;
            global_index += index as usize * axis_grid.factor;
        }
        GridPoint {
            indices,
            global_index: VertexIndex(global_index),
        }
    }

    /// The grid point for known-valid axis indices.
    pub fn grid_point(&self, indices: [AxisIndex; NUM_DIMENSIONS]) -> GridPoint {
        let mut global_index = 0;
        for (dimension, axis_grid) in self.axis_grids.iter().enumerate() {
            global_index += indices[dimension] as usize * axis_grid.factor;
        }
        GridPoint {
            indices,
            global_index: VertexIndex(global_index),
        }
    }

    pub fn axis_grids(&self) -> &[AxisGrid] {
        &self.axis_grids
    }

    pub fn num_vertices(&self) -> usize {
        self.axis_grids.iter().map(|axis_grid| axis_grid.len()).product()
    }

    pub fn terminals(&self) -> &[GridPoint] {
        &self.terminals
    }

    pub fn num_terminals(&self) -> usize {
        self.terminals.len()
    }

    pub fn num_non_root_terminals(&self) -> usize {
        self.terminals.len().saturating_sub(1)
    }

    /// The last terminal, serving as the search's final join point.
    pub fn root_terminal(&self) -> GridPoint {
        *self
            .terminals
            .last()
            .expect("A grid without terminals has no root.")
    }

    pub fn to_coordinates(&self, indices: &[AxisIndex; NUM_DIMENSIONS]) -> Point {
        let mut point = [0 as Coord; NUM_DIMENSIONS];
        for (dimension, axis_grid) in self.axis_grids.iter().enumerate() {
            point[dimension] = axis_grid.positions[indices[dimension] as usize];
        }
        point
    }

    pub fn distance(a: &Point, b: &Point) -> Cost {
        a.iter()
            .zip(b.iter())
            .map(|(&aa, &bb)| if aa > bb { aa - bb } else { bb - aa })
            .sum()
    }

    /// Distances from one grid vertex to every terminal, in terminal order.
    pub fn distances_to_terminals(&self, vertex: VertexIndex) -> &[Cost] {
        let num_terminals = self.num_terminals();
        &self.distances[*vertex * num_terminals..(*vertex + 1) * num_terminals]
    }

    /// Visits every grid neighbor of `here` together with the connecting edge's length.
    pub fn for_each_neighbor<V>(&self, here: GridPoint, mut visitor: V)
    where
        V: FnMut(GridPoint, Cost),
    {
        for (dimension, axis_grid) in self.axis_grids.iter().enumerate() {
            let axis_index = here.indices[dimension] as usize;
            if axis_index > 0 {
                visitor(
                    here.step_down(dimension, axis_grid.factor),
                    axis_grid.differences[axis_index - 1],
                );
            }
            if axis_index + 1 < axis_grid.len() {
                visitor(
                    here.step_up(dimension, axis_grid.factor),
                    axis_grid.differences[axis_index],
                );
            }
        }
    }

    fn build_distance_table(&self) -> Vec<Cost> {
        let terminal_coordinates: Vec<Point> = self
            .terminals
            .iter()
            .map(|terminal| self.to_coordinates(terminal.indices()))
            .collect();
        let mut distances = Vec::with_capacity(self.num_vertices() * self.terminals.len());
        for vertex in 0..self.num_vertices() {
            let here = self.to_coordinates(&self.decode(vertex));
            for coordinates in &terminal_coordinates {
                distances.push(Self::distance(&here, coordinates));
            }
        }
        distances
    }

    fn decode(&self, vertex: usize) -> [AxisIndex; NUM_DIMENSIONS] {
        let mut indices = [0 as AxisIndex; NUM_DIMENSIONS];
        for (dimension, axis_grid) in self.axis_grids.iter().enumerate() {
            indices[dimension] = ((vertex / axis_grid.factor) % axis_grid.len()) as AxisIndex;
        }
        indices
    }
}

impl Display for HananGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sizes: Vec<usize> = self.axis_grids.iter().map(|axis_grid| axis_grid.len()).collect();
        write!(
            f,
            "Hanan grid {{ axis-sizes: {:?}, vertices: {}, terminals: {} }}",
            sizes,
            self.num_vertices(),
            self.num_terminals()
        )
    }
}
