use steinergrid::defaults::{AxisIndex, Point, NUM_DIMENSIONS};
use steinergrid::grid::HananGrid;

mod helpers;

//--------------------------------------------------------------------------------------------//
// helpers

fn example_terminals() -> Vec<Point> {
    vec![
        [0, 0, 0],
        [10, 0, 5],
        [0, 10, 5],
        [3, 7, 0],
        [10, 10, 10],
    ]
}

/// Every tuple of axis indices of the grid.
fn all_index_tuples(grid: &HananGrid) -> Vec<[AxisIndex; NUM_DIMENSIONS]> {
    let mut tuples = vec![[0 as AxisIndex; NUM_DIMENSIONS]];
    for (dimension, axis_grid) in grid.axis_grids().iter().enumerate() {
        let mut extended = Vec::with_capacity(tuples.len() * axis_grid.len());
        for tuple in &tuples {
            for index in 0..axis_grid.len() {
                let mut tuple = *tuple;
                tuple[dimension] = index as AxisIndex;
                extended.push(tuple);
            }
        }
        tuples = extended;
    }
    tuples
}

//--------------------------------------------------------------------------------------------//
// tests

#[test]
fn terminals_map_back_to_their_coordinates() {
    let terminals = example_terminals();
    let grid = helpers::build_grid(&terminals);
    for (point, grid_point) in terminals.iter().zip(grid.terminals().iter()) {
        assert_eq!(&grid.to_coordinates(grid_point.indices()), point);
    }
}

#[test]
fn global_indices_are_flattened_index_tuples() {
    let terminals = example_terminals();
    let grid = helpers::build_grid(&terminals);
    for tuple in all_index_tuples(&grid) {
        let grid_point = grid.grid_point(tuple);
        let mut expected = 0;
        let mut factor = 1;
        for (dimension, axis_grid) in grid.axis_grids().iter().enumerate() {
            expected += tuple[dimension] as usize * factor;
            factor *= axis_grid.len();
        }
        assert_eq!(*grid_point.global_index(), expected);
    }
}

#[test]
fn axis_grids_are_sorted_and_strictly_ascending() {
    let terminals = example_terminals();
    let grid = helpers::build_grid(&terminals);
    for axis_grid in grid.axis_grids() {
        let positions = axis_grid.positions();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(axis_grid.differences().len() + 1, positions.len());
        for (i, difference) in axis_grid.differences().iter().enumerate() {
            assert_eq!(positions[i] + difference, positions[i + 1]);
        }
    }
}

#[test]
fn distance_table_matches_direct_distances() {
    let terminals = example_terminals();
    let grid = helpers::build_grid(&terminals);
    let terminal_coordinates: Vec<Point> = grid
        .terminals()
        .iter()
        .map(|terminal| grid.to_coordinates(terminal.indices()))
        .collect();
    for tuple in all_index_tuples(&grid) {
        let grid_point = grid.grid_point(tuple);
        let here = grid.to_coordinates(&tuple);
        let distances = grid.distances_to_terminals(grid_point.global_index());
        assert_eq!(distances.len(), terminal_coordinates.len());
        for (distance, coordinates) in distances.iter().zip(terminal_coordinates.iter()) {
            assert_eq!(*distance, HananGrid::distance(&here, coordinates));
        }
        // Repeated reads return identical values.
        assert_eq!(grid.distances_to_terminals(grid_point.global_index()), distances);
    }
}

#[test]
fn neighbors_differ_in_exactly_one_axis() {
    let terminals = example_terminals();
    let grid = helpers::build_grid(&terminals);
    for tuple in all_index_tuples(&grid) {
        let grid_point = grid.grid_point(tuple);
        let here = grid.to_coordinates(&tuple);
        let mut num_neighbors = 0;
        grid.for_each_neighbor(grid_point, |neighbor, edge_cost| {
            num_neighbors += 1;
            let differing: Vec<usize> = (0..NUM_DIMENSIONS)
                .filter(|&dimension| neighbor.indices()[dimension] != tuple[dimension])
                .collect();
            assert_eq!(differing.len(), 1);
            let dimension = differing[0];
            let difference =
                (neighbor.indices()[dimension] as i32 - tuple[dimension] as i32).abs();
            assert_eq!(difference, 1);
            let there = grid.to_coordinates(neighbor.indices());
            assert_eq!(edge_cost, HananGrid::distance(&here, &there));
            assert_eq!(
                grid.grid_point(*neighbor.indices()).global_index(),
                neighbor.global_index()
            );
        });
        assert!(num_neighbors <= 2 * NUM_DIMENSIONS);
    }
}

#[test]
fn too_many_terminals_are_rejected() {
    let terminals: Vec<Point> = (0..21).map(|i| [i, 0, 0]).collect();
    match HananGrid::new(&terminals) {
        Ok(_) => panic!("21 terminals should not build a grid."),
        Err(e) => assert!(format!("{}", e).contains("too many terminals")),
    }
}

#[test]
fn duplicate_terminals_collapse_in_the_axis_grids() {
    let terminals = vec![[5, 5, 5], [5, 5, 5], [0, 0, 0]];
    let grid = helpers::build_grid(&terminals);
    assert_eq!(grid.num_terminals(), 3);
    assert_eq!(grid.num_vertices(), 8);
    assert_eq!(
        grid.terminals()[0].global_index(),
        grid.terminals()[1].global_index()
    );
}
