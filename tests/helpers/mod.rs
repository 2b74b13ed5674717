// Dead code allowed, because it is actually used in test-modules, but compiler doesn't recognize.

use std::rc::Rc;

use steinergrid::defaults::{Coord, Cost, Point, NUM_DIMENSIONS};
use steinergrid::grid::HananGrid;
use steinergrid::io;
use steinergrid::routing;

#[allow(dead_code)]
pub fn parse(input: &str) -> Vec<Point> {
    match io::Parser::parse_reader(input.as_bytes()) {
        Ok(terminals) => terminals,
        Err(msg) => panic!("Could not parse the instance. ERROR: {}", msg),
    }
}

#[allow(dead_code)]
pub fn build_grid(terminals: &[Point]) -> Rc<HananGrid> {
    match HananGrid::new(terminals) {
        Ok(grid) => Rc::new(grid),
        Err(msg) => panic!("Could not build the Hanan grid. ERROR: {}", msg),
    }
}

/// Runs the search once per future-cost estimator and checks that all four agree.
#[allow(dead_code)]
pub fn optimum_with_every_estimator(terminals: &[Point]) -> Cost {
    let grid = build_grid(terminals);
    let plain = routing::factory::plain(Rc::clone(&grid)).get_optimum_cost();
    let bounding_box = routing::factory::bounding_box(Rc::clone(&grid)).get_optimum_cost();
    let one_tree = routing::factory::one_tree(Rc::clone(&grid)).get_optimum_cost();
    let max = routing::factory::max(grid).get_optimum_cost();
    assert_eq!(
        plain, bounding_box,
        "Bounding-box estimate changes the optimum for {:?}",
        terminals
    );
    assert_eq!(
        plain, one_tree,
        "One-tree estimate changes the optimum for {:?}",
        terminals
    );
    assert_eq!(
        plain, max,
        "Max estimate changes the optimum for {:?}",
        terminals
    );
    plain
}

#[allow(dead_code)]
pub fn random_terminals<R: rand::Rng>(rng: &mut R, count: usize, max_coord: Coord) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let mut point = [0 as Coord; NUM_DIMENSIONS];
            for coordinate in point.iter_mut() {
                *coordinate = rng.gen_range(0, max_coord + 1);
            }
            point
        })
        .collect()
}
