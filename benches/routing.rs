use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::rc::Rc;

use steinergrid::defaults::Point;
use steinergrid::grid::HananGrid;
use steinergrid::routing;

fn instance() -> Vec<Point> {
    vec![
        [0, 0, 0],
        [18, 2, 9],
        [3, 17, 4],
        [11, 8, 16],
        [7, 1, 12],
        [15, 14, 2],
        [2, 9, 18],
        [9, 19, 10],
        [19, 19, 19],
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    let terminals = instance();

    c.bench_function("dijkstra_steiner max(one-tree, bb)", |b| {
        b.iter(|| {
            let grid = match HananGrid::new(black_box(&terminals)) {
                Ok(grid) => Rc::new(grid),
                Err(msg) => panic!("Could not build the Hanan grid. ERROR: {}", msg),
            };
            routing::factory::max(grid).get_optimum_cost()
        })
    });

    c.bench_function("dijkstra_steiner bounding-box", |b| {
        b.iter(|| {
            let grid = match HananGrid::new(black_box(&terminals)) {
                Ok(grid) => Rc::new(grid),
                Err(msg) => panic!("Could not build the Hanan grid. ERROR: {}", msg),
            };
            routing::factory::bounding_box(grid).get_optimum_cost()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
