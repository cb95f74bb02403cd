use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use wavefield::engine::{AStarRule, SearchEngine};
use wavefield::grid::Grid;
use wavefield::heuristic::Manhattan;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");
    group.sample_size(50);

    let size = 256usize;

    group.bench_function("run_open_grid_to_corner", |b| {
        b.iter(|| {
            let mut grid: Grid<2, f64> = Grid::new([size, size]);
            let heuristic = Box::new(Manhattan::new(1.0).unwrap());
            let mut engine: SearchEngine<2, f64, Grid<2, f64>, AStarRule<2, f64>> =
                SearchEngine::new(AStarRule::new(1.0, heuristic).unwrap());
            engine.add_source(black_box([0, 0]));
            engine.add_goal(black_box([(size - 1) as i64, (size - 1) as i64]));
            engine.run(&mut grid).unwrap();
            black_box(engine.processed());
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}
criterion_main!(benches);
