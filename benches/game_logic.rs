use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{is_stuck, reduce_row, slide, GameState, Grid};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows([
        [2, 2, 4, 8],
        [16, 0, 16, 4],
        [2, 4, 0, 4],
        [128, 64, 64, 2],
    ])
    .unwrap()
}

fn bench_reduce_row(c: &mut Criterion) {
    c.bench_function("reduce_row", |b| {
        b.iter(|| reduce_row(black_box([2, 2, 4, 4])))
    });
}

fn bench_slide(c: &mut Criterion) {
    let grid = busy_grid();
    for dir in Direction::ALL {
        c.bench_function(&format!("slide_{}", dir.as_str()), |b| {
            b.iter(|| slide(black_box(&grid), dir))
        });
    }
}

fn bench_is_stuck(c: &mut Criterion) {
    let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    c.bench_function("is_stuck", |b| b.iter(|| is_stuck(black_box(&grid))));
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let mut state = GameState::with_grid(grid, 12345);
            state.apply_move(black_box(Direction::Left))
        })
    });
}

criterion_group!(
    benches,
    bench_reduce_row,
    bench_slide,
    bench_is_stuck,
    bench_apply_move
);
criterion_main!(benches);
