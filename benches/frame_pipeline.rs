use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ascii_anim::core::{draw_circle, draw_line, Grid};
use ascii_anim::engine::{demo_scene, AnimConfig, FrameDriver};
use ascii_anim::types::{Circle, Point};

fn bench_line(c: &mut Criterion) {
    let mut grid = Grid::new(80, 24).unwrap();

    c.bench_function("draw_line_80x24_diagonal", |b| {
        b.iter(|| {
            draw_line(&mut grid, black_box(Point::new(0, 0)), black_box(Point::new(79, 23)), '*');
        })
    });
}

fn bench_circle(c: &mut Criterion) {
    let mut grid = Grid::new(80, 24).unwrap();

    c.bench_function("draw_circle_r10", |b| {
        b.iter(|| {
            draw_circle(&mut grid, black_box(Circle::new(40, 12, 10)), 'o');
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let grid = Grid::new(80, 24).unwrap();
    let mut out = String::new();

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            grid.render_into(black_box(&mut out));
        })
    });
}

fn bench_demo_frame(c: &mut Criterion) {
    let mut driver = FrameDriver::new(&AnimConfig::default(), demo_scene()).unwrap();
    let mut frame = 0u64;

    c.bench_function("demo_frame_40x15", |b| {
        b.iter(|| {
            frame = frame.wrapping_add(1);
            black_box(driver.draw_frame(frame).len());
        })
    });
}

criterion_group!(benches, bench_line, bench_circle, bench_render, bench_demo_frame);
criterion_main!(benches);
