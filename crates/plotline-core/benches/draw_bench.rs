use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotline_core::raster::{render_png_bytes, RenderOptions};
use plotline_core::{Chart, ChartConfig, ChartKind, PointerEvent, Record};

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x * 0.01).sin() * 10.0 + x * 0.0001;
            Record::new().with("x", x).with("y", y)
        })
        .collect()
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    for &n in &[1_000usize, 5_000usize] {
        let data = records(n);
        for (name, kind) in [
            ("scatter", ChartKind::Scatter),
            ("line", ChartKind::Line),
            ("histogram", ChartKind::Histogram),
        ] {
            group.bench_function(format!("{name}_{n}"), |b| {
                let cfg = ChartConfig { kind, ..ChartConfig::default() };
                let chart = Chart::new(cfg);
                b.iter(|| -> Result<()> {
                    let drawn = chart.draw(&data)?;
                    black_box(drawn.marks.len());
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let data = records(300);
    let mut drawn = Chart::new(ChartConfig { voronoi: true, ..ChartConfig::default() })
        .draw(&data)
        .expect("draw");
    c.bench_function("hover_move_voronoi_300", |b| {
        let mut x = 0.0;
        b.iter(|| -> Result<()> {
            x = (x + 7.0) % 540.0;
            drawn.pointer(PointerEvent::Move { x, y: 270.0 })?;
            black_box(drawn.hover_state());
            Ok(())
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let data = records(2_000);
    let drawn = Chart::new(ChartConfig { kind: ChartKind::Line, ..ChartConfig::default() })
        .draw(&data)
        .expect("draw");
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    c.bench_function("render_png_bytes_line_2000", |b| {
        b.iter(|| -> Result<()> {
            let bytes = render_png_bytes(&drawn.surface, &opts)?;
            black_box(bytes);
            Ok(())
        });
    });
}

criterion_group!(benches, bench_draw, bench_hover, bench_render);
criterion_main!(benches);
