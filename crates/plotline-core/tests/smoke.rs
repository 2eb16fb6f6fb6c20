// File: crates/plotline-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs through Skia.

use plotline_core::raster::{render_png_bytes, RenderOptions};
use plotline_core::{Accessor, Chart, ChartConfig, ChartKind, Record, Rgba, Theme};

fn records() -> Vec<Record> {
    [("2018-01-01", 28.0), ("2018-01-02", 35.5), ("2018-01-03", 31.0), ("2018-01-04", 40.0)]
        .iter()
        .map(|(d, t)| Record::new().with("date", *d).with("temperatureMax", *t))
        .collect()
}

fn line_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        width: 400.0,
        height: 200.0,
        x: Accessor::time("date", "%Y-%m-%d"),
        y: Some(Accessor::number("temperatureMax")),
        threshold: Some(32.0),
        ..ChartConfig::default()
    }
}

#[test]
fn render_smoke_png() {
    let drawn = Chart::new(line_config()).draw(&records()).expect("draw");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    drawn.render_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = drawn.render_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_has_surface_size_and_background() {
    let drawn = Chart::new(line_config()).draw(&records()).expect("draw");
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::for_theme(&Theme::dark()) };
    let bytes = render_png_bytes(&drawn.surface, &opts).expect("render bytes");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (400, 200));
    // Top-left corner is margin, so it shows the background only.
    let bg = Theme::dark().background;
    assert_eq!(img.get_pixel(1, 1).0, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn scale_option_multiplies_pixels() {
    let records: Vec<Record> = (0..5).map(|i| Record::new().with("x", i).with("y", i * i)).collect();
    let drawn = Chart::new(ChartConfig { width: 120.0, height: 120.0, ..ChartConfig::default() })
        .draw(&records)
        .expect("draw");
    let opts = RenderOptions { scale: 2.0, draw_labels: false, ..RenderOptions::default() };
    let img = image::load_from_memory(&render_png_bytes(&drawn.surface, &opts).unwrap()).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (240, 240));
}

#[test]
fn hovered_square_is_painted_in_its_color() {
    let mut drawn = plotline_core::events_demo(&["yellowgreen", "cornflowerblue"]).expect("draw");
    drawn.pointer(plotline_core::PointerEvent::Enter(0)).unwrap();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let img = image::load_from_memory(&render_png_bytes(&drawn.surface, &opts).unwrap()).unwrap().to_rgba8();
    let green = Rgba::parse("yellowgreen").unwrap();
    let grey = Rgba::parse("lightgrey").unwrap();
    assert_eq!(img.get_pixel(50, 50).0, [green.r, green.g, green.b, 255]);
    assert_eq!(img.get_pixel(160, 50).0, [grey.r, grey.g, grey.b, 255]);
}
