// File: crates/plotline-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Draws small deterministic charts and serializes them to SVG.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares text for an exact match.
// - Else, logs a note and returns; the inline assertions still run.

use plotline_core::{events_demo, Accessor, Chart, ChartConfig, ChartKind, PointerEvent, Record};

fn check(name: &str, svg: &str) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(format!("{name}.svg"));

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

fn points() -> Vec<Record> {
    [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]
        .iter()
        .map(|(x, y)| Record::new().with("x", *x).with("y", *y))
        .collect()
}

#[test]
fn golden_scatter() {
    let cfg = ChartConfig { width: 200.0, height: 200.0, x_label: "X".into(), y_label: "Y".into(), ..ChartConfig::default() };
    let drawn = Chart::new(cfg).draw(&points()).expect("draw");
    let svg = drawn.to_svg();
    assert!(svg.contains("id=\"wrapper\" width=\"200\" height=\"200\""));
    assert!(svg.contains("<g transform=\"translate(50,10)\" class=\"bounds\">"));
    // Bounded area is 140x140; nice domains are [0, 4] and [0, 1.6].
    assert!(svg.contains("<circle cx=\"0\" cy=\"140\" r=\"4\""));
    assert!(svg.contains("<circle cx=\"140\" cy=\"52.5\" r=\"4\""));
    assert_eq!(svg.matches("<circle").count(), 5);
    assert!(svg.contains(">X</text>") && svg.contains(">Y</text>"));
    check("scatter", &svg);
}

#[test]
fn golden_histogram() {
    let cfg = ChartConfig {
        kind: ChartKind::Histogram,
        width: 300.0,
        height: 200.0,
        x: Accessor::number("x"),
        y: None,
        ..ChartConfig::default()
    };
    let drawn = Chart::new(cfg).draw(&points()).expect("draw");
    let svg = drawn.to_svg();
    assert_eq!(svg.matches("class=\"bin\"").count(), drawn.marks.len());
    // One label per non-empty bin, five values in total.
    let labels: usize = svg
        .lines()
        .filter(|l| l.contains("class=\"bar-label\""))
        .filter_map(|l| l.rsplit_once("\">").and_then(|(_, t)| t.strip_suffix("</text>")))
        .map(|t| t.parse::<usize>().unwrap())
        .sum();
    assert_eq!(labels, 5);
    assert!(!svg.contains("class=\"y-axis\""));
    check("histogram", &svg);
}

#[test]
fn golden_events_hovered() {
    let mut drawn = events_demo(&["yellowgreen", "cornflowerblue", "seagreen", "slateblue"]).expect("draw");
    drawn.pointer(PointerEvent::Enter(1)).expect("hover");
    check("events_hovered", &drawn.to_svg());
}

#[test]
fn svg_groups_are_balanced() {
    let drawn = Chart::new(ChartConfig::default()).draw(&points()).expect("draw");
    let svg = drawn.to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"wrapper\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    let opens = svg
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("<g") && !l.ends_with("/>"))
        .count();
    assert_eq!(opens, svg.matches("</g>").count());
    assert!(svg.contains("transform=\"translate(50,10)\""));
}
