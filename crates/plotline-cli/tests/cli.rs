// File: crates/plotline-cli/tests/cli.rs
// Purpose: Drive the lesson charts through the CLI surface and check the files it writes.

use std::process::Command;

use clap::Parser;
use plotline_cli::{draw, parse_point, run, Args};
use tempfile::TempDir;

fn args(list: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("plotline").chain(list.iter().copied())).expect("valid args")
}

fn run_plotline(list: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_plotline"))
        .args(list)
        .output()
        .expect("failed to execute plotline")
}

#[test]
fn parse_point_accepts_pairs() {
    assert_eq!(parse_point("12,34.5"), Ok((12.0, 34.5)));
    assert_eq!(parse_point(" 1 , 2 "), Ok((1.0, 2.0)));
    assert!(parse_point("12").is_err());
    assert!(parse_point("a,2").is_err());
}

#[test]
fn line_chart_writes_svg_and_png() {
    let dir = TempDir::new().unwrap();
    let svg = dir.path().join("line.svg");
    let png = dir.path().join("nested/line.png");
    let a = args(&["line", "--out", svg.to_str().unwrap(), "--png", png.to_str().unwrap()]);

    let outcome = run(&a).expect("line chart renders");
    assert_eq!(outcome.marks, 60);
    let text = std::fs::read_to_string(&svg).unwrap();
    assert!(text.starts_with("<svg"));
    assert!(text.contains("class=\"threshold\""));
    let bytes = std::fs::read(&png).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn scatter_hover_reports_tooltip() {
    let dir = TempDir::new().unwrap();
    let svg = dir.path().join("scatter.svg");
    let a = args(&["scatter", "--voronoi", "--hover", "270,270", "--out", svg.to_str().unwrap()]);

    let outcome = run(&a).expect("scatter renders");
    let tooltip = outcome.tooltip.expect("hover requested");
    assert!(tooltip.visible);
    let labels: Vec<&str> = tooltip.rows.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["dewPoint", "humidity"]);
}

#[test]
fn histogram_counts_every_record() {
    let drawn = draw(&args(&["histogram", "--field", "humidity", "--bins", "5"])).unwrap();
    let total: usize = drawn
        .marks
        .iter()
        .map(|m| m.tooltip[1].1.parse::<usize>().unwrap())
        .sum();
    assert_eq!(total, 60);
}

#[test]
fn events_hover_fills_second_square() {
    let drawn = draw(&args(&["events", "--hover", "150,50"])).unwrap();
    assert_eq!(drawn.marks.len(), 4);
    let svg = drawn.to_svg();
    // cornflowerblue on the hovered square, lightgrey on the rest
    assert!(svg.contains("#6495ed"));
    assert_eq!(svg.matches("#d3d3d3").count(), 3);
}

#[test]
fn config_file_replaces_flags() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("chart.json");
    std::fs::write(
        &cfg,
        r#"{"kind": "histogram", "x": {"field": "dewPoint", "type": "number"}, "y": null,
            "width": 500, "height": 300, "bins": {"thresholds": 4}}"#,
    )
    .unwrap();

    let drawn = draw(&args(&["scatter", "--config", cfg.to_str().unwrap()])).unwrap();
    assert_eq!(drawn.config.kind, plotline_core::ChartKind::Histogram);
    assert_eq!(drawn.dimensions.width(), 500.0);
}

#[test]
fn csv_dataset_is_accepted() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("points.csv");
    std::fs::write(&data, "a,b\n1,2\n3,4\n5,1\n").unwrap();
    let drawn = draw(&args(&["scatter", "--data", data.to_str().unwrap(), "--x", "a", "--y", "b"])).unwrap();
    assert_eq!(drawn.marks.len(), 3);
}

#[test]
fn binary_reports_missing_field() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("x.svg");
    let output = run_plotline(&["scatter", "--x", "nope", "--out", out.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"), "stderr: {}", stderr);
    assert!(!out.exists());
}

#[test]
fn binary_help_lists_subcommands() {
    let output = run_plotline(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["line", "scatter", "histogram", "events"] {
        assert!(stdout.contains(cmd));
    }
}

#[test]
fn no_threshold_drops_the_band() {
    let drawn = draw(&args(&["line", "--no-threshold"])).unwrap();
    assert!(drawn.config.threshold.is_none());
    assert!(drawn.surface.select_class("threshold").is_empty());
    assert!(Args::try_parse_from(["plotline", "line", "--no-threshold", "--threshold", "40"]).is_err());
}

#[test]
fn histogram_domain_needs_clamp_for_outliers() {
    // The bundled humidity runs from 0.42 to 0.8.
    let err = draw(&args(&["histogram", "--domain", "0,0.5"])).unwrap_err();
    assert!(format!("{:#}", err).contains("outside"), "error: {:#}", err);

    let drawn = draw(&args(&["histogram", "--domain", "0,0.5", "--clamp"])).unwrap();
    let total: usize = drawn.marks.iter().map(|m| m.tooltip[1].1.parse::<usize>().unwrap()).sum();
    assert_eq!(total, 60);
    assert!(Args::try_parse_from(["plotline", "histogram", "--clamp"]).is_err());
}

#[test]
fn events_honour_theme_and_reject_config() {
    let drawn = draw(&args(&["events", "--theme", "dark"])).unwrap();
    let idle = plotline_core::Theme::dark().idle;
    assert_eq!(drawn.theme.idle, idle);
    assert_eq!(drawn.to_svg().matches(&idle.to_hex()).count(), 4);

    assert!(draw(&args(&["events", "--config", "chart.json"])).is_err());
}
