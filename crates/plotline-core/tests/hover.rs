// File: crates/plotline-core/tests/hover.rs
// Purpose: Two-state hover machine: tooltip contents, fill changes and focus-dot lifecycle.

use plotline_core::interaction::FOCUS_DOT_CLASS;
use plotline_core::{events_demo, Chart, ChartConfig, ChartError, HoverState, PointerEvent, Record, Rgba};

fn scatter() -> plotline_core::DrawnChart {
    let records: Vec<Record> = [(1.0, 1.0), (5.0, 5.0), (9.0, 2.0)]
        .iter()
        .map(|(x, y)| Record::new().with("x", *x).with("y", *y))
        .collect();
    Chart::new(ChartConfig { voronoi: true, ..ChartConfig::default() }).draw(&records).unwrap()
}

#[test]
fn a_then_b_shows_only_b() {
    let mut drawn = scatter();
    drawn.pointer(PointerEvent::Enter(0)).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(0));
    assert_eq!(drawn.tooltip().rows, drawn.marks[0].tooltip);

    drawn.pointer(PointerEvent::Enter(1)).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(1));
    let tip = drawn.tooltip();
    assert!(tip.visible);
    assert_eq!(tip.rows, drawn.marks[1].tooltip);
    assert_ne!(tip.rows, drawn.marks[0].tooltip);
    // Exactly one focus dot, over B.
    let dots = drawn.surface.select_class(FOCUS_DOT_CLASS);
    assert_eq!(dots.len(), 1);
}

#[test]
fn stale_leave_is_ignored() {
    let mut drawn = scatter();
    drawn.pointer(PointerEvent::Enter(0)).unwrap();
    drawn.pointer(PointerEvent::Enter(1)).unwrap();
    // A's leave arriving after B's enter must not hide B.
    drawn.pointer(PointerEvent::Leave(0)).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(1));
    assert!(drawn.tooltip().visible);

    drawn.pointer(PointerEvent::Leave(1)).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Idle);
    assert!(!drawn.tooltip().visible);
    assert!(drawn.tooltip().rows.is_empty());
    assert!(drawn.surface.select_class(FOCUS_DOT_CLASS).is_empty());
}

#[test]
fn tooltip_anchor_includes_margins() {
    let mut drawn = scatter();
    drawn.pointer(PointerEvent::Enter(2)).unwrap();
    let at = drawn.marks[2].geometry.anchor();
    let m = drawn.dimensions.margin();
    assert_eq!(drawn.tooltip().anchor.x, at.x + m.left);
    assert_eq!(drawn.tooltip().anchor.y, at.y + m.top);
}

#[test]
fn move_resolves_through_hit_regions() {
    let mut drawn = scatter();
    let target = drawn.marks[1].geometry.anchor();
    // A few pixels off the dot still hovers its nearest mark.
    drawn.pointer(PointerEvent::Move { x: target.x + 12.0, y: target.y + 9.0 }).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(1));

    // Outside the plotting area nothing is hovered.
    drawn.pointer(PointerEvent::Move { x: -20.0, y: -20.0 }).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Idle);
}

#[test]
fn unknown_mark_is_an_error() {
    let mut drawn = scatter();
    assert!(matches!(drawn.pointer(PointerEvent::Enter(7)), Err(ChartError::UnknownMark(7))));
}

#[test]
fn events_squares_fill_on_hover_and_restore() {
    let colors = ["yellowgreen", "cornflowerblue", "seagreen", "slateblue"];
    let mut drawn = events_demo(&colors).unwrap();
    assert_eq!(drawn.marks.len(), 4);
    assert_eq!(drawn.dimensions.width(), 430.0);

    let grey = Rgba::parse("lightgrey").unwrap();
    let fill = |d: &plotline_core::DrawnChart, i: usize| {
        d.surface.get(d.marks[i].node.unwrap()).unwrap().style.fill.unwrap()
    };
    for (i, m) in drawn.marks.iter().enumerate() {
        assert_eq!(m.geometry.anchor().x, i as f64 * 110.0 + 50.0);
    }

    drawn.pointer(PointerEvent::Move { x: 230.0, y: 40.0 }).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(2));
    assert_eq!(fill(&drawn, 2), Rgba::parse("seagreen").unwrap());
    assert_eq!(fill(&drawn, 1), grey);

    drawn.pointer(PointerEvent::Move { x: 50.0, y: 40.0 }).unwrap();
    assert_eq!(fill(&drawn, 2), grey);
    assert_eq!(fill(&drawn, 0), Rgba::parse("yellowgreen").unwrap());
    assert_eq!(drawn.tooltip().rows, vec![("color".to_string(), "yellowgreen".to_string())]);

    // The gap between squares hovers nothing.
    drawn.pointer(PointerEvent::Move { x: 105.0, y: 40.0 }).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Idle);
    assert_eq!(fill(&drawn, 0), grey);
}

#[test]
fn histogram_bar_highlights() {
    let records: Vec<Record> = [1.0, 2.0, 2.5, 7.0].iter().map(|v| Record::new().with("x", *v)).collect();
    let cfg = ChartConfig { kind: plotline_core::ChartKind::Histogram, y: None, ..ChartConfig::default() };
    let mut drawn = Chart::new(cfg).draw(&records).unwrap();
    let idle = drawn.theme.bar;
    let node = drawn.marks[0].node.unwrap();

    drawn.pointer(PointerEvent::Enter(0)).unwrap();
    assert_ne!(drawn.surface.get(node).unwrap().style.fill, Some(idle));
    drawn.pointer(PointerEvent::Leave(0)).unwrap();
    assert_eq!(drawn.surface.get(node).unwrap().style.fill, Some(idle));
}

#[test]
fn focus_dot_needs_its_layer() {
    let mut drawn = scatter();
    assert!(drawn.surface.remove(drawn.bounds));
    drawn.pointer(PointerEvent::Enter(0)).unwrap();
    assert_eq!(drawn.hover_state(), HoverState::Hovering(0));
    assert!(drawn.surface.select_class(FOCUS_DOT_CLASS).is_empty());
    assert!(drawn.tooltip().visible);
}
