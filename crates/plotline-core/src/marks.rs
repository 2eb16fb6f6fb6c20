// File: crates/plotline-core/src/marks.rs
// Summary: Per-datum mark geometry; pure functions of one datum and the built scales.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::scale::{ContinuousScale, PositionScale};
use crate::scene::{Node, NodeId, PathCmd};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkGeometry {
    Dot { cx: f64, cy: f64, r: f64 },
    Bar { x: f64, y: f64, width: f64, height: f64 },
    /// A vertex of a line path.
    Vertex { x: f64, y: f64 },
}

impl MarkGeometry {
    /// Point used for tooltips, focus dots and hit regions.
    pub fn anchor(&self) -> Point {
        match *self {
            MarkGeometry::Dot { cx, cy, .. } => Point::new(cx, cy),
            MarkGeometry::Bar { x, y, width, .. } => Point::new(x + width / 2.0, y),
            MarkGeometry::Vertex { x, y } => Point::new(x, y),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        match *self {
            MarkGeometry::Dot { cx, cy, r } => Point::new(cx, cy).dist2(&p) <= r * r,
            MarkGeometry::Bar { x, y, width, height } => Rect::from_ltwh(x, y, width, height).contains(p),
            MarkGeometry::Vertex { .. } => false,
        }
    }

    /// Scene node for the shape; vertices are drawn by their path, not on their own.
    pub fn to_node(&self) -> Option<Node> {
        match *self {
            MarkGeometry::Dot { cx, cy, r } => Some(Node::circle(cx, cy, r)),
            MarkGeometry::Bar { x, y, width, height } => Some(Node::rect(x, y, width, height)),
            MarkGeometry::Vertex { .. } => None,
        }
    }
}

/// A drawn datum: what it looks like, where it sits, and what hovering it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Record index, or bin index for histograms.
    pub datum: usize,
    pub geometry: MarkGeometry,
    /// The datum's own color (used by highlight-on-hover).
    pub color: Rgba,
    /// Surface node drawn for the mark, if it has one.
    pub node: Option<NodeId>,
    pub tooltip: Vec<(String, String)>,
}

pub fn dot(x: &PositionScale, y: &PositionScale, xv: f64, yv: f64, r: f64) -> MarkGeometry {
    MarkGeometry::Dot { cx: x.map(xv), cy: y.map(yv), r }
}

pub fn vertex(x: &PositionScale, y: &PositionScale, xv: f64, yv: f64) -> MarkGeometry {
    MarkGeometry::Vertex { x: x.map(xv), y: y.map(yv) }
}

/// Histogram bar for bucket `[x0, x1)` holding `count` items.
/// Width never goes negative, even when padding exceeds the bucket width.
pub fn bar(
    x: &PositionScale,
    y: &PositionScale,
    x0: f64,
    x1: f64,
    count: f64,
    bounded_height: f64,
    padding: f64,
) -> MarkGeometry {
    let top = y.map(count);
    MarkGeometry::Bar {
        x: x.map(x0) + padding / 2.0,
        y: top,
        width: (x.map(x1) - x.map(x0) - padding).max(0.0),
        height: bounded_height - top,
    }
}

/// Count label position: centred over the bucket, 5px above the bar.
pub fn bar_label(x: &PositionScale, y: &PositionScale, x0: f64, x1: f64, count: f64) -> Point {
    let left = x.map(x0);
    Point::new(left + (x.map(x1) - left) / 2.0, y.map(count) - 5.0)
}

/// Polyline through `points` in the given order.
pub fn line_path(points: &[Point]) -> Vec<PathCmd> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| if i == 0 { PathCmd::MoveTo(p.x, p.y) } else { PathCmd::LineTo(p.x, p.y) })
        .collect()
}
