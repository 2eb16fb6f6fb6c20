// File: crates/plotline-core/src/voronoi.rs
// Summary: Nearest-point hit regions (Voronoi cells clipped to the plotting area).

use crate::geometry::{clip_half_plane, Point, Rect};
use crate::scene::PathCmd;

/// Partition of a rectangle into one cell per data point.
///
/// Each cell is the set of positions closer to its point than to any other,
/// so hovering anywhere in the plot resolves to the nearest mark. Cells are
/// built by clipping the bounds with the bisector of every other point.
#[derive(Clone, Debug)]
pub struct HitRegions {
    points: Vec<Point>,
    bounds: Rect,
    cells: Vec<Vec<Point>>,
}

impl HitRegions {
    /// Non-finite points get an empty cell and are never returned by `find`.
    pub fn new(points: Vec<Point>, bounds: Rect) -> Self {
        let mut cells = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() || is_shadowed(&points, i) {
                cells.push(Vec::new());
                continue;
            }
            let mut poly = bounds.corners();
            for (j, q) in points.iter().enumerate() {
                if i == j || !q.is_finite() || q == p {
                    continue;
                }
                // Keep the side of the bisector nearer to p:
                // 2(q - p)·x <= |q|^2 - |p|^2
                let a = 2.0 * (q.x - p.x);
                let b = 2.0 * (q.y - p.y);
                let c = (q.x * q.x + q.y * q.y) - (p.x * p.x + p.y * p.y);
                poly = clip_half_plane(&poly, a, b, c);
                if poly.is_empty() {
                    break;
                }
            }
            cells.push(poly);
        }
        Self { points, bounds, cells }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Index of the nearest point to (x, y); lowest index wins ties.
    /// `None` outside the bounds or when there are no usable points.
    pub fn find(&self, x: f64, y: f64) -> Option<usize> {
        let at = Point::new(x, y);
        if !self.bounds.contains(at) {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                continue;
            }
            let d = p.dist2(&at);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Cell polygon for point `i`; empty for duplicates and invalid points.
    pub fn cell(&self, i: usize) -> &[Point] {
        self.cells.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Closed path for cell `i`, or `None` when the cell is empty.
    pub fn cell_path(&self, i: usize) -> Option<Vec<PathCmd>> {
        let cell = self.cell(i);
        let (first, rest) = cell.split_first()?;
        let mut cmds = Vec::with_capacity(cell.len() + 1);
        cmds.push(PathCmd::MoveTo(first.x, first.y));
        cmds.extend(rest.iter().map(|p| PathCmd::LineTo(p.x, p.y)));
        cmds.push(PathCmd::Close);
        Some(cmds)
    }
}

// An earlier point at the same position owns the cell.
fn is_shadowed(points: &[Point], i: usize) -> bool {
    points[..i].iter().any(|q| *q == points[i])
}
