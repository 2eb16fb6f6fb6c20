// File: crates/plotline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn dist2(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
    /// Corners in clockwise screen order starting top-left.
    pub fn corners(&self) -> Vec<Point> {
        vec![
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}

/// Keep the part of a convex polygon where `a*x + b*y <= c` (Sutherland-Hodgman, one edge).
pub fn clip_half_plane(poly: &[Point], a: f64, b: f64, c: f64) -> Vec<Point> {
    let inside = |p: &Point| a * p.x + b * p.y <= c + 1e-9;
    let mut out = Vec::with_capacity(poly.len() + 1);
    for i in 0..poly.len() {
        let cur = poly[i];
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let (cur_in, prev_in) = (inside(&cur), inside(&prev));
        if cur_in != prev_in {
            let fp = a * prev.x + b * prev.y - c;
            let fc = a * cur.x + b * cur.y - c;
            let t = fp / (fp - fc);
            out.push(Point::new(prev.x + (cur.x - prev.x) * t, prev.y + (cur.y - prev.y) * t));
        }
        if cur_in {
            out.push(cur);
        }
    }
    out
}

/// Shoelace area; zero for degenerate polygons.
pub fn polygon_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 { return 0.0; }
    let mut acc = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    (acc * 0.5).abs()
}
