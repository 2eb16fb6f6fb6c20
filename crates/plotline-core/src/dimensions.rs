// File: crates/plotline-core/src/dimensions.rs
// Summary: Chart dimensions: outer size, margins and the bounded plotting area.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Default outer width in pixels.
pub const WIDTH: f64 = 600.0;
/// Default outer height in pixels.
pub const HEIGHT: f64 = 400.0;
/// Share of the viewport a chart claims when sized from it.
pub const VIEWPORT_FILL: f64 = 0.9;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Room for a time axis at the bottom and value labels on the left.
    pub const fn line_chart() -> Self { Self::new(15.0, 15.0, 40.0, 60.0) }
    pub const fn scatter() -> Self { Self::new(10.0, 10.0, 50.0, 50.0) }
    /// Extra headroom for the count labels above the bars.
    pub const fn histogram() -> Self { Self::new(30.0, 10.0, 50.0, 50.0) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    fn validate(&self) -> Result<()> {
        let sides = [self.top, self.right, self.bottom, self.left];
        if sides.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidDimensions(format!(
                "margins must be finite and non-negative, got {:?}",
                self
            )));
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::scatter()
    }
}

/// Immutable geometry of one chart draw.
///
/// Built in a single step; a viewport change produces a new value (see
/// [`Dimensions::resized`]) and every scale has to be rebuilt from it.
/// Fields are read through accessors only:
///
/// ```compile_fail
/// let mut d = plotline_core::Dimensions::default();
/// d.width = 100.0;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
    margin: Margin,
    bounded_width: f64,
    bounded_height: f64,
}

impl Dimensions {
    /// Errors if a size is not finite, or if the margins eat the whole area.
    pub fn new(width: f64, height: f64, margin: Margin) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidDimensions(format!(
                "size must be finite and non-negative, got {}x{}",
                width, height
            )));
        }
        margin.validate()?;
        let bounded_width = width - margin.hsum();
        let bounded_height = height - margin.vsum();
        if bounded_width < 0.0 || bounded_height < 0.0 {
            return Err(ChartError::InvalidDimensions(format!(
                "margins {:?} exceed {}x{}",
                margin, width, height
            )));
        }
        Ok(Self { width, height, margin, bounded_width, bounded_height })
    }

    /// Square chart filling 90% of the smaller viewport side.
    pub fn square_for_viewport(viewport_w: f64, viewport_h: f64, margin: Margin) -> Result<Self> {
        let side = (viewport_w * VIEWPORT_FILL).min(viewport_h * VIEWPORT_FILL);
        Self::new(side, side, margin)
    }

    /// 90% of the viewport width at a fixed height.
    pub fn wide_for_viewport(viewport_w: f64, height: f64, margin: Margin) -> Result<Self> {
        Self::new(viewport_w * VIEWPORT_FILL, height, margin)
    }

    /// Fixed width with height derived from an aspect ratio (height / width).
    pub fn with_aspect(width: f64, ratio: f64, margin: Margin) -> Result<Self> {
        Self::new(width, width * ratio, margin)
    }

    /// Same margins, new outer size.
    pub fn resized(&self, width: f64, height: f64) -> Result<Self> {
        Self::new(width, height, self.margin)
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn margin(&self) -> Margin { self.margin }
    /// `width - margin.left - margin.right`.
    pub fn bounded_width(&self) -> f64 { self.bounded_width }
    /// `height - margin.top - margin.bottom`.
    pub fn bounded_height(&self) -> f64 { self.bounded_height }

    /// Offset of the bounded area inside the outer canvas.
    pub fn bounds_origin(&self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        let margin = Margin::default();
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin,
            bounded_width: WIDTH - margin.hsum(),
            bounded_height: HEIGHT - margin.vsum(),
        }
    }
}
