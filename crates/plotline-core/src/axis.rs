// File: crates/plotline-core/src/axis.rs
// Summary: Axis model (orientation, ticks, label) and its drawing onto a surface.

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::format::{format_number, format_time, AXIS_DATE_FORMAT};
use crate::scale::{to_datetime, ContinuousScale, PositionScale, DEFAULT_TICKS};
use crate::scene::{Node, NodeId, PathCmd, Surface, TextAnchor};
use crate::theme::Theme;

/// Length of tick marks in pixels.
pub const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT: f64 = 10.0;
const LABEL_FONT: f64 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub label: String,
    pub ticks: usize,
    /// chrono format for time scales.
    pub date_format: String,
}

impl Axis {
    pub fn new(orient: Orient, label: impl Into<String>) -> Self {
        Self {
            orient,
            label: label.into(),
            ticks: DEFAULT_TICKS,
            date_format: AXIS_DATE_FORMAT.to_string(),
        }
    }

    pub fn bottom(label: impl Into<String>) -> Self {
        Self::new(Orient::Bottom, label)
    }

    pub fn left(label: impl Into<String>) -> Self {
        Self::new(Orient::Left, label)
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.ticks = count;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Tick label text for a domain value.
    pub fn format_tick(&self, scale: &PositionScale, v: f64) -> String {
        if scale.is_time() {
            format_time(&to_datetime(v.round() as i64), &self.date_format)
        } else {
            format_number(v)
        }
    }

    /// Draw the axis into `parent` (the bounds group). Returns the axis group.
    pub fn draw(
        &self,
        surface: &mut Surface,
        parent: NodeId,
        scale: &PositionScale,
        dims: &Dimensions,
        theme: &Theme,
    ) -> Option<NodeId> {
        let (r0, r1) = scale.range();
        let (dy, class) = match self.orient {
            Orient::Bottom => (dims.bounded_height(), "x-axis"),
            Orient::Left => (0.0, "y-axis"),
        };
        let g = surface.append(parent, Node::group(0.0, dy).class(class))?;

        let domain = match self.orient {
            Orient::Bottom => vec![
                PathCmd::MoveTo(r0, TICK_SIZE),
                PathCmd::LineTo(r0, 0.0),
                PathCmd::LineTo(r1, 0.0),
                PathCmd::LineTo(r1, TICK_SIZE),
            ],
            Orient::Left => vec![
                PathCmd::MoveTo(-TICK_SIZE, r0),
                PathCmd::LineTo(0.0, r0),
                PathCmd::LineTo(0.0, r1),
                PathCmd::LineTo(-TICK_SIZE, r1),
            ],
        };
        surface.append(g, Node::path(domain).class("domain").stroke(theme.axis_line, 1.0))?;

        for v in scale.tick_values(self.ticks) {
            let p = scale.map(v);
            let text = self.format_tick(scale, v);
            let (tick, label) = match self.orient {
                Orient::Bottom => (
                    Node::line(p, 0.0, p, TICK_SIZE),
                    Node::text(p, TICK_SIZE + TICK_PADDING + TICK_FONT, text).anchor(TextAnchor::Middle),
                ),
                Orient::Left => (
                    Node::line(-TICK_SIZE, p, 0.0, p),
                    Node::text(-(TICK_SIZE + TICK_PADDING), p + TICK_FONT * 0.32, text).anchor(TextAnchor::End),
                ),
            };
            surface.append(g, tick.class("tick").stroke(theme.tick, 1.0))?;
            surface.append(g, label.class("tick-label").font_size(TICK_FONT).fill(theme.tick))?;
        }

        if !self.label.is_empty() {
            let label = match self.orient {
                Orient::Bottom => Node::text(dims.bounded_width() / 2.0, dims.margin().bottom - 10.0, &self.label)
                    .class("x-axis-label"),
                Orient::Left => Node::text(-dims.bounded_height() / 2.0, -dims.margin().left + 10.0, &self.label)
                    .class("y-axis-label")
                    .rotate(-90.0),
            };
            surface.append(
                g,
                label.anchor(TextAnchor::Middle).font_size(LABEL_FONT).fill(theme.axis_label),
            )?;
        }
        Some(g)
    }
}
