// File: crates/plotline-core/src/interaction.rs
// Summary: Hover state machine, tooltip model and pluggable hover behaviors.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::marks::Mark;
use crate::scene::{Node, NodeId, Surface};

/// Pointer input in bounds coordinates (marks are addressed by index).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter(usize),
    Leave(usize),
    Move { x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

/// Tooltip contents and placement. The anchor is in canvas coordinates
/// (bounds position plus margins).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub rows: Vec<(String, String)>,
    pub anchor: Point,
}

/// Side effects applied to the surface when a mark gains or loses hover.
pub trait HoverBehavior {
    fn id(&self) -> &'static str;
    fn on_enter(&self, surface: &mut Surface, layer: NodeId, mark: &Mark);
    fn on_leave(&self, surface: &mut Surface, layer: NodeId, mark: &Mark);
}

/// Recolor the hovered mark, restoring the idle fill on leave.
/// With `hover: None` the mark takes its own datum color.
pub struct HighlightFill {
    pub hover: Option<Rgba>,
    pub idle: Rgba,
}

impl HoverBehavior for HighlightFill {
    fn id(&self) -> &'static str { "highlight_fill" }

    fn on_enter(&self, surface: &mut Surface, _layer: NodeId, mark: &Mark) {
        if let Some(node) = mark.node {
            surface.set_fill(node, self.hover.unwrap_or(mark.color));
        }
    }

    fn on_leave(&self, surface: &mut Surface, _layer: NodeId, mark: &Mark) {
        if let Some(node) = mark.node {
            surface.set_fill(node, self.idle);
        }
    }
}

pub const FOCUS_DOT_CLASS: &str = "tooltip-dot";

/// Draw a non-interactive dot over the hovered mark; remove it on leave.
pub struct FocusDot {
    pub radius: f64,
    pub fill: Rgba,
}

impl Default for FocusDot {
    fn default() -> Self {
        Self { radius: 6.5, fill: Rgba::rgb(0x80, 0x00, 0x00) }
    }
}

impl HoverBehavior for FocusDot {
    fn id(&self) -> &'static str { "focus_dot" }

    fn on_enter(&self, surface: &mut Surface, layer: NodeId, mark: &Mark) {
        let at = mark.geometry.anchor();
        let dot = Node::circle(at.x, at.y, self.radius)
            .class(FOCUS_DOT_CLASS)
            .fill(self.fill)
            .no_pointer_events();
        if surface.append(layer, dot).is_none() {
            log::warn!("{}: hover layer is gone, no dot for mark {}", self.id(), mark.datum);
        }
    }

    fn on_leave(&self, surface: &mut Surface, _layer: NodeId, _mark: &Mark) {
        surface.remove_class(FOCUS_DOT_CLASS);
    }
}

/// Two-state hover machine. Transitions apply immediately; nothing is queued.
#[derive(Default)]
pub struct Interaction {
    state: HoverState,
    tooltip: Tooltip,
    behaviors: Vec<Box<dyn HoverBehavior>>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, b: impl HoverBehavior + 'static) -> Self {
        self.behaviors.push(Box::new(b));
        self
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Move hover to `target` (or to nothing). Leaving the previous mark
    /// always happens before entering the next one.
    pub fn hover(
        &mut self,
        target: Option<usize>,
        surface: &mut Surface,
        layer: NodeId,
        marks: &[Mark],
        offset: Point,
    ) {
        if let HoverState::Hovering(current) = self.state {
            if Some(current) == target {
                return;
            }
            self.leave(current, surface, layer, marks);
        }
        let Some(i) = target else { return };
        let Some(mark) = marks.get(i) else { return };
        for b in &self.behaviors {
            b.on_enter(surface, layer, mark);
        }
        let at = mark.geometry.anchor();
        self.tooltip = Tooltip {
            visible: true,
            rows: mark.tooltip.clone(),
            anchor: Point::new(at.x + offset.x, at.y + offset.y),
        };
        self.state = HoverState::Hovering(i);
        log::debug!("hover enter mark {}", i);
    }

    /// Leave `i` if it is the hovered mark; stale leaves are ignored.
    pub fn leave(&mut self, i: usize, surface: &mut Surface, layer: NodeId, marks: &[Mark]) {
        if self.state != HoverState::Hovering(i) {
            return;
        }
        if let Some(mark) = marks.get(i) {
            for b in &self.behaviors {
                b.on_leave(surface, layer, mark);
            }
        }
        self.tooltip.visible = false;
        self.tooltip.rows.clear();
        self.state = HoverState::Idle;
        log::debug!("hover leave mark {}", i);
    }
}
