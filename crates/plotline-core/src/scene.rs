// File: crates/plotline-core/src/scene.rs
// Summary: Retained drawing surface: a tree of SVG-like nodes addressed by stable ids.

use crate::color::Rgba;
use crate::geometry::Point;

/// Handle to a node on a [`Surface`]. Stays valid until the node is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Path commands in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Group { dx: f64, dy: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Path { cmds: Vec<PathCmd> },
    /// `rotate` is in degrees around the text origin.
    Text { x: f64, y: f64, text: String, anchor: TextAnchor, size: f64, rotate: f64 },
}

/// Paint and hit-testing attributes shared by every node.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub class: Option<String>,
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: f64,
    pub pointer_events: bool,
    pub tabindex: Option<i32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            class: None,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            pointer_events: true,
            tabindex: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub shape: Shape,
    pub style: Style,
    /// Index of the datum this node was drawn for, if any.
    pub datum: Option<usize>,
}

impl Node {
    pub fn new(shape: Shape) -> Self {
        Self { shape, style: Style::default(), datum: None }
    }
    pub fn group(dx: f64, dy: f64) -> Self { Self::new(Shape::Group { dx, dy }) }
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self { Self::new(Shape::Circle { cx, cy, r }) }
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Shape::Rect { x, y, width, height })
    }
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Shape::Line { x1, y1, x2, y2 })
    }
    pub fn path(cmds: Vec<PathCmd>) -> Self { Self::new(Shape::Path { cmds }) }
    pub fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(Shape::Text {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Start,
            size: 10.0,
            rotate: 0.0,
        })
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.style.class = Some(class.into());
        self
    }
    pub fn fill(mut self, color: Rgba) -> Self {
        self.style.fill = Some(color);
        self
    }
    pub fn stroke(mut self, color: Rgba, width: f64) -> Self {
        self.style.stroke = Some(color);
        self.style.stroke_width = width;
        self
    }
    pub fn no_pointer_events(mut self) -> Self {
        self.style.pointer_events = false;
        self
    }
    pub fn tabindex(mut self, index: i32) -> Self {
        self.style.tabindex = Some(index);
        self
    }
    pub fn datum(mut self, index: usize) -> Self {
        self.datum = Some(index);
        self
    }
    /// Only meaningful for text nodes.
    pub fn anchor(mut self, a: TextAnchor) -> Self {
        if let Shape::Text { anchor, .. } = &mut self.shape {
            *anchor = a;
        }
        self
    }
    pub fn font_size(mut self, s: f64) -> Self {
        if let Shape::Text { size, .. } = &mut self.shape {
            *size = s;
        }
        self
    }
    pub fn rotate(mut self, degrees: f64) -> Self {
        if let Shape::Text { rotate, .. } = &mut self.shape {
            *rotate = degrees;
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.style
            .class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The drawing surface: a fixed-size canvas holding a node tree.
///
/// Slots of removed nodes are tombstoned, never reused, so ids handed out
/// earlier cannot alias a later node.
pub struct Surface {
    pub id: String,
    pub width: f64,
    pub height: f64,
    slots: Vec<Option<Slot>>,
}

impl Surface {
    /// New surface with an empty root group.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        let root = Slot { node: Node::group(0.0, 0.0), parent: None, children: Vec::new() };
        Self { id: id.into(), width, height, slots: vec![Some(root)] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `node` as the last child of `parent`. Returns `None` if the
    /// parent was removed.
    pub fn append(&mut self, parent: NodeId, node: Node) -> Option<NodeId> {
        if self.slot(parent).is_none() {
            return None;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Some(Slot { node, parent: Some(parent), children: Vec::new() }));
        if let Some(p) = self.slot_mut(parent) {
            p.children.push(id);
        }
        Some(id)
    }

    /// Remove a node and its subtree. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root() {
            return false;
        }
        let Some(parent) = self.slot(id).map(|s| s.parent) else {
            return false;
        };
        if let Some(p) = parent.and_then(|p| self.slot_mut(p)) {
            p.children.retain(|c| *c != id);
        }
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            if let Some(slot) = self.slots.get_mut(n.0).and_then(Option::take) {
                stack.extend(slot.children);
            }
        }
        true
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slot(id).map(|s| &s.node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slot_mut(id).map(|s| &mut s.node)
    }

    pub fn set_fill(&mut self, id: NodeId, color: Rgba) -> bool {
        match self.get_mut(id) {
            Some(n) => {
                n.style.fill = Some(color);
                true
            }
            None => false,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.parent)
    }

    /// Live nodes carrying `class`, in document order.
    pub fn select_class(&self, class: &str) -> Vec<NodeId> {
        self.walk().into_iter().filter(|id| self.get(*id).is_some_and(|n| n.has_class(class))).collect()
    }

    /// Remove every node carrying `class`. Returns how many were removed.
    pub fn remove_class(&mut self, class: &str) -> usize {
        let ids = self.select_class(class);
        ids.into_iter().filter(|id| self.remove(*id)).count()
    }

    /// Sum of group translations from the root down to (and including) `id`.
    pub fn absolute_offset(&self, id: NodeId) -> Point {
        let mut p = Point::new(0.0, 0.0);
        let mut cur = Some(id);
        while let Some(n) = cur {
            if let Some(Shape::Group { dx, dy }) = self.get(n).map(|n| &n.shape) {
                p.x += dx;
                p.y += dy;
            }
            cur = self.parent(n);
        }
        p
    }

    /// All live node ids in document (pre-)order, root first.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Count of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root()).is_empty()
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }
}
