// File: crates/plotline-core/src/svg.rs
// Summary: Deterministic SVG serialization of a drawing surface.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::scene::{Node, NodeId, PathCmd, Shape, Surface};

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    let r = if r == 0.0 { 0.0 } else { r }; // no "-0"
    let s = format!("{:.3}", r);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// `d` attribute for a path.
pub fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for c in cmds {
        match *c {
            PathCmd::MoveTo(x, y) => { let _ = write!(d, "M{},{}", num(x), num(y)); }
            PathCmd::LineTo(x, y) => { let _ = write!(d, "L{},{}", num(x), num(y)); }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn style_attrs(node: &Node, out: &mut String) {
    let s = &node.style;
    if let Some(class) = &s.class {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
    if let Some(fill) = s.fill {
        let _ = write!(out, " fill=\"{}\"", fill.to_hex());
        if fill.a != 0 && fill.a != 255 {
            let _ = write!(out, " fill-opacity=\"{}\"", num(fill.opacity()));
        }
    }
    if let Some(stroke) = s.stroke {
        let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", stroke.to_hex(), num(s.stroke_width));
    }
    if !s.pointer_events {
        out.push_str(" pointer-events=\"none\"");
    }
    if let Some(t) = s.tabindex {
        let _ = write!(out, " tabindex=\"{}\"", t);
    }
    if let Some(d) = node.datum {
        let _ = write!(out, " data-index=\"{}\"", d);
    }
}

fn write_node(surface: &Surface, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = surface.get(id) else { return };
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    match &node.shape {
        Shape::Group { dx, dy } => {
            out.push_str("<g");
            if *dx != 0.0 || *dy != 0.0 {
                let _ = write!(out, " transform=\"translate({},{})\"", num(*dx), num(*dy));
            }
            style_attrs(node, out);
            let children = surface.children(id);
            if children.is_empty() {
                out.push_str("/>\n");
                return;
            }
            out.push_str(">\n");
            for c in children {
                write_node(surface, *c, depth + 1, out);
            }
            out.push_str(&pad);
            out.push_str("</g>\n");
            return;
        }
        Shape::Circle { cx, cy, r } => {
            let _ = write!(out, "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"", num(*cx), num(*cy), num(*r));
        }
        Shape::Rect { x, y, width, height } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                num(*x), num(*y), num(*width), num(*height)
            );
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                num(*x1), num(*y1), num(*x2), num(*y2)
            );
        }
        Shape::Path { cmds } => {
            let _ = write!(out, "<path d=\"{}\"", path_data(cmds));
        }
        Shape::Text { x, y, text, anchor, size, rotate } => {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\" font-family=\"sans-serif\"",
                num(*x), num(*y), anchor.as_str(), num(*size)
            );
            if *rotate != 0.0 {
                let _ = write!(out, " transform=\"rotate({})\"", num(*rotate));
            }
            style_attrs(node, out);
            let _ = writeln!(out, ">{}</text>", escape(text));
            return;
        }
    }
    style_attrs(node, out);
    out.push_str("/>\n");
}

/// Serialize the whole surface to an SVG document.
pub fn to_svg(surface: &Surface) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        escape(&surface.id),
        num(surface.width),
        num(surface.height),
        num(surface.width),
        num(surface.height)
    );
    for c in surface.children(surface.root()) {
        write_node(surface, *c, 1, &mut out);
    }
    out.push_str("</svg>\n");
    out
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write_svg(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, to_svg(surface)).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
