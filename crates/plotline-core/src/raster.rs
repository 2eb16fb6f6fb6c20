// File: crates/plotline-core/src/raster.rs
// Summary: Headless PNG rendering of a drawing surface using Skia CPU raster surfaces.

use anyhow::Result;
use log::info;
use skia_safe as skia;

use crate::color::Rgba;
use crate::scene::{NodeId, PathCmd, Shape, Surface};
use crate::theme::Theme;

pub struct RenderOptions {
    /// Device pixels per surface pixel.
    pub scale: f32,
    pub background: Rgba,
    /// Text depends on system fonts; tests turn it off for stable pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: Theme::light().background, draw_labels: true }
    }
}

impl RenderOptions {
    pub fn for_theme(theme: &Theme) -> Self {
        Self { background: theme.background, ..Self::default() }
    }
}

fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Rasterize the surface and return PNG bytes.
pub fn render_png_bytes(surface: &Surface, opts: &RenderOptions) -> Result<Vec<u8>> {
    let w = (surface.width as f32 * opts.scale).ceil().max(1.0) as i32;
    let h = (surface.height as f32 * opts.scale).ceil().max(1.0) as i32;
    let mut raster = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", w, h))?;
    let canvas = raster.canvas();
    canvas.clear(sk(opts.background));
    canvas.scale((opts.scale, opts.scale));

    for c in surface.children(surface.root()) {
        draw_node(canvas, surface, *c, opts);
    }

    let image = raster.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Rasterize the surface to a PNG file at `path`.
pub fn render_png(surface: &Surface, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_png_bytes(surface, opts)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!("wrote {}", path.display());
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_node(canvas: &skia::Canvas, surface: &Surface, id: NodeId, opts: &RenderOptions) {
    let Some(node) = surface.get(id) else { return };
    let style = &node.style;

    let fill = style.fill.filter(|c| c.a > 0).map(|c| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(sk(c));
        p
    });
    let stroke = style.stroke.filter(|c| c.a > 0).map(|c| {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(style.stroke_width as f32);
        p.set_color(sk(c));
        p
    });

    match &node.shape {
        Shape::Group { dx, dy } => {
            canvas.save();
            canvas.translate((*dx as f32, *dy as f32));
            for c in surface.children(id) {
                draw_node(canvas, surface, *c, opts);
            }
            canvas.restore();
        }
        Shape::Circle { cx, cy, r } => {
            // SVG circles without a fill attribute paint black.
            let fill = fill.or_else(|| style.fill.is_none().then(default_fill));
            for p in fill.iter().chain(stroke.iter()) {
                canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, p);
            }
        }
        Shape::Rect { x, y, width, height } => {
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
            let fill = fill.or_else(|| style.fill.is_none().then(default_fill));
            for p in fill.iter().chain(stroke.iter()) {
                canvas.draw_rect(rect, p);
            }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            if let Some(p) = &stroke {
                canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), p);
            }
        }
        Shape::Path { cmds } => {
            let mut path = skia::Path::new();
            for c in cmds {
                match *c {
                    PathCmd::MoveTo(x, y) => { path.move_to((x as f32, y as f32)); }
                    PathCmd::LineTo(x, y) => { path.line_to((x as f32, y as f32)); }
                    PathCmd::Close => { path.close(); }
                }
            }
            for p in fill.iter().chain(stroke.iter()) {
                canvas.draw_path(&path, p);
            }
        }
        Shape::Text { x, y, text, anchor, size, rotate } => {
            if !opts.draw_labels {
                return;
            }
            let mut paint = fill.unwrap_or_else(default_fill);
            paint.set_style(skia::paint::Style::Fill);
            let mut font = skia::Font::default();
            font.set_size(*size as f32);
            let (width, _) = font.measure_str(text, Some(&paint));
            let dx = match anchor {
                crate::scene::TextAnchor::Start => 0.0,
                crate::scene::TextAnchor::Middle => -width / 2.0,
                crate::scene::TextAnchor::End => -width,
            };
            canvas.save();
            canvas.rotate(*rotate as f32, None);
            canvas.draw_str(text, (*x as f32 + dx, *y as f32), &font, &paint);
            canvas.restore();
        }
    }
}

fn default_fill() -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(skia::Color::from_argb(255, 0, 0, 0));
    p
}
