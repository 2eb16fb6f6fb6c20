// File: crates/plotline-core/src/chart.rs
// Summary: Chart configuration and the load -> access -> dimension -> scale -> bin -> draw pipeline.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::accessor::{extract_all, extract_labels, Accessor, AccessorKind, AccessorSet};
use crate::axis::Axis;
use crate::bin::{BinGenerator, OutOfDomain, DEFAULT_THRESHOLDS};
use crate::color::Rgba;
use crate::dimensions::{Dimensions, Margin};
use crate::error::{ChartError, Result};
use crate::format::{format_number, format_time, TOOLTIP_DATE_FORMAT};
use crate::geometry::{Point, Rect};
use crate::interaction::{FocusDot, HighlightFill, HoverState, Interaction, PointerEvent, Tooltip};
use crate::marks::{self, Mark, MarkGeometry};
use crate::raster::{self, RenderOptions};
use crate::record::Record;
use crate::scale::{
    extent, ContinuousScale, LinearScale, OrdinalScale, PositionScale, SequentialColorScale,
    TimeScale, Unknown, DEFAULT_TICKS,
};
use crate::scene::{Node, NodeId, Surface, TextAnchor};
use crate::svg;
use crate::theme::{self, Theme};
use crate::voronoi::HitRegions;

/// Side of each swatch in the events chart, and the gap between swatches.
pub const SWATCH_SIZE: f64 = 100.0;
pub const SWATCH_GAP: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Time or numeric x, one stroked path.
    Line,
    /// One circle per record.
    #[default]
    Scatter,
    /// Bucketed counts of the x field.
    Histogram,
    /// One square per record that takes the record's color on hover.
    Swatches,
}

impl ChartKind {
    pub fn default_margin(&self) -> Margin {
        match self {
            ChartKind::Line => Margin::line_chart(),
            ChartKind::Scatter => Margin::scatter(),
            ChartKind::Histogram => Margin::histogram(),
            ChartKind::Swatches => Margin::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// How marks are colored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scale", rename_all = "lowercase")]
pub enum ColorConfig {
    /// Category -> palette. An empty `categories` list takes the distinct
    /// values in data order.
    Ordinal {
        accessor: Accessor,
        #[serde(default)]
        categories: Vec<String>,
        palette: Vec<Rgba>,
        /// Color for values outside `categories`; without it they fail the draw.
        #[serde(default)]
        fallback: Option<Rgba>,
    },
    /// Numeric field -> ramp between two colors.
    Sequential { accessor: Accessor, from: Rgba, to: Rgba },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinConfig {
    pub thresholds: usize,
    /// Fixed `[lo, hi]` to bin over; the (niced) data extent when unset.
    pub domain: Option<(f64, f64)>,
    /// What to do with values outside `domain`.
    pub out_of_domain: OutOfDomain,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self { thresholds: DEFAULT_THRESHOLDS, domain: None, out_of_domain: OutOfDomain::Fail }
    }
}

/// One tooltip row: a label and the value it shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipField {
    pub label: String,
    pub accessor: Accessor,
    /// Output format for time fields.
    #[serde(default)]
    pub format: Option<String>,
}

/// Everything one chart needs, in one place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    /// Defaults per kind when absent.
    pub margin: Option<Margin>,
    pub x: Accessor,
    pub y: Option<Accessor>,
    pub color: Option<ColorConfig>,
    pub nice: bool,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub x_label: String,
    pub y_label: String,
    /// chrono format for time-axis ticks.
    pub axis_date_format: String,
    pub bins: BinConfig,
    pub radius: f64,
    pub bar_padding: f64,
    /// Line charts: shade the area below this y value.
    pub threshold: Option<f64>,
    pub theme: String,
    pub tooltip: Vec<TooltipField>,
    /// Scatter: refine hover with nearest-point cells.
    pub voronoi: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Scatter,
            width: 600.0,
            height: 600.0,
            margin: None,
            x: Accessor::number("x"),
            y: Some(Accessor::number("y")),
            color: None,
            nice: true,
            x_ticks: DEFAULT_TICKS,
            y_ticks: DEFAULT_TICKS,
            x_label: String::new(),
            y_label: String::new(),
            axis_date_format: crate::format::AXIS_DATE_FORMAT.to_string(),
            bins: BinConfig::default(),
            radius: 4.0,
            bar_padding: 1.0,
            threshold: None,
            theme: "light".to_string(),
            tooltip: Vec::new(),
            voronoi: false,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ChartError::Parse(format!("chart config: {}", e)))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::DataFetch {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn margin(&self) -> Margin {
        self.margin.unwrap_or_else(|| self.kind.default_margin())
    }

    /// Named accessors the draw reads: `x`, plus `y` and `color` when set.
    pub fn accessors(&self) -> AccessorSet {
        let mut set = AccessorSet::new().with("x", self.x.clone());
        if let Some(y) = &self.y {
            set.insert("y", y.clone());
        }
        match &self.color {
            Some(ColorConfig::Ordinal { accessor, .. }) | Some(ColorConfig::Sequential { accessor, .. }) => {
                set.insert("color", accessor.clone())
            }
            None => {}
        }
        set
    }
}

/// Resolved per-record color source.
enum Colorer {
    Fixed(Rgba),
    Ordinal(Accessor, OrdinalScale<Rgba>),
    Sequential(Accessor, SequentialColorScale),
}

impl Colorer {
    fn build(config: Option<&ColorConfig>, records: &[Record], default: Rgba) -> Result<Self> {
        Ok(match config {
            None => Colorer::Fixed(default),
            Some(ColorConfig::Ordinal { accessor, categories, palette, fallback }) => {
                let vocab = if categories.is_empty() {
                    extract_labels(accessor, records)?
                } else {
                    categories.clone()
                };
                let mut scale = OrdinalScale::new(&vocab, palette.clone())?;
                if let Some(fb) = fallback {
                    scale = scale.with_unknown(Unknown::Fallback(*fb));
                }
                Colorer::Ordinal(accessor.clone(), scale)
            }
            Some(ColorConfig::Sequential { accessor, from, to }) => {
                let values = extract_all(accessor, records)?;
                let domain = extent(&values, &accessor.field)?;
                Colorer::Sequential(accessor.clone(), SequentialColorScale::new(domain, *from, *to))
            }
        })
    }

    fn color(&self, record: &Record, index: usize) -> Result<Rgba> {
        match self {
            Colorer::Fixed(c) => Ok(*c),
            Colorer::Ordinal(a, s) => s.map(&a.label(record).map_err(|e| e.at_index(index))?),
            Colorer::Sequential(a, s) => Ok(s.map(a.numeric(record).map_err(|e| e.at_index(index))?)),
        }
    }
}

/// The parameterized pipeline. Stateless between draws.
pub struct Chart {
    pub config: ChartConfig,
}

/// Output of one draw: the surface plus everything hover needs.
pub struct DrawnChart {
    pub config: ChartConfig,
    pub theme: Theme,
    pub dimensions: Dimensions,
    pub surface: Surface,
    /// The margin-offset group all marks live in.
    pub bounds: NodeId,
    pub x_scale: Option<PositionScale>,
    pub y_scale: Option<PositionScale>,
    pub marks: Vec<Mark>,
    pub hit_regions: Option<HitRegions>,
    interaction: Interaction,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline over `records`. Any accessor, scale or bin
    /// failure aborts the draw; no partial chart is returned.
    pub fn draw(&self, records: &[Record]) -> Result<DrawnChart> {
        let cfg = &self.config;
        let theme = theme::find(&cfg.theme);
        let dims = Dimensions::new(cfg.width, cfg.height, cfg.margin())?;
        debug!(
            "{:?} chart {}x{} bounded {}x{} over {} records",
            cfg.kind, dims.width(), dims.height(), dims.bounded_width(), dims.bounded_height(), records.len()
        );

        let mut surface = Surface::new("wrapper", dims.width(), dims.height());
        let root = surface.root();
        let (left, top) = dims.bounds_origin();
        let bounds = surface
            .append(root, Node::group(left, top).class("bounds"))
            .ok_or_else(|| ChartError::InvalidDimensions("surface has no root".into()))?;

        let mut drawn = DrawnChart {
            config: cfg.clone(),
            theme,
            dimensions: dims,
            surface,
            bounds,
            x_scale: None,
            y_scale: None,
            marks: Vec::new(),
            hit_regions: None,
            interaction: Interaction::new(),
        };
        match cfg.kind {
            ChartKind::Line => draw_line(&mut drawn, records)?,
            ChartKind::Scatter => draw_scatter(&mut drawn, records)?,
            ChartKind::Histogram => draw_histogram(&mut drawn, records)?,
            ChartKind::Swatches => draw_swatches(&mut drawn, records)?,
        }
        debug!("drew {} marks, {} nodes", drawn.marks.len(), drawn.surface.len());
        Ok(drawn)
    }
}

impl DrawnChart {
    /// Dispatch one pointer event. `Move` coordinates are in bounds space
    /// and resolve through hit regions (or mark shapes) to enter/leave.
    pub fn pointer(&mut self, event: PointerEvent) -> Result<()> {
        let offset = self.surface.absolute_offset(self.bounds);
        match event {
            PointerEvent::Enter(i) => {
                if i >= self.marks.len() {
                    return Err(ChartError::UnknownMark(i));
                }
                self.interaction.hover(Some(i), &mut self.surface, self.bounds, &self.marks, offset);
            }
            PointerEvent::Leave(i) => {
                if i >= self.marks.len() {
                    return Err(ChartError::UnknownMark(i));
                }
                self.interaction.leave(i, &mut self.surface, self.bounds, &self.marks);
            }
            PointerEvent::Move { x, y } => {
                let target = self.mark_at(x, y);
                self.interaction.hover(target, &mut self.surface, self.bounds, &self.marks, offset);
            }
        }
        Ok(())
    }

    /// Mark under a bounds-space position.
    pub fn mark_at(&self, x: f64, y: f64) -> Option<usize> {
        if let Some(regions) = &self.hit_regions {
            return regions.find(x, y);
        }
        let p = Point::new(x, y);
        self.marks.iter().position(|m| m.geometry.contains(p))
    }

    pub fn hover_state(&self) -> HoverState {
        self.interaction.state()
    }

    pub fn tooltip(&self) -> &Tooltip {
        self.interaction.tooltip()
    }

    /// Anchor of every mark, in mark order.
    pub fn mark_positions(&self) -> Vec<Point> {
        self.marks.iter().map(|m| m.geometry.anchor()).collect()
    }

    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.surface)
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        svg::write_svg(&self.surface, path)
    }

    pub fn render_png_bytes(&self) -> anyhow::Result<Vec<u8>> {
        raster::render_png_bytes(&self.surface, &RenderOptions::for_theme(&self.theme))
    }

    pub fn render_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        raster::render_png(&self.surface, &RenderOptions::for_theme(&self.theme), path)
    }
}

// ---- helpers ----------------------------------------------------------------

fn build_position(accessor: &Accessor, values: &[f64], range: (f64, f64), nice: bool, ticks: usize) -> Result<PositionScale> {
    Ok(if accessor.is_time() {
        let s = TimeScale::from_values(values, &accessor.field, range)?;
        PositionScale::Time(if nice { s.nice(ticks) } else { s })
    } else {
        let s = LinearScale::from_values(values, &accessor.field, range)?;
        PositionScale::Linear(if nice { s.nice(ticks) } else { s })
    })
}

fn tooltip_rows(fields: &[TooltipField], record: &Record, index: usize) -> Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|f| {
            let text = if f.accessor.is_time() {
                let t = f.accessor.datetime(record).map_err(|e| e.at_index(index))?;
                format_time(&t, f.format.as_deref().unwrap_or(TOOLTIP_DATE_FORMAT))
            } else if matches!(f.accessor.kind, AccessorKind::Category) {
                f.accessor.label(record).map_err(|e| e.at_index(index))?
            } else {
                format_number(f.accessor.numeric(record).map_err(|e| e.at_index(index))?)
            };
            Ok((f.label.clone(), text))
        })
        .collect()
}

/// Configured tooltip fields, or x and y by field name.
fn tooltip_fields(cfg: &ChartConfig) -> Vec<TooltipField> {
    if !cfg.tooltip.is_empty() {
        return cfg.tooltip.clone();
    }
    std::iter::once(&cfg.x)
        .chain(cfg.y.as_ref())
        .map(|a| TooltipField { label: a.field.clone(), accessor: a.clone(), format: None })
        .collect()
}

fn draw_axes(drawn: &mut DrawnChart, x: &PositionScale, y: Option<&PositionScale>) -> Result<()> {
    let cfg = &drawn.config;
    let x_axis = Axis::bottom(cfg.x_label.clone()).ticks(cfg.x_ticks).date_format(cfg.axis_date_format.clone());
    x_axis
        .draw(&mut drawn.surface, drawn.bounds, x, &drawn.dimensions, &drawn.theme)
        .ok_or_else(|| ChartError::InvalidDimensions("bounds group missing".into()))?;
    if let Some(y) = y {
        let y_axis = Axis::left(cfg.y_label.clone()).ticks(cfg.y_ticks);
        y_axis
            .draw(&mut drawn.surface, drawn.bounds, y, &drawn.dimensions, &drawn.theme)
            .ok_or_else(|| ChartError::InvalidDimensions("bounds group missing".into()))?;
    }
    Ok(())
}

fn append(surface: &mut Surface, parent: NodeId, node: Node) -> Result<NodeId> {
    surface
        .append(parent, node)
        .ok_or_else(|| ChartError::InvalidDimensions("drawing into a removed group".into()))
}

fn draw_line(drawn: &mut DrawnChart, records: &[Record]) -> Result<()> {
    let cfg = drawn.config.clone();
    let dims = drawn.dimensions;
    let accessors = cfg.accessors();
    let y_acc = accessors.get("y")?;
    let xs = extract_all(&cfg.x, records)?;
    let ys = extract_all(y_acc, records)?;
    let x = build_position(&cfg.x, &xs, (0.0, dims.bounded_width()), cfg.nice, cfg.x_ticks)?;
    let y = build_position(y_acc, &ys, (dims.bounded_height(), 0.0), cfg.nice, cfg.y_ticks)?;
    debug!("line scales x {:?} y {:?}", x.domain(), y.domain());

    if let Some(t) = cfg.threshold {
        let top = y.map(t).clamp(0.0, dims.bounded_height());
        append(
            &mut drawn.surface,
            drawn.bounds,
            Node::rect(0.0, top, dims.bounded_width(), dims.bounded_height() - top)
                .class("threshold")
                .fill(drawn.theme.threshold_band)
                .no_pointer_events(),
        )?;
    }

    let fields = tooltip_fields(&cfg);
    let mut marks = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        marks.push(Mark {
            datum: i,
            geometry: marks::vertex(&x, &y, xs[i], ys[i]),
            color: drawn.theme.line_stroke,
            node: None,
            tooltip: tooltip_rows(&fields, record, i)?,
        });
    }
    let points: Vec<Point> = marks.iter().map(|m| m.geometry.anchor()).collect();
    append(
        &mut drawn.surface,
        drawn.bounds,
        Node::path(marks::line_path(&points))
            .class("line")
            .fill(Rgba::TRANSPARENT)
            .stroke(drawn.theme.line_stroke, 2.0),
    )?;

    draw_axes(drawn, &x, Some(&y))?;
    drawn.hit_regions = Some(HitRegions::new(
        points,
        Rect::from_ltwh(0.0, 0.0, dims.bounded_width(), dims.bounded_height()),
    ));
    drawn.interaction = Interaction::new().with_behavior(FocusDot {
        fill: drawn.theme.focus_dot,
        ..FocusDot::default()
    });
    drawn.marks = marks;
    drawn.x_scale = Some(x);
    drawn.y_scale = Some(y);
    Ok(())
}

fn draw_scatter(drawn: &mut DrawnChart, records: &[Record]) -> Result<()> {
    let cfg = drawn.config.clone();
    let dims = drawn.dimensions;
    let accessors = cfg.accessors();
    let y_acc = accessors.get("y")?;
    let xs = extract_all(&cfg.x, records)?;
    let ys = extract_all(y_acc, records)?;
    let x = build_position(&cfg.x, &xs, (0.0, dims.bounded_width()), cfg.nice, cfg.x_ticks)?;
    let y = build_position(y_acc, &ys, (dims.bounded_height(), 0.0), cfg.nice, cfg.y_ticks)?;
    let colorer = Colorer::build(cfg.color.as_ref(), records, drawn.theme.dot)?;
    debug!("scatter scales x {:?} y {:?}", x.domain(), y.domain());

    let fields = tooltip_fields(&cfg);
    let dots = append(&mut drawn.surface, drawn.bounds, Node::group(0.0, 0.0).class("dots"))?;
    let mut marks = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let geometry = marks::dot(&x, &y, xs[i], ys[i], cfg.radius);
        let color = colorer.color(record, i)?;
        let node = match geometry.to_node() {
            Some(shape) => Some(append(&mut drawn.surface, dots, shape.fill(color).tabindex(0).datum(i))?),
            None => None,
        };
        marks.push(Mark {
            datum: i,
            geometry,
            color,
            node,
            tooltip: tooltip_rows(&fields, record, i)?,
        });
    }

    draw_axes(drawn, &x, Some(&y))?;

    let area = Rect::from_ltwh(0.0, 0.0, dims.bounded_width(), dims.bounded_height());
    if cfg.voronoi {
        let regions = HitRegions::new(marks.iter().map(|m| m.geometry.anchor()).collect(), area);
        let overlay = append(&mut drawn.surface, drawn.bounds, Node::group(0.0, 0.0).class("voronoi-layer"))?;
        for i in 0..regions.len() {
            if let Some(cmds) = regions.cell_path(i) {
                append(
                    &mut drawn.surface,
                    overlay,
                    Node::path(cmds).class("voronoi").fill(Rgba::TRANSPARENT).datum(i),
                )?;
            }
        }
        drawn.hit_regions = Some(regions);
    }
    drawn.interaction = Interaction::new().with_behavior(FocusDot {
        fill: drawn.theme.focus_dot,
        ..FocusDot::default()
    });
    drawn.marks = marks;
    drawn.x_scale = Some(x);
    drawn.y_scale = Some(y);
    Ok(())
}

fn draw_histogram(drawn: &mut DrawnChart, records: &[Record]) -> Result<()> {
    let cfg = drawn.config.clone();
    let dims = drawn.dimensions;
    let xs = extract_all(&cfg.x, records)?;
    let x_lin = match cfg.bins.domain {
        Some(domain) => LinearScale::new(domain, (0.0, dims.bounded_width())),
        None => {
            let s = LinearScale::from_values(&xs, &cfg.x.field, (0.0, dims.bounded_width()))?;
            if cfg.nice { s.nice(cfg.x_ticks) } else { s }
        }
    };

    let generator = BinGenerator::new(x_lin.domain())
        .thresholds(cfg.bins.thresholds)
        .out_of_domain(cfg.bins.out_of_domain);
    let indices: Vec<usize> = (0..records.len()).collect();
    let bins = generator.bin(&indices, |i| Ok(xs[*i]))?;

    let max_count = bins.iter().map(|b| b.len()).max().unwrap_or(0) as f64;
    let y_lin = LinearScale::new((0.0, max_count), (dims.bounded_height(), 0.0));
    let y_lin = if cfg.nice { y_lin.nice(cfg.y_ticks) } else { y_lin };
    let (x, y) = (PositionScale::Linear(x_lin), PositionScale::Linear(y_lin));
    debug!("histogram: {} bins, max count {}", bins.len(), max_count);

    let bins_group = append(&mut drawn.surface, drawn.bounds, Node::group(0.0, 0.0).class("bins"))?;
    let mut marks = Vec::with_capacity(bins.len());
    for (i, b) in bins.iter().enumerate() {
        let count = b.len() as f64;
        let g = append(&mut drawn.surface, bins_group, Node::group(0.0, 0.0).class("bin"))?;
        let geometry = marks::bar(&x, &y, b.x0, b.x1, count, dims.bounded_height(), cfg.bar_padding);
        let node = match geometry.to_node() {
            Some(shape) => Some(append(&mut drawn.surface, g, shape.fill(drawn.theme.bar).datum(i))?),
            None => None,
        };
        if b.len() > 0 {
            let at = marks::bar_label(&x, &y, b.x0, b.x1, count);
            append(
                &mut drawn.surface,
                g,
                Node::text(at.x, at.y, b.len().to_string())
                    .class("bar-label")
                    .anchor(TextAnchor::Middle)
                    .font_size(12.0)
                    .fill(drawn.theme.bar_label),
            )?;
        }
        marks.push(Mark {
            datum: i,
            geometry,
            color: drawn.theme.bar,
            node,
            tooltip: vec![
                (cfg.x.field.clone(), format!("{} - {}", format_number(b.x0), format_number(b.x1))),
                ("count".to_string(), b.len().to_string()),
            ],
        });
    }

    draw_axes(drawn, &x, None)?;
    drawn.interaction = Interaction::new().with_behavior(HighlightFill {
        hover: Some(drawn.theme.focus_dot),
        idle: drawn.theme.bar,
    });
    drawn.marks = marks;
    drawn.x_scale = Some(x);
    drawn.y_scale = Some(y);
    Ok(())
}

fn draw_swatches(drawn: &mut DrawnChart, records: &[Record]) -> Result<()> {
    let cfg = drawn.config.clone();
    let colorer = Colorer::build(cfg.color.as_ref(), records, drawn.theme.dot)?;
    let idle = drawn.theme.idle;
    let fields = tooltip_fields(&cfg);
    let mut marks = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let color = colorer.color(record, i)?;
        let x = i as f64 * (SWATCH_SIZE + SWATCH_GAP);
        let node = append(
            &mut drawn.surface,
            drawn.bounds,
            Node::rect(x, 0.0, SWATCH_SIZE, SWATCH_SIZE).class("rect").fill(idle).datum(i),
        )?;
        marks.push(Mark {
            datum: i,
            geometry: MarkGeometry::Bar { x, y: 0.0, width: SWATCH_SIZE, height: SWATCH_SIZE },
            color,
            node: Some(node),
            tooltip: tooltip_rows(&fields, record, i)?,
        });
    }
    drawn.interaction = Interaction::new().with_behavior(HighlightFill { hover: None, idle });
    drawn.marks = marks;
    Ok(())
}

/// The events lesson: one grey square per color, filled with its color on hover.
pub fn events_demo(colors: &[&str]) -> Result<DrawnChart> {
    let (config, records) = events_config(colors)?;
    Chart::new(config).draw(&records)
}

/// Config and records behind [`events_demo`], for callers that adjust the
/// config (theme, say) before drawing.
pub fn events_config(colors: &[&str]) -> Result<(ChartConfig, Vec<Record>)> {
    let records: Vec<Record> = colors.iter().map(|c| Record::new().with("color", *c)).collect();
    let palette = colors.iter().map(|c| Rgba::parse(c)).collect::<Result<Vec<_>>>()?;
    let n = colors.len().max(1) as f64;
    let accessor = Accessor::category("color");
    let config = ChartConfig {
        kind: ChartKind::Swatches,
        width: n * (SWATCH_SIZE + SWATCH_GAP) - SWATCH_GAP,
        height: SWATCH_SIZE,
        x: accessor.clone(),
        y: None,
        color: Some(ColorConfig::Ordinal {
            accessor: accessor.clone(),
            categories: colors.iter().map(|c| c.to_string()).collect(),
            palette,
            fallback: None,
        }),
        tooltip: vec![TooltipField { label: "color".into(), accessor, format: None }],
        ..ChartConfig::default()
    };
    Ok((config, records))
}
