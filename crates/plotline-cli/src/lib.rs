// File: crates/plotline-cli/src/lib.rs
// Summary: Command-line surface for the lesson charts; argument parsing and the render driver.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use plotline_core::chart::{events_config, Chart, ChartConfig, ChartKind, ColorConfig, DrawnChart};
use plotline_core::interaction::{PointerEvent, Tooltip};
use plotline_core::{loader, Accessor, Margin, OutOfDomain, Record, Rgba};

/// Bundled daily weather sample used when `--data` is not given.
pub const SAMPLE_DATA: &str = include_str!("../data/weather_sample.json");

/// Colors of the events lesson squares.
pub const EVENT_COLORS: [&str; 4] = ["yellowgreen", "cornflowerblue", "seagreen", "slateblue"];

#[derive(Parser, Debug)]
#[command(
    name = "plotline",
    version,
    about = "Render lesson charts (line, scatter, histogram, events) from a JSON or CSV dataset",
    after_help = "Examples:
  plotline line                                   Max temperature over time, freezing band shaded
  plotline scatter --voronoi --hover 120,200      Dew point vs humidity, print the tooltip at a point
  plotline histogram --field humidity --bins 20   Humidity distribution
  plotline events --hover 150,50                  Hover the second square
  plotline scatter --config chart.json --png out.png"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// SVG output path (defaults to plotline-<chart>.svg)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Also rasterize the chart to this PNG path
    #[arg(long, global = true, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Color theme (light or dark)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// JSON chart config; replaces the chart flags of the subcommand
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulate a pointer at bounds coordinates X,Y and print the tooltip
    #[arg(long, global = true, value_name = "X,Y", value_parser = parse_point)]
    pub hover: Option<(f64, f64)>,

    /// Log pipeline stages at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Time series with a shaded threshold band
    Line {
        /// Dataset (.json or .csv)
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
        #[arg(long, default_value = "date")]
        x: String,
        /// chrono format of the x field
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,
        #[arg(long, default_value = "temperatureMax")]
        y: String,
        /// Shade everything below this y value
        #[arg(long, default_value = "32")]
        threshold: Option<f64>,
        /// Draw no threshold band
        #[arg(long, conflicts_with = "threshold")]
        no_threshold: bool,
        #[arg(long, default_value = "900")]
        width: f64,
        #[arg(long, default_value = "400")]
        height: f64,
    },
    /// Correlation of two numeric fields
    Scatter {
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
        #[arg(long, default_value = "dewPoint")]
        x: String,
        #[arg(long, default_value = "humidity")]
        y: String,
        /// Numeric field mapped onto a sequential color ramp
        #[arg(long)]
        color: Option<String>,
        /// Categorical field mapped onto the palette
        #[arg(long, conflicts_with = "color")]
        category: Option<String>,
        #[arg(long, default_value = "skyblue")]
        color_from: Rgba,
        #[arg(long, default_value = "darkslategrey")]
        color_to: Rgba,
        /// Hover through nearest-point cells
        #[arg(long)]
        voronoi: bool,
        /// Square chart side
        #[arg(long, default_value = "600")]
        size: f64,
    },
    /// Distribution of one numeric field
    Histogram {
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,
        #[arg(long, default_value = "humidity")]
        field: String,
        /// Target bucket count
        #[arg(long, default_value = "10")]
        bins: usize,
        /// Bin over LO,HI instead of the data extent
        #[arg(long, value_name = "LO,HI", value_parser = parse_point)]
        domain: Option<(f64, f64)>,
        /// Clamp values outside --domain into the end buckets instead of failing
        #[arg(long, requires = "domain")]
        clamp: bool,
        #[arg(long, default_value = "600")]
        width: f64,
        #[arg(long, default_value = "400")]
        height: f64,
    },
    /// Four squares that take their color on hover
    Events {
        /// Square colors (names or hex)
        #[arg(long, value_delimiter = ',')]
        colors: Vec<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Line { .. } => "line",
            Command::Scatter { .. } => "scatter",
            Command::Histogram { .. } => "histogram",
            Command::Events { .. } => "events",
        }
    }

    fn data(&self) -> Option<&Path> {
        match self {
            Command::Line { data, .. } | Command::Scatter { data, .. } | Command::Histogram { data, .. } => {
                data.as_deref()
            }
            Command::Events { .. } => None,
        }
    }

    /// Chart config described by the subcommand flags.
    pub fn config(&self) -> ChartConfig {
        match self {
            Command::Line { x, date_format, y, threshold, no_threshold, width, height, .. } => ChartConfig {
                kind: ChartKind::Line,
                width: *width,
                height: *height,
                margin: Some(Margin::line_chart()),
                x: Accessor::time(x.clone(), date_format.clone()),
                y: Some(Accessor::number(y.clone())),
                threshold: if *no_threshold { None } else { *threshold },
                y_label: format!("{} (°F)", y),
                ..ChartConfig::default()
            },
            Command::Scatter { x, y, color, category, color_from, color_to, voronoi, size, .. } => {
                let color = match (color, category) {
                    (Some(field), _) => Some(ColorConfig::Sequential {
                        accessor: Accessor::number(field.clone()),
                        from: *color_from,
                        to: *color_to,
                    }),
                    (None, Some(field)) => Some(ColorConfig::Ordinal {
                        accessor: Accessor::category(field.clone()),
                        categories: Vec::new(),
                        palette: EVENT_COLORS.iter().filter_map(|c| Rgba::parse(c).ok()).collect(),
                        fallback: None,
                    }),
                    (None, None) => None,
                };
                ChartConfig {
                    kind: ChartKind::Scatter,
                    width: *size,
                    height: *size,
                    x: Accessor::number(x.clone()),
                    y: Some(Accessor::number(y.clone())),
                    color,
                    voronoi: *voronoi,
                    x_label: x.clone(),
                    y_label: y.clone(),
                    ..ChartConfig::default()
                }
            }
            Command::Histogram { field, bins, domain, clamp, width, height, .. } => {
                let mut config = ChartConfig {
                    kind: ChartKind::Histogram,
                    width: *width,
                    height: *height,
                    x: Accessor::number(field.clone()),
                    y: None,
                    x_label: field.clone(),
                    ..ChartConfig::default()
                };
                config.bins.thresholds = *bins;
                config.bins.domain = *domain;
                if *clamp {
                    config.bins.out_of_domain = OutOfDomain::Clamp;
                }
                config
            }
            Command::Events { .. } => ChartConfig { kind: ChartKind::Swatches, ..ChartConfig::default() },
        }
    }
}

/// Parse `X,Y` into a coordinate pair.
pub fn parse_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}

/// What one invocation produced.
#[derive(Debug)]
pub struct Outcome {
    pub svg: PathBuf,
    pub png: Option<PathBuf>,
    pub marks: usize,
    /// Tooltip after the simulated hover, if one was requested.
    pub tooltip: Option<Tooltip>,
}

/// Dataset named on the command line, or the bundled sample.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Record>> {
    match path {
        Some(p) => loader::load(p).with_context(|| format!("failed to load dataset '{}'", p.display())),
        None => loader::parse_json(SAMPLE_DATA).context("bundled sample is malformed"),
    }
}

/// Draw the chart the arguments describe, without writing anything.
pub fn draw(args: &Args) -> Result<DrawnChart> {
    let mut drawn = if let Command::Events { colors } = &args.command {
        if args.config.is_some() {
            bail!("--config does not apply to the events chart");
        }
        let colors: Vec<&str> = if colors.is_empty() {
            EVENT_COLORS.to_vec()
        } else {
            colors.iter().map(String::as_str).collect()
        };
        let (mut config, records) = events_config(&colors).context("bad event colors")?;
        if let Some(theme) = &args.theme {
            config.theme = theme.clone();
        }
        Chart::new(config).draw(&records).context("failed to draw events chart")?
    } else {
        let mut config = match &args.config {
            Some(path) => ChartConfig::from_json_file(path)
                .with_context(|| format!("failed to read chart config '{}'", path.display()))?,
            None => args.command.config(),
        };
        if let Some(theme) = &args.theme {
            config.theme = theme.clone();
        }
        let records = load_records(args.command.data())?;
        Chart::new(config)
            .draw(&records)
            .with_context(|| format!("failed to draw {} chart", args.command.name()))?
    };

    if let Some((x, y)) = args.hover {
        drawn.pointer(PointerEvent::Move { x, y })?;
    }
    Ok(drawn)
}

/// Draw, then write SVG (and PNG when asked).
pub fn run(args: &Args) -> Result<Outcome> {
    let drawn = draw(args)?;
    if drawn.marks.is_empty() {
        bail!("chart has no marks; is the dataset empty?");
    }

    let svg = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("plotline-{}.svg", args.command.name())));
    ensure_parent(&svg)?;
    drawn.write_svg(&svg)?;
    info!("wrote {}", svg.display());

    if let Some(png) = &args.png {
        ensure_parent(png)?;
        drawn.render_png(png)?;
        info!("wrote {}", png.display());
    }

    Ok(Outcome {
        svg,
        png: args.png.clone(),
        marks: drawn.marks.len(),
        tooltip: args.hover.map(|_| drawn.tooltip().clone()),
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("failed to create '{}'", dir.display()))?;
    }
    Ok(())
}
