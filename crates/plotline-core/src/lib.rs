// File: crates/plotline-core/src/lib.rs
// Summary: Core library entry point; exports the chart pipeline from data loading to drawn surfaces.

pub mod accessor;
pub mod axis;
pub mod bin;
pub mod chart;
pub mod color;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod loader;
pub mod marks;
pub mod raster;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod voronoi;

pub use accessor::{Accessor, AccessorKind, AccessorSet};
pub use axis::{Axis, Orient};
pub use bin::{Bin, BinGenerator, OutOfDomain};
pub use chart::{events_config, events_demo, BinConfig, Chart, ChartConfig, ChartKind, ColorConfig, DrawnChart, TooltipField};
pub use color::Rgba;
pub use dimensions::{Dimensions, Margin};
pub use error::{ChartError, Result};
pub use interaction::{FocusDot, HighlightFill, HoverBehavior, HoverState, Interaction, PointerEvent, Tooltip};
pub use raster::RenderOptions;
pub use record::{Record, Value};
pub use scale::{
    ContinuousScale, LinearScale, OrdinalScale, PositionScale, SequentialColorScale, TimeScale, Unknown,
};
pub use scene::{Node, NodeId, Surface};
pub use theme::Theme;
pub use voronoi::HitRegions;
