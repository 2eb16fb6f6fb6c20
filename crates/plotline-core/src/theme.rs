// File: crates/plotline-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub line_stroke: Rgba,
    pub dot: Rgba,
    pub bar: Rgba,
    pub bar_label: Rgba,
    pub threshold_band: Rgba,
    /// Fill of interactive marks that are not hovered.
    pub idle: Rgba,
    pub focus_dot: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            tick: Rgba::rgb(0, 0, 0),
            line_stroke: Rgba::rgb(0xaf, 0x9f, 0x99),
            dot: Rgba::rgb(0x64, 0x95, 0xed),  // cornflowerblue
            bar: Rgba::rgb(0x64, 0x95, 0xed),
            bar_label: Rgba::rgb(0x66, 0x66, 0x66),
            threshold_band: Rgba::rgb(0xe0, 0xf3, 0xf3),
            idle: Rgba::rgb(0xd3, 0xd3, 0xd3),  // lightgrey
            focus_dot: Rgba::rgb(0x80, 0x00, 0x00), // maroon
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            line_stroke: Rgba::rgb(64, 160, 255),
            dot: Rgba::rgb(96, 156, 255),
            bar: Rgba::rgb(96, 156, 255),
            bar_label: Rgba::rgb(200, 200, 210),
            threshold_band: Rgba::rgb(30, 52, 60),
            idle: Rgba::rgb(70, 70, 78),
            focus_dot: Rgba::rgb(255, 230, 70),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
