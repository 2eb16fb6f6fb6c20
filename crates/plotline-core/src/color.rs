// File: crates/plotline-core/src/color.rs
// Summary: RGBA colors, CSS-style parsing and linear interpolation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// CSS named colors the charts reach for.
const NAMED: &[(&str, Rgba)] = &[
    ("black", Rgba::rgb(0x00, 0x00, 0x00)),
    ("white", Rgba::rgb(0xff, 0xff, 0xff)),
    ("red", Rgba::rgb(0xff, 0x00, 0x00)),
    ("green", Rgba::rgb(0x00, 0x80, 0x00)),
    ("blue", Rgba::rgb(0x00, 0x00, 0xff)),
    ("grey", Rgba::rgb(0x80, 0x80, 0x80)),
    ("gray", Rgba::rgb(0x80, 0x80, 0x80)),
    ("lightgrey", Rgba::rgb(0xd3, 0xd3, 0xd3)),
    ("lightgray", Rgba::rgb(0xd3, 0xd3, 0xd3)),
    ("darkgrey", Rgba::rgb(0xa9, 0xa9, 0xa9)),
    ("darkgray", Rgba::rgb(0xa9, 0xa9, 0xa9)),
    ("cornflowerblue", Rgba::rgb(0x64, 0x95, 0xed)),
    ("skyblue", Rgba::rgb(0x87, 0xce, 0xeb)),
    ("steelblue", Rgba::rgb(0x46, 0x82, 0xb4)),
    ("slateblue", Rgba::rgb(0x6a, 0x5a, 0xcd)),
    ("darkslategrey", Rgba::rgb(0x2f, 0x4f, 0x4f)),
    ("darkslategray", Rgba::rgb(0x2f, 0x4f, 0x4f)),
    ("seagreen", Rgba::rgb(0x2e, 0x8b, 0x57)),
    ("yellowgreen", Rgba::rgb(0x9a, 0xcd, 0x32)),
    ("maroon", Rgba::rgb(0x80, 0x00, 0x00)),
    ("tomato", Rgba::rgb(0xff, 0x63, 0x47)),
    ("orange", Rgba::rgb(0xff, 0xa5, 0x00)),
    ("gold", Rgba::rgb(0xff, 0xd7, 0x00)),
    ("purple", Rgba::rgb(0x80, 0x00, 0x80)),
];

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `none`/`transparent` or a CSS name.
    pub fn parse(s: &str) -> Result<Self, ChartError> {
        let t = s.trim().to_ascii_lowercase();
        if t == "none" || t == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = t.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(s.to_string()));
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == t)
            .map(|(_, c)| *c)
            .ok_or_else(|| ChartError::InvalidColor(s.to_string()))
    }

    /// Component-wise linear interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// `#rrggbb`, or `none` when fully transparent.
    pub fn to_hex(&self) -> String {
        if self.a == 0 {
            return "none".to_string();
        }
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lossless text form: `#rrggbb` when opaque, `#rrggbbaa` otherwise,
    /// `none` for [`Rgba::TRANSPARENT`].
    pub fn to_css(&self) -> String {
        match self.a {
            255 => self.to_hex(),
            _ if *self == Self::TRANSPARENT => "none".to_string(),
            a => format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(Rgba::rgb(nib(0)? * 17, nib(1)? * 17, nib(2)? * 17)),
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)?)),
        _ => None,
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::parse(&s).map_err(serde::de::Error::custom)
    }
}
