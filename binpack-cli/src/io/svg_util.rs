use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg: `"earth_tones"`, `"gray"` or `{"custom": {..}}`
    #[serde(default)]
    pub theme: SvgChartThemes,
    ///Draw every item as a separate segment of its bin's bar
    #[serde(default = "default_true")]
    pub draw_items: bool,
    ///Draw a dashed line at the bin volume (constant volume only)
    #[serde(default = "default_true")]
    pub capacity_line: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgChartThemes::default(),
            draw_items: true,
            capacity_line: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvgChartThemes {
    #[default]
    EarthTones,
    Gray,
    Custom(SvgChartTheme),
}

impl SvgChartThemes {
    pub fn get_theme(&self) -> SvgChartTheme {
        match self {
            SvgChartThemes::EarthTones => SvgChartTheme::EARTH_TONES,
            SvgChartThemes::Gray => SvgChartTheme::GRAY,
            SvgChartThemes::Custom(theme) => *theme,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgChartTheme {
    pub stroke_width_multiplier: f64,
    pub background_fill: Color,
    pub bin_fill: Color,
    pub item_fill: Color,
    pub oversized_fill: Color,
    pub capacity_color: Color,
}

impl SvgChartTheme {
    pub const EARTH_TONES: SvgChartTheme = SvgChartTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        bin_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        oversized_fill: Color(0xFF, 0x5E, 0x00), // ORANGE
        capacity_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgChartTheme = SvgChartTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        bin_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        oversized_fill: Color(0x63, 0x63, 0x63),
        capacity_color: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction).min(255.0) as u8;
    let g = (g as f64 * fraction).min(255.0) as u8;
    let b = (b as f64 * fraction).min(255.0) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a color like #RRGGBB, got {s:?}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("invalid color {s:?}: {e}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
