use eframe::egui::Color32;
use palette::Srgb;

use crate::scale::ThresholdScale;

// ---------------------------------------------------------------------------
// Temperature palette
// ---------------------------------------------------------------------------

/// Ascending cut-points in °C.
pub const TEMPERATURE_CUTS: [f64; 10] = [2.8, 3.9, 5.0, 6.1, 7.2, 8.3, 9.4, 10.5, 11.6, 12.7];

/// Diverging blue → red ramp, one more entry than [`TEMPERATURE_CUTS`].
pub const TEMPERATURE_COLORS: [Srgb<u8>; 11] = [
    Srgb::new(0x31, 0x36, 0x95),
    Srgb::new(0x45, 0x75, 0xb4),
    Srgb::new(0x74, 0xad, 0xd1),
    Srgb::new(0xab, 0xd9, 0xe9),
    Srgb::new(0xe0, 0xf3, 0xf8),
    Srgb::new(0xff, 0xff, 0xbf),
    Srgb::new(0xfe, 0xe0, 0x90),
    Srgb::new(0xfd, 0xae, 0x61),
    Srgb::new(0xf4, 0x6d, 0x43),
    Srgb::new(0xd7, 0x30, 0x27),
    Srgb::new(0xa5, 0x00, 0x26),
];

/// Fill for values the scale cannot place (NaN).
pub const MISSING_COLOR: Srgb<u8> = Srgb::new(0x80, 0x80, 0x80);

/// `#rrggbb` form used in SVG output.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

pub fn to_color32(color: Srgb<u8>) -> Color32 {
    Color32::from_rgb(color.red, color.green, color.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: temperature → color
// ---------------------------------------------------------------------------

/// Buckets absolute temperatures into the palette.
#[derive(Debug, Clone)]
pub struct ColorMap {
    scale: ThresholdScale<Srgb<u8>>,
    default_color: Srgb<u8>,
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap::new(TEMPERATURE_CUTS.to_vec(), TEMPERATURE_COLORS.to_vec())
    }
}

impl ColorMap {
    pub fn new(cuts: Vec<f64>, colors: Vec<Srgb<u8>>) -> Self {
        ColorMap {
            scale: ThresholdScale::new(cuts, colors),
            default_color: MISSING_COLOR,
        }
    }

    /// Color of the first bucket whose cut-point exceeds `temperature`.
    /// At or above the top cut-point this is the last color.
    pub fn color_for(&self, temperature: f64) -> Srgb<u8> {
        self.scale
            .apply(temperature)
            .copied()
            .unwrap_or(self.default_color)
    }

    pub fn scale(&self) -> &ThresholdScale<Srgb<u8>> {
        &self.scale
    }
}
