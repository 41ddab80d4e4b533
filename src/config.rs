// Fixed application settings. There is no config file; everything lives here.

use crate::types::{CanvasSize, Color};

pub struct Config {
    pub title: &'static str,
    pub default_size: CanvasSize,
    pub min_dimension: u32,
    pub max_dimension: u32,
    pub brush_size: u32,
    pub brush_color: Color,
    pub background: Color,
    pub palette: [Color; 16],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Pixel Painter",
            default_size: CanvasSize::new(735, 662),
            min_dimension: 50,
            max_dimension: 2000,
            brush_size: 18,
            brush_color: Color::BLACK,
            background: Color::WHITE,
            palette: [
                Color::rgb(0x00, 0x00, 0x00),
                Color::rgb(0x80, 0x80, 0x80),
                Color::rgb(0xC0, 0xC0, 0xC0),
                Color::rgb(0xFF, 0xFF, 0xFF),
                Color::rgb(0x80, 0x00, 0x00),
                Color::rgb(0xFF, 0x00, 0x00),
                Color::rgb(0xFF, 0x80, 0x00),
                Color::rgb(0xFF, 0xFF, 0x00),
                Color::rgb(0x00, 0x80, 0x00),
                Color::rgb(0x00, 0xFF, 0x00),
                Color::rgb(0x00, 0x80, 0x80),
                Color::rgb(0x00, 0xFF, 0xFF),
                Color::rgb(0x00, 0x00, 0x80),
                Color::rgb(0x00, 0x00, 0xFF),
                Color::rgb(0x80, 0x00, 0x80),
                Color::rgb(0xFF, 0x00, 0xFF),
            ],
        }
    }
}

impl Config {
    /// Clamp a requested canvas dimension into the allowed range.
    pub fn clamp_dimension(&self, v: i64) -> u32 {
        v.clamp(self.min_dimension as i64, self.max_dimension as i64) as u32
    }
}
