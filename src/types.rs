// Core value types shared by the canvas, the brush and the window layer.

use std::ops::Range;

/// A pixel grid in the format minifb presents: each entry is 0x00RRGGBB.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // pixels per row
    pub height: usize,     // number of rows
    pub pixels: Vec<u32>,  // length = width * height
}

impl FrameBuffer {
    /// A buffer of the given size where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self { width, height, pixels: vec![color.to_u32(); width * height] }
    }
}

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB for minifb.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_u32(px: u32) -> Self {
        Self::rgb(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }

    /// Parse `RRGGBB` or `#RRGGBB` (hex digits, either case).
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_u32)
    }

    /// Six uppercase hex digits, no `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A pointer position in canvas pixels. May lie outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Half-open rectangle `[x0, x1) x [y0, y1)`. Not clamped to any surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square of side `size` around `center`: starts at `center - size / 2`.
    /// Integer division, so even sizes sit one pixel up-left of center.
    pub fn centered(center: Point, size: u32) -> Self {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        let x0 = center.x.saturating_sub(size / 2);
        let y0 = center.y.saturating_sub(size / 2);
        Self::new(x0, y0, x0.saturating_add(size), y0.saturating_add(size))
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    /// Intersection with `[0, width) x [0, height)` as usize ranges, or None if empty.
    pub fn clip(&self, width: usize, height: usize) -> Option<(Range<usize>, Range<usize>)> {
        let clamp = |v: i32, max: usize| -> usize { (v.max(0) as usize).min(max) };
        let (x0, x1) = (clamp(self.x0, width), clamp(self.x1, width));
        let (y0, y1) = (clamp(self.y0, height), clamp(self.y1, height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0..x1, y0..y1))
    }
}

/// Canvas dimensions, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
