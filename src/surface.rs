// The two pixel grids a stroke paints into:
// - DisplaySurface: 0x00RRGGBB pixels, copied into the window every frame.
// - BackingRaster: an RGB image, the only thing that gets exported.

use crate::types::{Color, FrameBuffer, Rect};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Something a solid rectangle can be filled into.
/// Parts of `rect` outside the target are ignored.
pub trait FillTarget {
    /// Visual: a flat square of `color` appears where the brush landed.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn pixel(&self, x: u32, y: u32) -> Color;
    fn dimensions(&self) -> (u32, u32);
}

/// What you see: the painting as the window shows it.
pub struct DisplaySurface {
    fb: FrameBuffer, // canvas-sized, copied into the window every frame
}

impl DisplaySurface {
    /// Visual: a blank canvas in the background color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { fb: FrameBuffer::filled(width as usize, height as usize, background) }
    }

    /// Erase everything that was drawn.
    /// Visual: the canvas goes back to plain white.
    pub fn erase(&mut self, background: Color) {
        self.fb.pixels.fill(background.to_u32());
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }
}

impl FillTarget for DisplaySurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((xs, ys)) = rect.clip(self.fb.width, self.fb.height) else { return };
        let packed = color.to_u32();
        for y in ys {
            let row = y * self.fb.width;
            self.fb.pixels[row + xs.start..row + xs.end].fill(packed);
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_u32(self.fb.pixels[y as usize * self.fb.width + x as usize])
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.fb.width as u32, self.fb.height as u32)
    }
}

/// What gets exported: never shown directly, but mirrors the screen pixel for pixel.
pub struct BackingRaster {
    img: RgbImage,
}

impl BackingRaster {
    /// A fresh image where every pixel is `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let px = Rgb([background.r, background.g, background.b]);
        Self { img: RgbImage::from_pixel(width, height, px) }
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    /// Encode as PNG at `path`, whatever its extension says.
    /// Nothing changes on screen; a file appears on disk.
    pub fn write_png(&self, path: &Path) -> image::ImageResult<()> {
        self.img.save_with_format(path, ImageFormat::Png)
    }
}

impl FillTarget for BackingRaster {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (w, h) = self.img.dimensions();
        let Some((xs, ys)) = rect.clip(w as usize, h as usize) else { return };
        let px = Rgb([color.r, color.g, color.b]);
        for y in ys {
            for x in xs.clone() {
                self.img.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *self.img.get_pixel(x, y);
        Color::rgb(r, g, b)
    }

    fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }
}
