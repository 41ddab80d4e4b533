// The canvas owns both surfaces and is the only place that writes to them,
// so the screen and the exported image never drift apart.

use crate::error::Error;
use crate::surface::{BackingRaster, DisplaySurface, FillTarget};
use crate::types::{CanvasSize, Color, Rect};
use std::path::Path;
use tracing::info;

/// The painting: screen pixels and export pixels, always the same size.
pub struct Canvas {
    size: CanvasSize,
    background: Color,
    display: DisplaySurface,
    backing: BackingRaster,
}

impl Canvas {
    /// Visual: an all-white canvas of `size` pixels.
    pub fn new(size: CanvasSize, background: Color) -> Self {
        Self {
            size,
            background,
            display: DisplaySurface::new(size.width, size.height, background),
            backing: BackingRaster::new(size.width, size.height, background),
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn backing(&self) -> &BackingRaster {
        &self.backing
    }

    /// Fill `rect` on both surfaces with the same bounds and color.
    /// Visual: one square block appears; the exported image gets the same block.
    pub fn apply_fill(&mut self, rect: Rect, color: Color) {
        self.display.fill_rect(rect, color);
        self.backing.fill_rect(rect, color);
    }

    /// Erase the screen and start a fresh backing image of the same size.
    /// Visual: every stroke disappears at once. There is no undo.
    pub fn clear(&mut self) {
        self.display.erase(self.background);
        self.backing = BackingRaster::new(self.size.width, self.size.height, self.background);
        info!("canvas cleared");
    }

    /// Write the backing image as PNG. The screen is untouched.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        self.backing
            .write_png(path)
            .map_err(|e| Error::Save(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "saved PNG");
        Ok(())
    }

    /// True when every pixel of the screen surface equals the backing image.
    pub fn surfaces_agree(&self) -> bool {
        let (w, h) = self.display.dimensions();
        if (w, h) != self.backing.dimensions() {
            return false;
        }
        (0..h).all(|y| (0..w).all(|x| self.display.pixel(x, y) == self.backing.pixel(x, y)))
    }
}
