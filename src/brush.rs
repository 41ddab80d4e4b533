// Brush state: the active color and the square side length in pixels.

use crate::types::Color;
use tracing::debug;

/// What happened to a committed brush-size entry.
#[derive(Debug, PartialEq, Eq)]
pub enum SizeChange {
    Accepted(u32),
    /// Parsed, but not a positive size.
    Rejected,
    /// Not an integer at all.
    Unparsable,
}

pub struct Brush {
    color: Color,
    size: u32,
}

impl Brush {
    pub fn new(color: Color, size: u32) -> Self {
        Self { color, size: size.max(1) }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_color(&mut self, color: Color) {
        debug!(?color, "brush color changed");
        self.color = color;
    }

    /// Commit textual size input. Anything other than a positive integer
    /// leaves the size untouched; callers restore the displayed text from `size()`.
    pub fn set_size(&mut self, text: &str) -> SizeChange {
        let n: i64 = match text.trim().parse() {
            Ok(n) => n,
            Err(_) => return SizeChange::Unparsable,
        };
        if n <= 0 {
            return SizeChange::Rejected;
        }
        match u32::try_from(n) {
            Ok(size) => {
                debug!(size, "brush size changed");
                self.size = size;
                SizeChange::Accepted(size)
            }
            Err(_) => SizeChange::Unparsable,
        }
    }
}
