// Stroke session: turns pointer samples of one drag into square fills.
// No interpolation: fast drags leave separate blocks.

use crate::brush::Brush;
use crate::canvas::Canvas;
use crate::types::{Point, Rect};
use tracing::trace;

/// One drag from button-down to button-up.
#[derive(Default)]
pub struct StrokeSession {
    anchor: Option<Point>, // last sampled position, None between strokes
}

impl StrokeSession {
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Start a stroke and paint one block at `point`, so a click without drag still paints.
    /// Visual: a single square of the brush color appears under the cursor.
    pub fn begin(&mut self, canvas: &mut Canvas, brush: &Brush, point: Point) {
        self.anchor = Some(point);
        self.stamp(canvas, brush, point);
    }

    /// Paint one block at `point`. Ignored when no stroke is active.
    /// Visual: another square; fast drags leave gaps between them.
    pub fn continue_to(&mut self, canvas: &mut Canvas, brush: &Brush, point: Point) {
        if self.anchor.is_none() {
            trace!(?point, "move without active stroke");
            return;
        }
        self.stamp(canvas, brush, point);
    }

    /// Visual: nothing changes; the next press starts a new stroke.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    fn stamp(&mut self, canvas: &mut Canvas, brush: &Brush, point: Point) {
        let rect = Rect::centered(point, brush.size());
        trace!(?rect, "stamp");
        canvas.apply_fill(rect, brush.color());
        self.anchor = Some(point);
    }
}
