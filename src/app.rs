// Application state and the single event dispatcher.
// The window layer turns raw input into `Event`s; everything that changes
// the drawing goes through `App::dispatch`.

use crate::brush::{Brush, SizeChange};
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::Error;
use crate::stroke::StrokeSession;
use crate::types::{CanvasSize, Color, Point};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    ColorPicked(Color),
    SizeCommitted(String),
    ClearRequested,
    /// Result of the save dialog; None when the user cancelled it.
    SaveRequested(Option<PathBuf>),
}

/// Last save outcome, shown in the control bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Saved,
    SaveFailed,
}

pub struct App {
    canvas: Canvas,
    brush: Brush,
    stroke: StrokeSession,
    size_text: String,  // what the brush-size field currently displays
    color_text: String, // what the hex color field displays, no leading '#'
    status: Status,
}

impl App {
    pub fn new(size: CanvasSize, config: &Config) -> Self {
        let brush = Brush::new(config.brush_color, config.brush_size);
        Self {
            canvas: Canvas::new(size, config.background),
            size_text: brush.size().to_string(),
            color_text: brush.color().to_hex(),
            brush,
            stroke: StrokeSession::default(),
            status: Status::Idle,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn stroke(&self) -> &StrokeSession {
        &self.stroke
    }

    pub fn size_text(&self) -> &str {
        &self.size_text
    }

    /// Uncommitted edits to the brush-size field.
    pub fn size_text_mut(&mut self) -> &mut String {
        &mut self.size_text
    }

    pub fn color_text(&self) -> &str {
        &self.color_text
    }

    /// Uncommitted edits to the hex color field.
    pub fn color_text_mut(&mut self) -> &mut String {
        &mut self.color_text
    }

    /// Put the hex field back to the active color after a bad entry.
    pub fn restore_color_text(&mut self) {
        self.color_text = self.brush.color().to_hex();
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn dispatch(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::PointerDown(p) => self.stroke.begin(&mut self.canvas, &self.brush, p),
            Event::PointerMove(p) => self.stroke.continue_to(&mut self.canvas, &self.brush, p),
            Event::PointerUp => self.stroke.end(),
            Event::ColorPicked(c) => {
                self.brush.set_color(c);
                self.color_text = c.to_hex();
            }
            Event::SizeCommitted(text) => match self.brush.set_size(&text) {
                SizeChange::Accepted(n) => self.size_text = n.to_string(),
                SizeChange::Rejected | SizeChange::Unparsable => {
                    debug!(input = %text, "brush size input ignored");
                    self.size_text = self.brush.size().to_string();
                }
            },
            Event::ClearRequested => self.canvas.clear(),
            Event::SaveRequested(None) => info!("save cancelled"),
            Event::SaveRequested(Some(path)) => match self.canvas.save(&path) {
                Ok(()) => self.status = Status::Saved,
                Err(e) => {
                    self.status = Status::SaveFailed;
                    return Err(e);
                }
            },
        }
        Ok(())
    }
}
