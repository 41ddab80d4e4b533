// Turns the polled mouse state (button held? where?) into press/drag/release edges.

/// A key that edits the brush-size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Pressed(i32, i32),
    /// Position changed while the button stays held.
    Dragged(i32, i32),
    Released,
}

#[derive(Default)]
pub struct PointerTracker {
    held: bool,
    last: Option<(i32, i32)>,
}

impl PointerTracker {
    /// Feed one frame of mouse state; returns the edge it produced, if any.
    /// A press with no known position is deferred until a position arrives.
    pub fn update(&mut self, down: bool, pos: Option<(i32, i32)>) -> Option<PointerInput> {
        match (self.held, down, pos) {
            (false, true, Some(p)) => {
                self.held = true;
                self.last = Some(p);
                Some(PointerInput::Pressed(p.0, p.1))
            }
            (true, true, Some(p)) if self.last != Some(p) => {
                self.last = Some(p);
                Some(PointerInput::Dragged(p.0, p.1))
            }
            (true, false, _) => {
                self.held = false;
                self.last = None;
                Some(PointerInput::Released)
            }
            _ => None,
        }
    }
}
