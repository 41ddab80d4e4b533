// Control bar under the canvas: color swatch + palette, hex color field,
// brush-size field, CLEAR and SAVE PNG buttons, and a status line.
// Layout, hit testing and routing are pure; only `render` touches pixels.

use crate::app::{App, Event, Status};
use crate::draw::{GLYPH_HEIGHT, blit, draw_text_5x7, fill_rect, outline_rect, text_width};
use crate::input::{FieldKey, PointerInput};
use crate::types::{CanvasSize, Color, FrameBuffer, Point, Rect};

pub const BAR_HEIGHT: u32 = 24;
pub const MIN_WINDOW_WIDTH: u32 = 350;
const SIZE_MAX_CHARS: usize = 5;
const HEX_MAX_CHARS: usize = 6;
const CELL: i32 = 16; // palette cell side
const PALETTE_COLS: i32 = 8;

const BAR_BG: u32 = 0x00_D9_D9_D9;
const BUTTON_BG: u32 = 0x00_EE_EE_EE;
const BORDER: u32 = 0x00_80_80_80;
const FOCUS: u32 = 0x00_30_60_C0;
const TEXT: u32 = 0x00_20_20_20;
const FAIL_TEXT: u32 = 0x00_B0_20_20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Canvas,
    Swatch,
    ColorField,
    SizeField,
    Clear,
    Save,
    PaletteCell(usize),
    Nothing,
}

/// Which text field receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    None,
    Color,
    Size,
}

/// Where everything sits in the window.
pub struct Layout {
    canvas: CanvasSize,
    width: u32,
    swatch: Rect,
    hex_field: Rect,
    label_x: i32,
    size_field: Rect,
    clear: Rect,
    status_x: i32,
    save: Rect,
    palette: Rect,
}

impl Layout {
    pub fn new(canvas: CanvasSize) -> Self {
        let width = canvas.width.max(MIN_WINDOW_WIDTH);
        let top = canvas.height as i32;
        let (y0, y1) = (top + 4, top + BAR_HEIGHT as i32 - 4);
        let save_w = text_width("SAVE PNG") + 11;
        let right = width as i32 - 4;
        Self {
            canvas,
            width,
            swatch: Rect::new(4, y0, 28, y1),
            hex_field: Rect::new(32, y0, 86, y1),
            label_x: 92,
            size_field: Rect::new(120, y0, 160, y1),
            clear: Rect::new(166, y0, 166 + text_width("CLEAR") + 13, y1),
            status_x: 214,
            save: Rect::new(right - save_w, y0, right, y1),
            palette: Rect::new(4, top - 2 * CELL - 2, 4 + PALETTE_COLS * CELL, top - 2),
        }
    }

    pub fn window_width(&self) -> usize {
        self.width as usize
    }

    pub fn window_height(&self) -> usize {
        (self.canvas.height + BAR_HEIGHT) as usize
    }

    pub fn on_canvas(&self, x: i32, y: i32) -> bool {
        let area = Rect::new(0, 0, self.canvas.width as i32, self.canvas.height as i32);
        area.contains(Point::new(x, y))
    }

    pub fn hit(&self, x: i32, y: i32, palette_open: bool) -> Hit {
        let p = Point::new(x, y);
        if palette_open && self.palette.contains(p) {
            let col = (x - self.palette.x0) / CELL;
            let row = (y - self.palette.y0) / CELL;
            return Hit::PaletteCell((row * PALETTE_COLS + col) as usize);
        }
        if self.on_canvas(x, y) {
            Hit::Canvas
        } else if self.swatch.contains(p) {
            Hit::Swatch
        } else if self.hex_field.contains(p) {
            Hit::ColorField
        } else if self.size_field.contains(p) {
            Hit::SizeField
        } else if self.clear.contains(p) {
            Hit::Clear
        } else if self.save.contains(p) {
            Hit::Save
        } else {
            Hit::Nothing
        }
    }

    fn palette_cell(&self, i: usize) -> Rect {
        let (col, row) = (i as i32 % PALETTE_COLS, i as i32 / PALETTE_COLS);
        let x0 = self.palette.x0 + col * CELL;
        let y0 = self.palette.y0 + row * CELL;
        Rect::new(x0, y0, x0 + CELL, y0 + CELL)
    }
}

/// What the window loop should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Event),
    /// Ask the user for a destination, then dispatch `SaveRequested`.
    AskSavePath,
}

pub struct Controls {
    palette: [Color; 16],
    palette_open: bool,
    focus: Focus,
}

impl Controls {
    pub fn new(palette: [Color; 16]) -> Self {
        Self { palette, palette_open: false, focus: Focus::None }
    }

    pub fn palette_open(&self) -> bool {
        self.palette_open
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Route one pointer edge. `stroke_active` tells whether a drag belongs to a stroke.
    pub fn on_pointer(
        &mut self,
        input: PointerInput,
        layout: &Layout,
        stroke_active: bool,
    ) -> Option<Action> {
        match input {
            PointerInput::Pressed(x, y) => {
                let hit = layout.hit(x, y, self.palette_open);
                self.on_press(hit, x, y)
            }
            PointerInput::Dragged(x, y) if stroke_active => {
                Some(Action::Dispatch(Event::PointerMove(Point::new(x, y))))
            }
            PointerInput::Released if stroke_active => Some(Action::Dispatch(Event::PointerUp)),
            _ => None,
        }
    }

    fn on_press(&mut self, hit: Hit, x: i32, y: i32) -> Option<Action> {
        // The open palette is modal: any click closes it, only a cell picks.
        if self.palette_open {
            self.palette_open = false;
            let Hit::PaletteCell(i) = hit else { return None };
            let color = *self.palette.get(i)?;
            return Some(Action::Dispatch(Event::ColorPicked(color)));
        }
        self.focus = match hit {
            Hit::ColorField => Focus::Color,
            Hit::SizeField => Focus::Size,
            _ => Focus::None,
        };
        match hit {
            Hit::Canvas => Some(Action::Dispatch(Event::PointerDown(Point::new(x, y)))),
            Hit::Swatch => {
                self.palette_open = true;
                None
            }
            Hit::Clear => Some(Action::Dispatch(Event::ClearRequested)),
            Hit::Save => Some(Action::AskSavePath),
            _ => None,
        }
    }

    /// Edit the focused field; Enter commits it.
    /// A malformed hex color puts the field back to the active color.
    pub fn on_key(&mut self, key: FieldKey, app: &mut App) -> Option<Event> {
        match self.focus {
            Focus::None => None,
            Focus::Size => {
                let text = app.size_text_mut();
                edit_field(text, key, SIZE_MAX_CHARS, |_| true)
                    .then(|| Event::SizeCommitted(text.clone()))
            }
            Focus::Color => {
                let text = app.color_text_mut();
                if !edit_field(text, key, HEX_MAX_CHARS, |c| c.is_ascii_hexdigit()) {
                    return None;
                }
                let picked = Color::from_hex(text);
                if picked.is_none() {
                    app.restore_color_text();
                }
                picked.map(Event::ColorPicked)
            }
        }
    }

    /// Escape closes the palette; returns false when there was nothing to close.
    pub fn on_escape(&mut self) -> bool {
        std::mem::replace(&mut self.palette_open, false)
    }
}

/// Apply one key to a text field. Returns true when the key was Enter.
fn edit_field(text: &mut String, key: FieldKey, max: usize, accepts: fn(char) -> bool) -> bool {
    match key {
        FieldKey::Char(c) if accepts(c) && text.chars().count() < max => text.push(c),
        FieldKey::Char(_) => {}
        FieldKey::Backspace => {
            text.pop();
        }
        FieldKey::Enter => return true,
    }
    false
}

/// Compose the whole window frame: canvas, filler, control bar, palette.
/// Visual: the painting on top, the grey control strip below it, and the
/// palette popup floating over the bottom-left of the canvas while open.
pub fn render(screen: &mut FrameBuffer, layout: &Layout, app: &App, controls: &Controls) {
    let canvas = app.canvas().display().framebuffer();
    blit(screen, canvas);
    let (cw, ch) = (layout.canvas.width as i32, layout.canvas.height as i32);
    let w = layout.width as i32;
    fill_rect(screen, Rect::new(cw, 0, w, ch), BAR_BG);
    fill_rect(screen, Rect::new(0, ch, w, ch + BAR_HEIGHT as i32), BAR_BG);

    // Swatch shows the active color.
    fill_rect(screen, layout.swatch, app.brush().color().to_u32());
    outline_rect(screen, layout.swatch, BORDER);

    let text_y = layout.swatch.y0 + (layout.swatch.y1 - layout.swatch.y0 - GLYPH_HEIGHT) / 2;
    let hex = format!("#{}", app.color_text());
    text_field(screen, layout.hex_field, &hex, controls.focus == Focus::Color, text_y);

    draw_text_5x7(screen, layout.label_x, text_y, "SIZE", TEXT);
    let size_focused = controls.focus == Focus::Size;
    text_field(screen, layout.size_field, app.size_text(), size_focused, text_y);

    button(screen, layout.clear, "CLEAR", text_y);
    button(screen, layout.save, "SAVE PNG", text_y);

    let (status, color) = match app.status() {
        Status::Idle => ("", TEXT),
        Status::Saved => ("SAVED", TEXT),
        Status::SaveFailed => ("SAVE FAILED", FAIL_TEXT),
    };
    draw_text_5x7(screen, layout.status_x, text_y, status, color);

    if controls.palette_open {
        fill_rect(screen, layout.palette, BAR_BG);
        for (i, c) in controls.palette.iter().enumerate() {
            let cell = layout.palette_cell(i);
            fill_rect(screen, cell, c.to_u32());
            outline_rect(screen, cell, BORDER);
        }
    }
}

/// Visual: white box with the text; a blue border and a `|` caret while focused.
fn text_field(screen: &mut FrameBuffer, r: Rect, text: &str, focused: bool, text_y: i32) {
    fill_rect(screen, r, 0x00_FF_FF_FF);
    outline_rect(screen, r, if focused { FOCUS } else { BORDER });
    let mut shown = text.to_string();
    if focused {
        shown.push('|');
    }
    draw_text_5x7(screen, r.x0 + 3, text_y, &shown, TEXT);
}

/// Visual: light grey box with a centered label.
fn button(screen: &mut FrameBuffer, r: Rect, label: &str, text_y: i32) {
    fill_rect(screen, r, BUTTON_BG);
    outline_rect(screen, r, BORDER);
    let x = r.x0 + (r.x1 - r.x0 - text_width(label)) / 2;
    draw_text_5x7(screen, x, text_y, label, TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn setup() -> (Layout, Controls, App) {
        let config = Config::default();
        let size = CanvasSize::new(300, 200);
        (Layout::new(size), Controls::new(config.palette), App::new(size, &config))
    }

    fn press_in(controls: &mut Controls, layout: &Layout, r: Rect) -> Option<Action> {
        controls.on_pointer(PointerInput::Pressed(r.x0 + 1, r.y0 + 1), layout, false)
    }

    fn type_keys(controls: &mut Controls, app: &mut App, keys: &str) -> Option<Event> {
        let mut last = None;
        for c in keys.chars() {
            let key = match c {
                '<' => FieldKey::Backspace,
                '\n' => FieldKey::Enter,
                c => FieldKey::Char(c),
            };
            last = controls.on_key(key, app);
        }
        last
    }

    #[test]
    fn narrow_canvas_widens_window_only() {
        let layout = Layout::new(CanvasSize::new(50, 50));
        assert_eq!(layout.window_width(), MIN_WINDOW_WIDTH as usize);
        assert_eq!(layout.window_height(), 50 + BAR_HEIGHT as usize);
        assert_eq!(layout.hit(60, 10, false), Hit::Nothing);
        assert_eq!(layout.hit(49, 49, false), Hit::Canvas);
    }

    #[test]
    fn controls_do_not_overlap() {
        let layout = Layout::new(CanvasSize::new(50, 50));
        let hex_end = layout.hex_field.x0 + 3 + text_width("#FFFFFF|");
        let status_end = layout.status_x + text_width("SAVE FAILED");
        assert!(layout.swatch.x1 <= layout.hex_field.x0);
        assert!(hex_end < layout.hex_field.x1);
        assert!(layout.hex_field.x1 <= layout.label_x);
        assert!(layout.label_x + text_width("SIZE") < layout.size_field.x0);
        assert!(layout.size_field.x1 <= layout.clear.x0);
        assert!(layout.clear.x1 <= layout.status_x);
        assert!(status_end < layout.save.x0);
    }

    #[test]
    fn press_on_canvas_starts_stroke() {
        let (layout, mut controls, _) = setup();
        let action = controls.on_pointer(PointerInput::Pressed(10, 20), &layout, false);
        assert_eq!(action, Some(Action::Dispatch(Event::PointerDown(Point::new(10, 20)))));
        let drag = controls.on_pointer(PointerInput::Dragged(-30, 20), &layout, true);
        assert_eq!(drag, Some(Action::Dispatch(Event::PointerMove(Point::new(-30, 20)))));
        assert_eq!(
            controls.on_pointer(PointerInput::Released, &layout, true),
            Some(Action::Dispatch(Event::PointerUp))
        );
    }

    #[test]
    fn drag_outside_a_stroke_is_ignored() {
        let (layout, mut controls, _) = setup();
        assert_eq!(controls.on_pointer(PointerInput::Dragged(5, 5), &layout, false), None);
        assert_eq!(controls.on_pointer(PointerInput::Released, &layout, false), None);
    }

    #[test]
    fn palette_picks_and_dismisses() {
        let (layout, mut controls, _) = setup();
        assert_eq!(press_in(&mut controls, &layout, layout.swatch), None);
        assert!(controls.palette_open());

        // Second cell of the second row.
        let picked = press_in(&mut controls, &layout, layout.palette_cell(9));
        let expected = Config::default().palette[9];
        assert_eq!(picked, Some(Action::Dispatch(Event::ColorPicked(expected))));
        assert!(!controls.palette_open());

        // Clicking the canvas while open only dismisses it.
        press_in(&mut controls, &layout, layout.swatch);
        assert_eq!(controls.on_pointer(PointerInput::Pressed(200, 100), &layout, false), None);
        assert!(!controls.palette_open());
    }

    #[test]
    fn escape_closes_palette_first() {
        let (layout, mut controls, _) = setup();
        assert!(!controls.on_escape());
        press_in(&mut controls, &layout, layout.swatch);
        assert!(controls.on_escape());
        assert!(!controls.palette_open());
    }

    #[test]
    fn clear_and_save_buttons() {
        let (layout, mut controls, _) = setup();
        let clear = press_in(&mut controls, &layout, layout.clear);
        assert_eq!(clear, Some(Action::Dispatch(Event::ClearRequested)));
        let save = press_in(&mut controls, &layout, layout.save);
        assert_eq!(save, Some(Action::AskSavePath));
    }

    #[test]
    fn size_field_edits_only_when_focused() {
        let (layout, mut controls, mut app) = setup();
        assert_eq!(controls.on_key(FieldKey::Char('5'), &mut app), None);
        assert_eq!(app.size_text(), "18");

        press_in(&mut controls, &layout, layout.size_field);
        assert_eq!(controls.focus(), Focus::Size);
        let committed = type_keys(&mut controls, &mut app, "<<32\n");
        assert_eq!(committed, Some(Event::SizeCommitted("32".into())));
    }

    #[test]
    fn hex_field_sets_any_color() {
        let (layout, mut controls, mut app) = setup();
        press_in(&mut controls, &layout, layout.hex_field);
        assert_eq!(controls.focus(), Focus::Color);

        let picked = type_keys(&mut controls, &mut app, "<<<<<<1A2B3C\n");
        assert_eq!(picked, Some(Event::ColorPicked(Color::rgb(0x1A, 0x2B, 0x3C))));
        app.dispatch(picked.unwrap()).unwrap();
        assert_eq!(app.brush().color(), Color::rgb(0x1A, 0x2B, 0x3C));
        assert_eq!(app.color_text(), "1A2B3C");
    }

    #[test]
    fn hex_field_ignores_non_hex_keys_and_caps_length() {
        let (layout, mut controls, mut app) = setup();
        press_in(&mut controls, &layout, layout.hex_field);
        type_keys(&mut controls, &mut app, "<<<<<<-F-F0099AB");
        assert_eq!(app.color_text(), "FF0099");
    }

    #[test]
    fn short_hex_restores_active_color() {
        let (layout, mut controls, mut app) = setup();
        press_in(&mut controls, &layout, layout.hex_field);
        assert_eq!(type_keys(&mut controls, &mut app, "<<<\n"), None);
        assert_eq!(app.color_text(), "000000");
        assert_eq!(app.brush().color(), Color::BLACK);
    }

    #[test]
    fn clicking_elsewhere_drops_focus() {
        let (layout, mut controls, mut app) = setup();
        press_in(&mut controls, &layout, layout.hex_field);
        press_in(&mut controls, &layout, layout.clear);
        assert_eq!(controls.focus(), Focus::None);
        assert_eq!(type_keys(&mut controls, &mut app, "1\n"), None);
    }

    #[test]
    fn render_shows_canvas_and_swatch() {
        let (layout, controls, mut app) = setup();
        app.dispatch(Event::ColorPicked(Color::rgb(0, 128, 0))).unwrap();
        app.dispatch(Event::PointerDown(Point::new(20, 20))).unwrap();
        let (w, h) = (layout.window_width(), layout.window_height());
        let mut screen = FrameBuffer::filled(w, h, Color::BLACK);
        render(&mut screen, &layout, &app, &controls);
        let at = |x: i32, y: i32| screen.pixels[y as usize * screen.width + x as usize];
        assert_eq!(at(20, 20), 0x00_00_80_00);
        assert_eq!(at(150, 150), 0x00_FF_FF_FF);
        assert_eq!(at(layout.swatch.x0 + 5, layout.swatch.y0 + 5), 0x00_00_80_00);
    }
}
