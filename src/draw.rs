// Window + software drawing utilities.
// 1) A window that shows the canvas with the control bar underneath.
// 2) Filled/outlined rectangles for the controls.
// 3) A tiny 5x7 bitmap font for button labels and the text fields.

use crate::error::Error;
use crate::input::FieldKey;
use crate::types::{FrameBuffer, Rect};
use minifb::{CursorStyle, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,  // the on-screen window you see
    crosshair: bool, // cursor style currently set on the window
}

impl Drawer {
    /// Create a window sized to the canvas plus the control bar.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, crosshair: false })
    }

    /// Push the composed frame to the screen.
    /// Visual: the window immediately shows the latest strokes and controls.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Visual: closes the palette popup, or ends the program when none is open.
    pub fn esc_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
    }

    /// Mouse position in window pixels. Not clamped: during a drag the
    /// pointer may report positions left of / above / beyond the window.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32))
    }

    /// Visual: while true over the canvas, blocks get stamped under the cursor.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys relevant to the text fields typed since the last update.
    /// Visual: characters appear in whichever field has the blue border.
    pub fn field_keys(&self) -> Vec<FieldKey> {
        self.window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(field_key)
            .collect()
    }

    /// Visual: the cursor turns into a crosshair while it hovers the canvas.
    pub fn set_crosshair(&mut self, on: bool) {
        if on != self.crosshair {
            let style = if on { CursorStyle::Crosshair } else { CursorStyle::Arrow };
            self.window.set_cursor_style(style);
            self.crosshair = on;
        }
    }
}

fn field_key(key: Key) -> Option<FieldKey> {
    let digit = |d: u8| Some(FieldKey::Char(char::from(b'0' + d)));
    match key {
        Key::Key0 | Key::NumPad0 => digit(0),
        Key::Key1 | Key::NumPad1 => digit(1),
        Key::Key2 | Key::NumPad2 => digit(2),
        Key::Key3 | Key::NumPad3 => digit(3),
        Key::Key4 | Key::NumPad4 => digit(4),
        Key::Key5 | Key::NumPad5 => digit(5),
        Key::Key6 | Key::NumPad6 => digit(6),
        Key::Key7 | Key::NumPad7 => digit(7),
        Key::Key8 | Key::NumPad8 => digit(8),
        Key::Key9 | Key::NumPad9 => digit(9),
        Key::A => Some(FieldKey::Char('A')),
        Key::B => Some(FieldKey::Char('B')),
        Key::C => Some(FieldKey::Char('C')),
        Key::D => Some(FieldKey::Char('D')),
        Key::E => Some(FieldKey::Char('E')),
        Key::F => Some(FieldKey::Char('F')),
        Key::Minus | Key::NumPadMinus => Some(FieldKey::Char('-')),
        Key::Backspace => Some(FieldKey::Backspace),
        Key::Enter | Key::NumPadEnter => Some(FieldKey::Enter),
        _ => None,
    }
}

/* ---------- Software drawing: pixels, rectangles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill `r` with a solid color; parts outside the frame are skipped.
/// Visual: a flat block appears (buttons, fields, swatch, palette cells).
pub fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    let Some((xs, ys)) = r.clip(fb.width, fb.height) else { return };
    for y in ys {
        let row = y * fb.width;
        fb.pixels[row + xs.start..row + xs.end].fill(color);
    }
}

/// One-pixel border along the inside edge of `r`.
/// Visual: the thin grey frame around each control.
pub fn outline_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    for x in r.x0..r.x1 {
        put_pixel(fb, x, r.y0, color);
        put_pixel(fb, x, r.y1 - 1, color);
    }
    for y in r.y0..r.y1 {
        put_pixel(fb, r.x0, y, color);
        put_pixel(fb, r.x1 - 1, y, color);
    }
}

/// Copy `src` into `dst` with its top-left corner at (0,0).
/// Visual: the painting shows up in the top-left of the window.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer) {
    let w = src.width.min(dst.width);
    for y in 0..src.height.min(dst.height) {
        dst.pixels[y * dst.width..y * dst.width + w]
            .copy_from_slice(&src.pixels[y * src.width..y * src.width + w]);
    }
}

/* ---------- 5x7 bitmap font (uppercase labels, digits, a few symbols) ---------- */

pub const GLYPH_ADVANCE: i32 = 6; // 5 pixels glyph width + 1 pixel spacing
pub const GLYPH_HEIGHT: i32 = 7;

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters used by the control bar (CLEAR, SAVE PNG, SIZE, SAVED, FAILED)
        // plus the hex digits A-F for the color field.
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny dark glyph on the light control bar.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a blank cell.
/// Visual: a compact label; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += GLYPH_ADVANCE;
    }
}

pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_glyph_exists() {
        for ch in "CLEAR SAVE PNG SIZE SAVED FAILED #0123456789ABCDEF-|".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
        }
    }

    #[test]
    fn outline_leaves_interior() {
        let mut fb = FrameBuffer { width: 5, height: 5, pixels: vec![0; 25] };
        outline_rect(&mut fb, Rect::new(0, 0, 5, 5), 1);
        assert_eq!(fb.pixels[0], 1);
        assert_eq!(fb.pixels[24], 1);
        assert_eq!(fb.pixels[12], 0);
    }

    #[test]
    fn blit_copies_rows() {
        let src = FrameBuffer { width: 2, height: 2, pixels: vec![1, 2, 3, 4] };
        let mut dst = FrameBuffer { width: 3, height: 3, pixels: vec![0; 9] };
        blit(&mut dst, &src);
        assert_eq!(dst.pixels, vec![1, 2, 0, 3, 4, 0, 0, 0, 0]);
    }
}
