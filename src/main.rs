// Pixel Painter
// • Hold Left Mouse on the canvas: stamps square blocks of the brush color.
// • Swatch: pick from the palette. # field: type any RRGGBB, Enter to apply.
// • SIZE field: type a number, Enter to apply.
// • CLEAR wipes the canvas. SAVE PNG exports it.
// • ESC closes the palette, or quits when no palette is open.

use pixel_painter::app::{App, Event};
use pixel_painter::config::Config;
use pixel_painter::controls::{self, Action, Controls, Layout};
use pixel_painter::dialogs;
use pixel_painter::draw::Drawer;
use pixel_painter::error::Error;
use pixel_painter::input::PointerTracker;
use pixel_painter::logging;
use pixel_painter::prompt;
use pixel_painter::types::FrameBuffer;
use tracing::error;

fn main() -> Result<(), Error> {
    logging::init();
    let config = Config::default();

    /* --- Canvas size prompts ---
       Dismissing a prompt keeps the default size. */
    let stdin = std::io::stdin();
    let size = prompt::canvas_size(&mut stdin.lock(), &mut std::io::stdout(), &config)?;

    /* --- Window + state ---
       Visual: a white canvas with the control strip underneath. */
    let layout = Layout::new(size);
    let (width, height) = (layout.window_width(), layout.window_height());
    let mut drawer = Drawer::new(config.title, width, height)?;
    let mut screen = FrameBuffer::filled(width, height, config.background);
    let mut app = App::new(size, &config);
    let mut controls = Controls::new(config.palette);
    let mut pointer = PointerTracker::default();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        /* 1) Keyboard
           Visual: typed characters land in the focused field; ESC closes the palette or quits. */
        if drawer.esc_pressed_once() && !controls.on_escape() {
            break;
        }
        for key in drawer.field_keys() {
            if let Some(event) = controls.on_key(key, &mut app) {
                dispatch(&mut app, event);
            }
        }

        /* 2) Mouse: press / drag / release edges routed to canvas or controls */
        let pos = drawer.mouse_pos();
        if let Some(input) = pointer.update(drawer.left_mouse_down(), pos) {
            match controls.on_pointer(input, &layout, app.stroke().is_active()) {
                Some(Action::Dispatch(event)) => dispatch(&mut app, event),
                Some(Action::AskSavePath) => {
                    // Blocks the loop until the dialog closes.
                    let path = dialogs::ask_save_path();
                    dispatch(&mut app, Event::SaveRequested(path));
                }
                None => {}
            }
        }
        let over_canvas = pos.is_some_and(|(x, y)| layout.on_canvas(x, y));
        drawer.set_crosshair(over_canvas && !controls.palette_open());

        /* 3) Compose and present
           Visual: this is when the window actually updates. */
        controls::render(&mut screen, &layout, &app, &controls);
        drawer.present(&screen)?;
    }

    Ok(())
}

/// Save failures are reported and the app keeps running.
fn dispatch(app: &mut App, event: Event) {
    if let Err(e) = app.dispatch(event) {
        error!("{e}");
    }
}
